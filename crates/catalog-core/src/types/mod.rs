//! Core type definitions used across the catalog workspace.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::{CategoryId, ProductId};
pub use pagination::{PageQuery, PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField, SortOrder, Sortable};
