//! # catalog-entity
//!
//! Domain records for the catalog backend. [`product::Product`] and
//! [`category::Category`] mirror what the record store holds;
//! [`product::ProductDto`] is the shape that crosses the presentation
//! boundary. The [`product::convert`] functions map between the two.

pub mod category;
pub mod product;
