//! Listing defaults.

use serde::{Deserialize, Serialize};

use crate::types::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE};

/// Defaults applied when normalizing page requests and building page results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when a request omits it or sends a non-positive value.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Number of page links in a navigation window.
    #[serde(default = "default_window_size")]
    pub window_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            window_size: default_window_size(),
        }
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_window_size() -> u64 {
    DEFAULT_WINDOW_SIZE
}
