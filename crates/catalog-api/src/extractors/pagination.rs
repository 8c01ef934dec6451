//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use catalog_core::error::AppError;
use catalog_core::types::{PageRequest, SortDirection, SortField};

/// Query parameters for paginated endpoints.
///
/// `sort_by` is a comma-separated field list; each entry may carry its own
/// direction as `field:desc`. Entries without one use `sort_dir`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based).
    pub page: Option<i64>,
    /// Items per page.
    pub size: Option<i64>,
    /// Sort fields.
    pub sort_by: Option<String>,
    /// Default sort direction: "asc" or "desc".
    pub sort_dir: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, leaving range checks to normalization.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let default_direction = match self.sort_dir.as_deref() {
            Some(dir) => dir.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        let mut sort = Vec::new();
        for entry in self.sort_by.iter().flat_map(|s| s.split(',')) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let field = match entry.split_once(':') {
                Some((field, dir)) => SortField::new(field.trim(), dir.parse()?),
                None => SortField::new(entry, default_direction),
            };
            sort.push(field);
        }

        Ok(PageRequest {
            page: self.page,
            size: self.size,
            sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::error::ErrorKind;

    #[test]
    fn test_empty_params() {
        let request = PaginationParams::default().into_page_request().unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_sort_list_with_directions() {
        let params = PaginationParams {
            page: Some(2),
            size: Some(20),
            sort_by: Some("price:desc, name,".to_string()),
            sort_dir: Some("asc".to_string()),
        };
        let request = params.into_page_request().unwrap();

        assert_eq!(request.page, Some(2));
        assert_eq!(
            request.sort,
            vec![SortField::desc("price"), SortField::asc("name")]
        );
    }

    #[test]
    fn test_sort_dir_applies_to_bare_fields() {
        let params = PaginationParams {
            sort_by: Some("reg_date".to_string()),
            sort_dir: Some("DESC".to_string()),
            ..Default::default()
        };
        let request = params.into_page_request().unwrap();
        assert_eq!(request.sort, vec![SortField::desc("reg_date")]);
    }

    #[test]
    fn test_bad_direction_is_validation_error() {
        let params = PaginationParams {
            sort_by: Some("price".to_string()),
            sort_dir: Some("up".to_string()),
            ..Default::default()
        };
        let err = params.into_page_request().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
