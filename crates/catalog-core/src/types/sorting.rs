//! Sorting types for list endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::validation(format!(
                "Invalid sort direction '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// A caller-supplied sort specification: a field name and direction.
///
/// The field is unchecked; it becomes a [`SortOrder`] only after
/// normalization against a [`Sortable`] entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// A validated ordering term.
///
/// `column` always comes from a [`Sortable`] whitelist, so stores may
/// splice it into query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOrder {
    /// Whitelisted column name.
    pub column: &'static str,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Create a new ordering term.
    pub const fn new(column: &'static str, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Implemented by stored entity types that can be listed page by page.
pub trait Sortable {
    /// Resolve a caller-supplied field name to a sortable column.
    ///
    /// Returns `None` when the store cannot order by `field`.
    fn sort_column(field: &str) -> Option<&'static str>;

    /// Ordering applied when the request carries no sort.
    fn default_sort() -> Vec<SortOrder>;

    /// Unique column appended to every ordering so equal keys page stably.
    fn tiebreaker() -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_direction_parsing_is_case_insensitive() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!(" desc ".parse::<SortDirection>().unwrap(), SortDirection::Desc);

        let err = "sideways".parse::<SortDirection>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_sort_field_defaults_to_ascending() {
        let field: SortField = serde_json::from_str(r#"{"field":"price"}"#).unwrap();
        assert_eq!(field, SortField::asc("price"));
    }
}
