use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Sort direction of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ValidationError::UnknownValue {
                kind: "sort direction",
                value: s.to_string(),
            }),
        }
    }
}

/// A field that a domain's index can be sorted on.
pub trait SortField: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Attribute name in the index.
    fn as_str(&self) -> &'static str;
}

/// Sort field for domains whose index has no sortable attributes.
///
/// Uninhabited, so such domains can never carry a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsorted {}

impl SortField for Unsorted {
    fn as_str(&self) -> &'static str {
        match *self {}
    }
}

/// Field plus direction, rendered as `field:direction` for the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortBy<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortBy<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn to_expression(&self) -> String {
        format!("{}:{}", self.field.as_str(), self.direction)
    }
}
