pub(crate) mod config;
pub use config::{
    AccountConfig, AppConfig, AppConfigError, EndpointsConfig, LimitsConfig, PageSize,
    PageSizeError, ReviewsConfig, SearchSettings,
};

pub mod domain;

pub(crate) mod review_id;
pub use review_id::{ReviewId, ReviewIdError};

pub(crate) mod sort;
pub use sort::{SortBy, SortDirection, SortField, Unsorted};
