mod app;

pub use app::{
    AccountConfig, AppConfig, AppConfigError, EndpointsConfig, LimitsConfig, PageSize,
    PageSizeError, ReviewsConfig, SearchSettings,
};
