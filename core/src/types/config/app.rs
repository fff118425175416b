use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Number of hits shown per page.
#[nutype(
    validate(greater = 0),
    default = 12,
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Default,
        Display,
        TryFrom,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct PageSize(usize);

impl PageSize {
    pub fn get(self) -> usize {
        self.into_inner()
    }
}

/// Application configuration, persisted as config.toml.
///
/// Every value is read once when a controller is built and treated as a
/// constant afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub reviews: ReviewsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::info!("{} not found, using default config", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.account.min_password_length == 0 {
            errors.push("min_password_length must be at least 1".to_string());
        }

        if self.account.min_password_length > self.account.max_chars {
            errors.push("min_password_length must not exceed max_chars".to_string());
        }

        if self.account.code_length == 0 {
            errors.push("code_length must be at least 1".to_string());
        }

        if self.reviews.min_chars > self.reviews.max_chars {
            errors.push("reviews.min_chars must not exceed reviews.max_chars".to_string());
        }

        if self.reviews.max_thumbs == 0 {
            errors.push("max_thumbs must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let account_defaults = AccountConfig::default();
        let reviews_defaults = ReviewsConfig::default();

        let account = if self.account.min_password_length == 0
            || self.account.min_password_length > self.account.max_chars
        {
            tracing::warn!("invalid password bounds, using defaults");
            AccountConfig {
                max_chars: account_defaults.max_chars,
                min_password_length: account_defaults.min_password_length,
                ..self.account.clone()
            }
        } else {
            self.account.clone()
        };

        let account = AccountConfig {
            code_length: if account.code_length == 0 {
                account_defaults.code_length
            } else {
                account.code_length
            },
            ..account
        };

        let reviews = ReviewsConfig {
            min_chars: if self.reviews.min_chars > self.reviews.max_chars {
                reviews_defaults.min_chars
            } else {
                self.reviews.min_chars
            },
            max_chars: if self.reviews.min_chars > self.reviews.max_chars {
                reviews_defaults.max_chars
            } else {
                self.reviews.max_chars
            },
            max_thumbs: if self.reviews.max_thumbs == 0 {
                reviews_defaults.max_thumbs
            } else {
                self.reviews.max_thumbs
            },
            thumbs_flush_ms: self.reviews.thumbs_flush_ms,
        };

        Self {
            search: self.search.clone(),
            account,
            reviews,
            limits: self.limits.clone(),
            endpoints: self.endpoints.clone(),
        }
    }
}

/// Search paging and highlighting.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub page_size: PageSize,
    #[serde(default = "default_highlight_pre_tag")]
    pub highlight_pre_tag: String,
    #[serde(default = "default_highlight_post_tag")]
    pub highlight_post_tag: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            highlight_pre_tag: default_highlight_pre_tag(),
            highlight_post_tag: default_highlight_post_tag(),
        }
    }
}

fn default_highlight_pre_tag() -> String {
    "<mark>".to_string()
}

fn default_highlight_post_tag() -> String {
    "</mark>".to_string()
}

/// Account form limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Domain an account email must end in, after the `@`.
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    #[serde(default = "default_error_max_chars")]
    pub error_max_chars: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            min_password_length: default_min_password_length(),
            code_length: default_code_length(),
            email_domain: default_email_domain(),
            error_max_chars: default_error_max_chars(),
        }
    }
}

fn default_max_chars() -> usize {
    100
}

fn default_min_password_length() -> usize {
    10
}

fn default_code_length() -> usize {
    6
}

fn default_email_domain() -> String {
    "purdue.edu".to_string()
}

fn default_error_max_chars() -> usize {
    crate::error::ERROR_MAX_CHARS
}

/// Review writing and voting limits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewsConfig {
    #[serde(default = "default_review_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_review_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_thumbs")]
    pub max_thumbs: usize,
    #[serde(default = "default_thumbs_flush_ms")]
    pub thumbs_flush_ms: u64,
}

impl ReviewsConfig {
    pub fn thumbs_flush_delay(&self) -> Duration {
        Duration::from_millis(self.thumbs_flush_ms)
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            min_chars: default_review_min_chars(),
            max_chars: default_review_max_chars(),
            max_thumbs: default_max_thumbs(),
            thumbs_flush_ms: default_thumbs_flush_ms(),
        }
    }
}

fn default_review_min_chars() -> usize {
    10
}

fn default_review_max_chars() -> usize {
    350
}

fn default_max_thumbs() -> usize {
    20
}

fn default_thumbs_flush_ms() -> u64 {
    30_000
}

/// Cool-down windows for user-triggered network actions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_auth_cooldown_ms")]
    pub auth_cooldown_ms: u64,
    #[serde(default = "default_post_cooldown_ms")]
    pub post_cooldown_ms: u64,
}

impl LimitsConfig {
    pub fn auth_cooldown(&self) -> Duration {
        Duration::from_millis(self.auth_cooldown_ms)
    }

    pub fn post_cooldown(&self) -> Duration {
        Duration::from_millis(self.post_cooldown_ms)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            auth_cooldown_ms: default_auth_cooldown_ms(),
            post_cooldown_ms: default_post_cooldown_ms(),
        }
    }
}

fn default_auth_cooldown_ms() -> u64 {
    500
}

fn default_post_cooldown_ms() -> u64 {
    1000
}

/// Where the search index and backends live.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_meili_url")]
    pub meili_url: String,
    #[serde(default)]
    pub meili_key: Option<String>,
    #[serde(default = "default_swap_backend")]
    pub swap_backend: String,
    #[serde(default = "default_housing_backend")]
    pub housing_backend: String,
    #[serde(default = "default_home_backend")]
    pub home_backend: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            meili_url: default_meili_url(),
            meili_key: None,
            swap_backend: default_swap_backend(),
            housing_backend: default_housing_backend(),
            home_backend: default_home_backend(),
        }
    }
}

fn default_meili_url() -> String {
    "http://localhost:7700".to_string()
}

fn default_swap_backend() -> String {
    "http://localhost:8080/swap".to_string()
}

fn default_housing_backend() -> String {
    "http://localhost:8080/housing".to_string()
}

fn default_home_backend() -> String {
    "http://localhost:8080/home".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
