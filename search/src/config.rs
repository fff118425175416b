use boiler_core::types::AppConfig;
use boiler_core::{PageSize, SearchSettings};

/// Settings the search edge needs, copied out of [`AppConfig`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub meili_url: String,
    pub meili_key: Option<String>,
    pub settings: SearchSettings,
    /// Longest error message shown after a failed search.
    pub error_max_chars: usize,
}

impl SearchConfig {
    pub fn page_size(&self) -> PageSize {
        self.settings.page_size
    }
}

impl From<&AppConfig> for SearchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            meili_url: config.endpoints.meili_url.clone(),
            meili_key: config.endpoints.meili_key.clone(),
            settings: config.search.clone(),
            error_max_chars: config.account.error_max_chars,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}
