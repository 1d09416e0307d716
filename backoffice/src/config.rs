use crate::error::Error;
use crate::get_config_dir;
use crate::Result;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Tunables for the back-office client. Defaults mirror the values the admin
/// screens have always used: 7 products per page, 12 categories per page,
/// a 300 ms search debounce and a 3 s notification lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub products_per_page: usize,
    pub categories_per_page: usize,
    pub search_debounce_ms: u64,
    pub notification_duration_ms: u64,
    /// Maximum number of pages kept in each screen's page cache.
    pub cache_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3005".into(),
            products_per_page: 7,
            categories_per_page: 12,
            search_debounce_ms: 300,
            notification_duration_ms: 3000,
            cache_capacity: 32,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self> {
        let config_dir = get_config_dir()?;
        let config = if let Ok(config_file) =
            std::fs::read_to_string(config_dir.join(CONFIG_FILE_NAME))
        {
            toml::from_str(&config_file)?
        } else {
            Self::default()
        };
        config.validate()
    }
    fn validate(self) -> Result<Self> {
        if self.products_per_page == 0 {
            return Err(Error::InvalidPageSize(self.products_per_page));
        }
        if self.categories_per_page == 0 {
            return Err(Error::InvalidPageSize(self.categories_per_page));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("api_url = \"http://shop:4000\"").unwrap();
        assert_eq!(config.api_url, "http://shop:4000");
        assert_eq!(config.products_per_page, 7);
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config: Config = toml::from_str("products_per_page = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
