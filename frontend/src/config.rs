use serde::Deserialize;

/// Frontend configuration, read from the page's `app-config` JSON block
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub api_base_url: String,
    /// Selector of the transactions page root element
    pub root_selector: String,
    /// Selector of the account title region, looked up once at boot
    pub title_selector: String,
    pub title_placeholder: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
    /// When set, log records are also POSTed to this endpoint
    pub remote_log_endpoint: Option<String>,
    /// Account rendered right after boot, if any
    pub initial_account_id: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            root_selector: ".content-wrapper".to_string(),
            title_selector: ".content-title".to_string(),
            title_placeholder: "Название счёта".to_string(),
            log_level: "info".to_string(),
            remote_log_endpoint: None,
            initial_account_id: None,
        }
    }
}

impl FrontendConfig {
    /// Parse a JSON config block; missing keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }


    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = FrontendConfig::from_json(r#"{"api_base_url": "https://bank.example"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://bank.example");
        assert_eq!(config.title_selector, ".content-title");
        assert_eq!(config.title_placeholder, "Название счёта");
        assert_eq!(config.remote_log_endpoint, None);
    }

    #[test]
    fn test_blank_config_is_default() {
        assert_eq!(FrontendConfig::from_json("  \n").unwrap(), FrontendConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(FrontendConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_level_filter_parsing() {
        let mut config = FrontendConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
