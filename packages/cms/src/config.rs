//! CMS and content filter configuration
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for concurrently filtered carousel elements
const MAX_SUPPORTED_ELEMENT_CONCURRENCY: usize = 64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tuning of the recursive content filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// How many sibling carousel elements may be filtered at the same time.
    /// `1` filters them one after another in their original order.
    pub max_concurrent_elements: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_concurrent_elements: 1,
        }
    }
}

impl FilterConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_concurrent_elements == 0 {
            return Err("max_concurrent_elements must be greater than 0".to_string());
        }

        if self.max_concurrent_elements > MAX_SUPPORTED_ELEMENT_CONCURRENCY {
            return Err(format!(
                "max_concurrent_elements cannot exceed {}",
                MAX_SUPPORTED_ELEMENT_CONCURRENCY
            ));
        }

        Ok(())
    }
}

/// Locales content can be requested in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedLocale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ca")]
    Catalan,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "it")]
    Italian,
}

impl SupportedLocale {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLocale::English => "en",
            SupportedLocale::Spanish => "es",
            SupportedLocale::Catalan => "ca",
            SupportedLocale::Portuguese => "pt",
            SupportedLocale::Italian => "it",
        }
    }
}

/// Access credentials for the CMS backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsCredentials {
    pub token: String,
    pub api_endpoint: String,
}

/// Connection settings of a CMS client plus the filter tuning applied to
/// the content it delivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsConfig {
    pub credentials: CmsCredentials,

    #[serde(default)]
    pub locale: SupportedLocale,

    #[serde(default)]
    pub filter: FilterConfig,
}

impl CmsConfig {
    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CmsConfig = serde_json::from_str(json)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.credentials.token.trim().is_empty() {
            return Err("credentials.token cannot be empty".to_string());
        }

        let endpoint = &self.credentials.api_endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(format!(
                "credentials.apiEndpoint must be an http(s) URL, got '{}'",
                endpoint
            ));
        }

        self.filter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_config() {
        let config = FilterConfig::default();
        assert_eq!(config.max_concurrent_elements, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_config_validation() {
        let mut config = FilterConfig::default();

        // Invalid: no concurrency at all
        config.max_concurrent_elements = 0;
        assert!(config.validate().is_err());

        // Invalid: above supported bound
        config.max_concurrent_elements = MAX_SUPPORTED_ELEMENT_CONCURRENCY + 1;
        assert!(config.validate().is_err());

        config.max_concurrent_elements = 8;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cms_config_from_json_applies_defaults() {
        let config = CmsConfig::from_json_str(
            r#"{"credentials": {"token": "abc", "apiEndpoint": "https://cms.example.com/"}}"#,
        )
        .unwrap();

        assert_eq!(config.locale, SupportedLocale::English);
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.credentials.api_endpoint, "https://cms.example.com/");
    }

    #[test]
    fn test_cms_config_from_json_reads_locale_and_filter() {
        let config = CmsConfig::from_json_str(
            r#"{
                "credentials": {"token": "abc", "apiEndpoint": "http://localhost:8055/"},
                "locale": "es",
                "filter": {"maxConcurrentElements": 4}
            }"#,
        )
        .unwrap();

        assert_eq!(config.locale.code(), "es");
        assert_eq!(config.filter.max_concurrent_elements, 4);
    }

    #[test]
    fn test_cms_config_rejects_bad_credentials() {
        let err = CmsConfig::from_json_str(
            r#"{"credentials": {"token": " ", "apiEndpoint": "https://cms.example.com/"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CmsConfig::from_json_str(
            r#"{"credentials": {"token": "abc", "apiEndpoint": "ftp://cms.example.com/"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("http(s) URL"));
    }

    #[test]
    fn test_cms_config_rejects_malformed_json() {
        let err = CmsConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
