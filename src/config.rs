use std::time::Duration;

pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost/api";
/// How long a fetched portfolio may be served before the API is asked again.
pub const REVALIDATE_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub revalidate: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            revalidate: Duration::from_secs(REVALIDATE_SECS),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(API_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url.trim())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_env_uses_default() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://localhost/api");
        assert_eq!(config.revalidate, Duration::from_secs(3600));
    }

    #[test]
    fn test_empty_env_uses_default() {
        let config = ApiConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::from_lookup(|key| {
            assert_eq!(key, API_URL_ENV);
            Some("https://api.example.com/v1/".to_string())
        });
        assert_eq!(
            config.endpoint("portfolio"),
            "https://api.example.com/v1/portfolio"
        );
        assert_eq!(config.endpoint("/contact"), "https://api.example.com/v1/contact");
    }
}
