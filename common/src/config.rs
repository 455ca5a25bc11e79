//! Client configuration for the uploader.
//!
//! The frontend is a static bundle, so overrides are baked in at build time:
//! `main.rs` reads `UPLOADER_API_BASE_URL` and `UPLOADER_DEBOUNCE_MS` with
//! `option_env!` and hands the raw strings to [`ClientConfig::from_env_values`].

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DEBOUNCE_MS: u32 = 400;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the backend, without a trailing slash. Empty means same origin.
    pub api_base_url: String,
    /// Quiet period after the last keystroke before a search is sent.
    pub debounce_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl ClientConfig {
    /// Applies raw override values on top of the defaults.
    ///
    /// A blank base URL and a debounce that is not a positive integer are
    /// ignored. The literal base `"/"` selects same-origin requests.
    pub fn from_env_values(base_url: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_string();
        }

        if let Some(ms) = debounce_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
        {
            config.debounce_ms = ms;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let config = ClientConfig::from_env_values(None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.debounce_ms, 400);
    }

    #[test]
    fn overrides_are_applied_and_trimmed() {
        let config = ClientConfig::from_env_values(Some(" https://csv.example.org/ "), Some("250"));
        assert_eq!(config.api_base_url, "https://csv.example.org");
        assert_eq!(config.debounce_ms, 250);
    }

    #[test]
    fn slash_base_means_same_origin() {
        let config = ClientConfig::from_env_values(Some("/"), None);
        assert_eq!(config.api_base_url, "");
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = ClientConfig::from_env_values(Some("   "), Some("soon"));
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_env_values(None, Some("0"));
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }
}
