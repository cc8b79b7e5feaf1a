//! Application configuration

/// Default backend used when `TA_CHATBOT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Static configuration shared through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Product name shown in headers and titles
    pub app_name: &'static str,
    /// One-line description under the name
    pub tagline: &'static str,
    /// Base URL of the chat backend
    pub api_base: String,
    /// Minimum accepted password length on the auth forms
    pub min_password_len: usize,
}

impl AppConfig {
    /// Build the configuration, applying build-time overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("TA_CHATBOT_API_BASE") {
            config.api_base = normalize_base(base);
        }
        config
    }

    /// Join an API path onto the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "TA Chatbot",
            tagline: "Your course textbook, one question away",
            api_base: DEFAULT_API_BASE.to_string(),
            min_password_len: 8,
        }
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.min_password_len, 8);
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint("/api/query"), "http://localhost:5000/api/query");
        assert_eq!(config.endpoint("api/query"), "http://localhost:5000/api/query");
    }

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base(" https://ta.example.edu/ "), "https://ta.example.edu");
    }
}
