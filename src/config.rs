use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub xai_api_key: SecretString,
    pub xai_base_url: String,
    pub xai_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            xai_api_key: SecretString::from(
                env::var("XAI_API_KEY").unwrap_or_else(|_| "xai_api_key".to_string()),
            ),
            xai_base_url: env::var("XAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.x.ai/v1".to_string()),
            xai_model: env::var("XAI_MODEL")
                .unwrap_or_else(|_| "grok-4-1-fast-non-reasoning".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the API key is still the default placeholder
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.xai_api_key.expose_secret() == "xai_api_key" {
            panic!("FATAL: XAI_API_KEY is using default value! Set XAI_API_KEY environment variable.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            xai_api_key: SecretString::from("test_api_key".to_string()),
            xai_base_url: "http://127.0.0.1:9/v1".to_string(),
            xai_model: "grok-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            request_timeout_secs: 5,
        }
    }
}
