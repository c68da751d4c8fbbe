//! Server configuration.

use plotrate_fx::provider::FIXER_API_BASE;

/// Main server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub listen_addr: String,
    /// Listen port.
    pub listen_port: u16,
    /// Upstream rate API base URL.
    pub fixer_base_url: String,
    /// Upstream rate API credential. Its absence is not a startup failure;
    /// rate requests report a configuration error until it is provided.
    pub fixer_api_key: Option<String>,
    /// Log level.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".to_string(),
            listen_port: 5000,
            fixer_base_url: FIXER_API_BASE.to_string(),
            fixer_api_key: None,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("PLOTRATE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }

        if let Ok(port) = std::env::var("PLOTRATE_LISTEN_PORT") {
            if let Ok(port) = port.parse() {
                config.listen_port = port;
            }
        }

        if let Ok(url) = std::env::var("FIXER_API_BASE") {
            config.fixer_base_url = url;
        }

        if let Ok(key) = std::env::var("FIXER_API_KEY") {
            if !key.is_empty() {
                config.fixer_api_key = Some(key);
            }
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_port == 0 {
            return Err("Listen port cannot be 0".to_string());
        }

        if self.fixer_base_url.is_empty() {
            return Err("Rate API base URL cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.fixer_api_key.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = ServerConfig::default();
        config.listen_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url() {
        let mut config = ServerConfig::default();
        config.fixer_base_url.clear();
        assert!(config.validate().is_err());
    }
}
