use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_CODEWARS_API_URL: &str = "https://www.codewars.com/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_addr: String,
    pub port: u16,

    // Codewars
    pub codewars_api_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Codewars
            codewars_api_url: std::env::var("CODEWARS_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_CODEWARS_API_URL.to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(10),
        })
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid IP address: {}", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["BIND_ADDR", "PORT", "CODEWARS_API_URL", "REQUEST_TIMEOUT_SECS"];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_empty() {
        clear_env();
        let config = Config::from_env().expect("Should load");

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.codewars_api_url, DEFAULT_CODEWARS_API_URL);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("CODEWARS_API_URL", "http://localhost:9999/api/v1/");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "3");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.port, 3000);
        assert_eq!(config.codewars_api_url, "http://localhost:9999/api/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_unparseable_numbers_fall_back() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("REQUEST_TIMEOUT_SECS", "0");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_bind_addr_is_error() {
        let config = Config {
            bind_addr: "localhost:abc".to_string(),
            port: 8080,
            codewars_api_url: DEFAULT_CODEWARS_API_URL.to_string(),
            request_timeout_secs: 10,
        };

        let err = config.socket_addr().unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
