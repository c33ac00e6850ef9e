use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::blockcypher::{ClientConfig, DEFAULT_BASE_URL};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the address API
    pub api_url: String,

    /// Optional API token appended to every request
    pub api_token: Option<String>,

    /// Transactions requested per address
    pub tx_limit: u32,

    pub request_timeout_secs: u64,

    /// Default log filter when RUST_LOG is unset
    pub log_level: String,

    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            tx_limit: 50,
            request_timeout_secs: 10,
            log_level: "walletscope=info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            token: self
                .api_token
                .clone()
                .filter(|t| !t.trim().is_empty()),
            tx_limit: self.tx_limit.max(1),
            timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(|| data_dir().map(|dir| dir.join("logs")))
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content)
}

pub fn parse(content: &str) -> Config {
    toml::from_str::<Config>(content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("WALLETSCOPE_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletscope").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("walletscope").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "walletscope", "walletscope")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletscope"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("walletscope"));
    }
    directories::ProjectDirs::from("io", "walletscope", "walletscope")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse("api_token = \"abc\"\ntx_limit = 20\n");
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_token.as_deref(), Some("abc"));
        assert_eq!(config.tx_limit, 20);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let config = parse("tx_limit = \"lots\"");
        assert_eq!(config.tx_limit, 50);
    }

    #[test]
    fn test_client_config_sanitizes() {
        let config = Config {
            api_token: Some("  ".into()),
            tx_limit: 0,
            request_timeout_secs: 0,
            ..Config::default()
        };
        let client = config.client_config();
        assert_eq!(client.token, None);
        assert_eq!(client.tx_limit, 1);
        assert_eq!(client.timeout, Duration::from_secs(1));
    }
}
