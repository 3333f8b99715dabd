use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SITE_DIR: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding the built site, `index.html` at its root.
    pub site_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;
        let site_dir = lookup("SITE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_DIR.to_string());
        Ok(Self {
            bind_addr,
            site_dir: PathBuf::from(site_dir),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.site_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.index_file(), PathBuf::from("frontend/dist/index.html"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("SITE_DIR", "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn blank_site_dir_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("SITE_DIR", "  ")])).unwrap();
        assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_string()));
    }
}
