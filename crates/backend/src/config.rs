use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "tileview_backend=info,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
}

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
    pub dist_dir: PathBuf,
    /// Prefix for generated tile URL templates. Derived from the request's
    /// `Host` header when unset.
    pub tile_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8234,
            catalog_path: PathBuf::from("data/catalog.json"),
            dist_dir: PathBuf::from("dist"),
            tile_base_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Config {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            catalog_path: get("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            dist_dir: get("DIST_DIR").map(PathBuf::from).unwrap_or(defaults.dist_dir),
            tile_base_url: get("TILE_BASE_URL").map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8234");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("CATALOG_PATH", "/srv/catalog.json"),
            ("DIST_DIR", "/srv/dist"),
            ("TILE_BASE_URL", "https://tiles.example.com/"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(cfg.tile_base_url.as_deref(), Some("https://tiles.example.com"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let cfg = Config::from_lookup(lookup(&[("PORT", " "), ("TILE_BASE_URL", "")])).unwrap();
        assert_eq!(cfg.port, 8234);
        assert!(cfg.tile_base_url.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT \"http\"");
    }
}
