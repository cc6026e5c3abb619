//! Resolver configuration.
//!
//! Loaded once by the embedding application and treated as read-only by
//! the engine.
//!
//! # Example
//!
//! ```toml
//! mapping = "static"
//!
//! [rewrite]
//! domain = "http://static.example.com"
//! ssl_domain = "https://static.example.com"
//!
//! [mime]
//! cur = "image/x-icon"
//! ```

mod rewrite;

pub use rewrite::RewriteRules;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Read-only resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Mapping prefix the resource endpoint is served under. Empty means
    /// no dedicated endpoint: URLs are made container-relative instead.
    pub mapping: String,

    /// Alternate-domain rewrite rules.
    pub rewrite: RewriteRules,

    /// Extension → MIME type overrides merged over the built-in table.
    pub mime: FxHashMap<String, String>,
}

impl ResolverConfig {
    /// Load configuration from a toml file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field shapes that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mapping.contains("://") {
            return Err(ConfigError::Validation(format!(
                "mapping '{}' must be a path prefix, not a full URL; \
                 use [rewrite] for domains",
                self.mapping
            )));
        }
        self.rewrite.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.mapping, "");
        assert!(config.rewrite.domain.is_none());
        assert!(config.rewrite.ssl_domain.is_none());
        assert!(config.mime.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
mapping = "static"

[rewrite]
domain = "http://static.example.com"
ssl_domain = "https://static.example.com"

[mime]
cur = "image/x-icon"
"#;
        let config: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.mapping, "static");
        assert_eq!(
            config.rewrite.domain.as_deref(),
            Some("http://static.example.com")
        );
        assert_eq!(config.mime.get("cur").map(String::as_str), Some("image/x-icon"));
        config.validate().unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cachebust.toml");
        fs::write(&path, "mapping = \"assets\"").unwrap();

        let config = ResolverConfig::load(&path).unwrap();
        assert_eq!(config.mapping, "assets");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ResolverConfig::load(Path::new("/nonexistent/cachebust.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_mapping_must_not_be_url() {
        let config: ResolverConfig =
            toml::from_str("mapping = \"http://cdn.example.com/static\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
