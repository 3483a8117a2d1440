use crate::error::ServerError;
use index::{BackendConfig, StoreConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use vectorizer::VectorizerConfig;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the redb vector store, opened read-only
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Dimension of every stored vector
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Occurrence count fed to the weight model for every vector
    #[serde(default = "default_occurrence")]
    pub occurrence: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            store_path: default_store_path(),
            dimension: default_dimension(),
            occurrence: default_occurrence(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `vectorizer.*` file, then
    /// `VECTORIZER_*` environment variables (`__` separates nested keys).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("vectorizer").required(false))
            .add_source(
                config::Environment::with_prefix("VECTORIZER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.dimension == 0 {
            return Err(ServerError::Config("dimension must be positive".into()));
        }
        if self.occurrence <= 1 {
            return Err(ServerError::Config(format!(
                "occurrence must be greater than 1, got {}",
                self.occurrence
            )));
        }
        if self.store_path.trim().is_empty() {
            return Err(ServerError::Config("store_path is required".into()));
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .with_backend(BackendConfig::redb(self.store_path.clone()))
            .with_dimension(self.dimension)
    }

    pub fn vectorizer_config(&self) -> VectorizerConfig {
        VectorizerConfig {
            occurrence: self.occurrence,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9876
}

fn default_store_path() -> String {
    "./embeddings.redb".to_string()
}

fn default_dimension() -> usize {
    index::DEFAULT_DIMENSION
}

fn default_occurrence() -> u64 {
    vectorizer::DEFAULT_OCCURRENCE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 9876);
        assert_eq!(cfg.dimension, 300);
        assert_eq!(cfg.occurrence, 102);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert!(cfg.enable_cors);
        assert!(cfg.metrics_enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 9876);
    }

    #[test]
    fn test_validate_rejects_degenerate_settings() {
        let cfg = ServerConfig {
            occurrence: 1,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ServerError::Config(_))));

        let cfg = ServerConfig {
            dimension: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let cfg: ServerConfig = serde_json::from_str(r#"{"port": 1234}"#).unwrap();
        assert_eq!(cfg.port, 1234);
        assert_eq!(cfg.store_path, "./embeddings.redb");
    }
}
