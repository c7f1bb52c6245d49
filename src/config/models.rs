use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Content store backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Fjall,
    Memory,
}

/// Content store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Fjall keyspace directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Seed document loaded into the memory backend at startup
    pub seed: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
            seed: None,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/content")
}

/// Public file URL configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesConfig {
    /// Absolute base URL files are served from
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Path below the base URL that `public://` maps onto
    #[serde(default = "default_public_files_path")]
    pub public_files_path: String,
    /// Path below the base URL that `private://` maps onto
    #[serde(default = "default_private_files_path")]
    pub private_files_path: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            public_files_path: default_public_files_path(),
            private_files_path: default_private_files_path(),
        }
    }
}

fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_public_files_path() -> String {
    "sites/default/files".to_string()
}

fn default_private_files_path() -> String {
    "system/files".to_string()
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.store.backend, StoreBackend::Fjall);
        assert_eq!(config.store.path, PathBuf::from("data/content"));
        assert_eq!(config.files.public_files_path, "sites/default/files");
        assert_eq!(config.files.private_files_path, "system/files");
        assert_eq!(config.telemetry.log_filter, "info");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
[store]
backend = "memory"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.files.public_base_url, "http://localhost:8080");
    }
}
