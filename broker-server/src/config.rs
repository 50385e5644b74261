use broker_catalog::{ListErrorPolicy, ViewConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9091;

/// Runtime settings for the broker server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory of config files loaded into the store at startup.
    pub config_dir: Option<PathBuf>,
    pub list_errors: ListErrorPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            config_dir: None,
            list_errors: ListErrorPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            list_errors: self.list_errors,
        }
    }
}
