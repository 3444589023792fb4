use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            json_logs: true,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Overlays CATALOG_* values returned by `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("CATALOG_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(host) = lookup("CATALOG_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("CATALOG_PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::invalid_input(
                format!("invalid CATALOG_PORT {:?}: {}", port, err).as_str(), Some("config".to_string())))?;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(json) = lookup("CATALOG_LOG_JSON") {
            config.json_logs = json.trim().parse::<bool>().map_err(|err| LibraryError::invalid_input(
                format!("invalid CATALOG_LOG_JSON {:?}: {}", json, err).as_str(), Some("config".to_string())))?;
        }
        Ok(config)
    }

    pub fn listen_addr(&self) -> LibraryResult<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse::<SocketAddr>().map_err(|err| LibraryError::invalid_input(
            format!("invalid listen address {}:{}: {}", self.host, self.port, err).as_str(), Some("config".to_string())))
    }
}
