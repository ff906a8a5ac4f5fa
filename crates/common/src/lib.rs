//! Cloud Agent Common Library
//!
//! Wire schema, domain types and errors shared by the storage SDK.

pub mod error;
pub mod types;
pub mod wire;

/// Generated wire messages and agent clients for `cloudagent.storage.v1`.
pub mod proto {
    #![allow(clippy::all)]
    include!("generated/cloudagent.storage.v1.rs");
}

pub use error::{Error, Result};
pub use types::*;

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the cloud agent listens on unless told otherwise
pub const DEFAULT_AGENT_PORT: u16 = 55000;

/// Default per-user configuration directory
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".cloudagent")
}

/// Default client configuration file
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Home directory helper
mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
