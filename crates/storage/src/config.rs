//! Client configuration

use cloudagent_common::{Error, Result, DEFAULT_AGENT_PORT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{AnonymousAuthorizer, Authorizer, BearerTokenAuthorizer};

/// Connection settings for a cloud agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Agent host name, `host:port`, or full `http://` URI
    pub server: String,

    /// Agent port, used when `server` does not carry one
    pub port: u16,

    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Deadline applied to every request
    pub request_timeout_secs: Option<u64>,

    /// Credential configuration
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: "127.0.0.1".to_string(),
            port: DEFAULT_AGENT_PORT,
            connect_timeout_secs: 10,
            request_timeout_secs: None,
            auth: AuthConfig::default(),
        }
    }
}

/// Credential configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Static bearer token
    pub token: Option<String>,

    /// File holding a bearer token
    pub token_file: Option<PathBuf>,
}

impl AuthConfig {
    /// Build the authorizer this configuration describes. An inline token
    /// wins over a token file; neither means anonymous.
    pub fn authorizer(&self) -> Result<Arc<dyn Authorizer>> {
        if let Some(token) = &self.token {
            return Ok(Arc::new(BearerTokenAuthorizer::new(token)?));
        }
        if let Some(path) = &self.token_file {
            return Ok(Arc::new(BearerTokenAuthorizer::from_file(path)?));
        }
        Ok(Arc::new(AnonymousAuthorizer))
    }
}

impl ClientConfig {
    /// Defaults pointed at one server
    pub fn for_server(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Default::default()
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from the per-user default location
    pub fn load_default() -> Result<Self> {
        Self::load(&cloudagent_common::default_config_path())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// URI of the agent endpoint
    pub fn endpoint(&self) -> Result<String> {
        let server = self.server.trim();
        if server.is_empty() {
            return Err(Error::InvalidConfig("server not specified".to_string()));
        }
        if server.contains("://") {
            return Ok(server.to_string());
        }
        if has_port(server) {
            return Ok(format!("http://{}", server));
        }
        Ok(format!("http://{}:{}", server, self.port))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `host:port` or `[v6]:port`; a bare IPv6 address has no port.
fn has_port(server: &str) -> bool {
    match server.rsplit_once(':') {
        Some((host, port)) => {
            let bracketed = host.starts_with('[') && host.ends_with(']');
            let plain = !host.contains(':');
            (bracketed || plain) && !port.is_empty() && port.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_endpoint() {
        let config = ClientConfig::for_server("agent.local");
        assert_eq!(config.endpoint().unwrap(), "http://agent.local:55000");

        let config = ClientConfig::for_server("agent.local:9000");
        assert_eq!(config.endpoint().unwrap(), "http://agent.local:9000");

        let config = ClientConfig::for_server("http://10.0.0.4:7000");
        assert_eq!(config.endpoint().unwrap(), "http://10.0.0.4:7000");

        let config = ClientConfig::for_server("[::1]:9000");
        assert_eq!(config.endpoint().unwrap(), "http://[::1]:9000");

        let config = ClientConfig::for_server("  ");
        assert!(config.endpoint().is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = ClientConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let config = ClientConfig {
            server: "agent.local".to_string(),
            port: 6000,
            connect_timeout_secs: 3,
            request_timeout_secs: Some(30),
            auth: AuthConfig {
                token: None,
                token_file: Some(tmp.path().join("token")),
            },
        };
        config.save(&path).unwrap();

        let loaded = ClientConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "server = \"10.1.1.1\"\n").unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.server, "10.1.1.1");
        assert_eq!(config.port, DEFAULT_AGENT_PORT);
        assert!(config.auth.token.is_none());
    }

    #[test]
    fn test_authorizer_selection() {
        let tmp = TempDir::new().unwrap();
        let token_file = tmp.path().join("token");
        std::fs::write(&token_file, "from-file\n").unwrap();

        let header = |auth: AuthConfig| {
            auth.authorizer()
                .unwrap()
                .authorization()
                .unwrap()
                .map(|value| value.to_str().unwrap().to_string())
        };

        assert_eq!(header(AuthConfig::default()), None);
        assert_eq!(
            header(AuthConfig {
                token: Some("inline".to_string()),
                token_file: None,
            }),
            Some("Bearer inline".to_string())
        );
        assert_eq!(
            header(AuthConfig {
                token: None,
                token_file: Some(token_file.clone()),
            }),
            Some("Bearer from-file".to_string())
        );
        assert_eq!(
            header(AuthConfig {
                token: Some("inline".to_string()),
                token_file: Some(token_file),
            }),
            Some("Bearer inline".to_string())
        );

        let missing = AuthConfig {
            token: None,
            token_file: Some(tmp.path().join("absent")),
        };
        assert!(matches!(missing.authorizer(), Err(Error::Auth(_))));
    }

    #[test]
    fn test_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"\n").unwrap();

        let err = ClientConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
