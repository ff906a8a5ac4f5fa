//! Connections to the cloud agent

use cloudagent_common::proto::container_agent_client::ContainerAgentClient;
use cloudagent_common::proto::virtual_hard_disk_agent_client::VirtualHardDiskAgentClient;
use cloudagent_common::{Error, Result};
use std::sync::Arc;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::auth::{AuthInterceptor, Authorizer};
use crate::config::ClientConfig;

/// Channel with credentials attached to every request
pub type AgentChannel = InterceptedService<Channel, AuthInterceptor>;

/// An open handle to one agent service. Cheap to clone; every call works on
/// its own clone so the handle itself is never mutated after construction.
#[derive(Debug, Clone)]
pub struct Connection<C> {
    inner: C,
}

impl<C: Clone> Connection<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub(crate) fn client(&self) -> C {
        self.inner.clone()
    }
}

/// Builds authorized connections for each agent service
#[derive(Debug, Clone)]
pub struct ClientFactory {
    config: ClientConfig,
    authorizer: Arc<dyn Authorizer>,
}

impl ClientFactory {
    pub fn new(config: ClientConfig, authorizer: Arc<dyn Authorizer>) -> Self {
        Self { config, authorizer }
    }

    /// Factory using the credentials named in `config.auth`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let authorizer = config.auth.authorizer()?;
        Ok(Self::new(config, authorizer))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Connect to the agent. The authorizer is consulted once up front so
    /// unusable credentials fail here rather than on the first call.
    pub async fn channel(&self) -> Result<AgentChannel> {
        self.authorizer.authorization()?;

        let uri = self.config.endpoint()?;
        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| Error::InvalidConfig(format!("invalid endpoint {}: {}", uri, e)))?
            .connect_timeout(self.config.connect_timeout());
        if let Some(timeout) = self.config.request_timeout() {
            endpoint = endpoint.timeout(timeout);
        }

        debug!("Connecting to cloud agent at {}", uri);
        let channel = endpoint.connect().await?;
        info!("Connected to cloud agent at {}", uri);

        Ok(InterceptedService::new(
            channel,
            AuthInterceptor::new(self.authorizer.clone()),
        ))
    }

    pub async fn container_agent(&self) -> Result<Connection<ContainerAgentClient<AgentChannel>>> {
        let channel = self.channel().await?;
        Ok(Connection::new(ContainerAgentClient::new(channel)))
    }

    pub async fn virtual_hard_disk_agent(
        &self,
    ) -> Result<Connection<VirtualHardDiskAgentClient<AgentChannel>>> {
        let channel = self.channel().await?;
        Ok(Connection::new(VirtualHardDiskAgentClient::new(channel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AnonymousAuthorizer;
    use crate::config::AuthConfig;
    use crate::ContainerClient;
    use tonic::metadata::{Ascii, MetadataValue};

    #[derive(Debug)]
    struct ExpiredAuthorizer;

    impl Authorizer for ExpiredAuthorizer {
        fn authorization(&self) -> Result<Option<MetadataValue<Ascii>>> {
            Err(Error::Auth("credential expired".to_string()))
        }
    }

    #[tokio::test]
    async fn test_bad_credentials_fail_before_connecting() {
        let factory = ClientFactory::new(
            ClientConfig::for_server("127.0.0.1:1"),
            Arc::new(ExpiredAuthorizer),
        );

        let err = factory.channel().await.unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn test_client_reads_credentials_from_config() {
        let mut config = ClientConfig::for_server("127.0.0.1:1");
        config.auth = AuthConfig {
            token: None,
            token_file: Some("/nonexistent/cloudagent/token".into()),
        };

        assert!(matches!(
            ClientFactory::from_config(config.clone()),
            Err(Error::Auth(_))
        ));

        let Err(err) = ContainerClient::from_config(&config).await else {
            panic!("client built without usable credentials");
        };
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_rejected() {
        let factory = ClientFactory::new(
            ClientConfig::for_server("http://bad host:1"),
            Arc::new(AnonymousAuthorizer),
        );

        let err = factory.channel().await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_unreachable_agent_is_transport_error() {
        let mut config = ClientConfig::for_server("127.0.0.1:1");
        config.connect_timeout_secs = 1;
        let factory = ClientFactory::new(config, Arc::new(AnonymousAuthorizer));

        let err = factory.container_agent().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
