//! Storage containers

mod remote;

pub use remote::{ContainerKind, ContainerScope};

use async_trait::async_trait;
use cloudagent_common::{Container, Result};
use std::sync::Arc;

use crate::auth::Authorizer;
use crate::client::ClientFactory;
use crate::config::ClientConfig;
use crate::operations::RemoteOperations;

/// Container operations against some backend
#[async_trait]
pub trait ContainerService: Send + Sync {
    async fn get(&self, location: &str, name: &str) -> Result<Vec<Container>>;

    async fn create_or_update(
        &self,
        location: &str,
        name: &str,
        container: &Container,
    ) -> Result<Container>;

    async fn delete(&self, location: &str, name: &str) -> Result<()>;
}

/// Client for storage containers
#[derive(Clone)]
pub struct ContainerClient {
    internal: Arc<dyn ContainerService>,
}

impl ContainerClient {
    /// Connect to the agent at `server` with default settings.
    pub async fn new(server: &str, authorizer: Arc<dyn Authorizer>) -> Result<Self> {
        Self::with_config(&ClientConfig::for_server(server), authorizer).await
    }

    /// Connect using the configuration file's settings and credentials.
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_config(config, config.auth.authorizer()?).await
    }

    /// Connect with `config`'s endpoint settings, overriding its credentials
    /// with `authorizer`.
    pub async fn with_config(config: &ClientConfig, authorizer: Arc<dyn Authorizer>) -> Result<Self> {
        let connection = ClientFactory::new(config.clone(), authorizer)
            .container_agent()
            .await?;
        let operations = RemoteOperations::<ContainerKind>::new(Arc::new(connection));
        Ok(Self::from_service(Arc::new(operations)))
    }

    /// Use any backend, e.g. an in-memory service in tests.
    pub fn from_service(service: Arc<dyn ContainerService>) -> Self {
        Self { internal: service }
    }

    /// Containers named `name` in `location`; empty when there are none.
    pub async fn get(&self, location: &str, name: &str) -> Result<Vec<Container>> {
        self.internal.get(location, name).await
    }

    /// Create or update a container, returning the agent's view of it.
    pub async fn create_or_update(
        &self,
        location: &str,
        name: &str,
        container: &Container,
    ) -> Result<Container> {
        self.internal.create_or_update(location, name, container).await
    }

    /// Delete a container; fails with not-found if it does not exist.
    pub async fn delete(&self, location: &str, name: &str) -> Result<()> {
        self.internal.delete(location, name).await
    }
}
