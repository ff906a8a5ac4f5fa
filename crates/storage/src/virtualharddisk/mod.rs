//! Virtual hard disks

mod remote;

pub use remote::{DiskScope, VirtualHardDiskKind};

use async_trait::async_trait;
use cloudagent_common::{Error, Result, VirtualHardDisk};
use std::sync::Arc;
use tracing::info;

use crate::auth::Authorizer;
use crate::client::ClientFactory;
use crate::config::ClientConfig;
use crate::operations::{RemoteOperations, ResourceKind};

/// Virtual hard disk operations against some backend
#[async_trait]
pub trait VirtualHardDiskService: Send + Sync {
    async fn get(&self, group: &str, container: &str, name: &str) -> Result<Vec<VirtualHardDisk>>;

    async fn create_or_update(
        &self,
        group: &str,
        container: &str,
        name: &str,
        vhd: &VirtualHardDisk,
    ) -> Result<VirtualHardDisk>;

    async fn delete(&self, group: &str, container: &str, name: &str) -> Result<()>;
}

/// Client for virtual hard disks
#[derive(Clone)]
pub struct VirtualHardDiskClient {
    internal: Arc<dyn VirtualHardDiskService>,
}

impl VirtualHardDiskClient {
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
            .virtual_hard_disk_agent()
            .await?;
        let operations = RemoteOperations::<VirtualHardDiskKind>::new(Arc::new(connection));
        Ok(Self::from_service(Arc::new(operations)))
    }

    /// Use any backend, e.g. an in-memory service in tests.
    pub fn from_service(service: Arc<dyn VirtualHardDiskService>) -> Self {
        Self { internal: service }
    }

    pub async fn get(&self, group: &str, container: &str, name: &str) -> Result<Vec<VirtualHardDisk>> {
        self.internal.get(group, container, name).await
    }

    pub async fn create_or_update(
        &self,
        group: &str,
        container: &str,
        name: &str,
        vhd: &VirtualHardDisk,
    ) -> Result<VirtualHardDisk> {
        self.internal.create_or_update(group, container, name, vhd).await
    }

    pub async fn delete(&self, group: &str, container: &str, name: &str) -> Result<()> {
        self.internal.delete(group, container, name).await
    }

    /// Change the size of an existing disk, keeping every other field as
    /// fetched.
    ///
    /// This is a Get followed by a CreateOrUpdate with no concurrency check
    /// between them: a write landing in between is overwritten.
    pub async fn resize(&self, group: &str, container: &str, name: &str, new_size: u64) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidInput(format!(
                "{} name not specified",
                VirtualHardDiskKind::KIND
            )));
        }

        let vhds = self.get(group, container, name).await?;
        let Some(mut vhd) = vhds.into_iter().next() else {
            return Err(Error::not_found(VirtualHardDiskKind::KIND, name));
        };

        let old_size = vhd.disk_size_bytes;
        vhd.disk_size_bytes = Some(new_size);
        self.create_or_update(group, container, name, &vhd).await?;

        info!(
            "Resized {} {}/{}/{} from {:?} to {} bytes",
            VirtualHardDiskKind::KIND,
            group,
            container,
            name,
            old_size,
            new_size
        );
        Ok(())
    }
}
