//! Cloud Agent Storage SDK
//!
//! Typed clients for the storage resources managed by a cloud agent:
//! containers and virtual hard disks. Each client turns a call into a single
//! `Invoke` request against the agent and converts the descriptors it gets
//! back into domain objects.
//!
//! ```no_run
//! use std::sync::Arc;
//! use cloudagent_storage::{auth::BearerTokenAuthorizer, VirtualHardDiskClient};
//!
//! # async fn run() -> cloudagent_storage::Result<()> {
//! let authorizer = Arc::new(BearerTokenAuthorizer::new("token")?);
//! let disks = VirtualHardDiskClient::new("agent.local", authorizer).await?;
//! disks.resize("group1", "container1", "disk0", 64 << 30).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod container;
pub mod memory;
pub mod operations;
pub mod virtualharddisk;

pub use cloudagent_common::{
    Container, ContainerInfo, DiskFileFormat, Error, HealthState, HyperVGeneration,
    ProvisioningState, ResourceStatus, Result, Tags, VirtualHardDisk,
};
pub use config::{AuthConfig, ClientConfig};
pub use container::{ContainerClient, ContainerService};
pub use virtualharddisk::{VirtualHardDiskClient, VirtualHardDiskService};
