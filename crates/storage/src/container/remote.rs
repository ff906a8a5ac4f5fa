//! Container wire mapping and agent binding

use async_trait::async_trait;
use cloudagent_common::proto::{self, container_agent_client::ContainerAgentClient, Operation};
use cloudagent_common::wire::{non_empty, tags_from_wire, tags_to_wire};
use cloudagent_common::{Container, ContainerInfo, Error, ResourceStatus, Result};

use super::ContainerService;
use crate::client::{AgentChannel, Connection};
use crate::operations::{resolve_name, Invoke, RemoteOperations, ResourceKind};

/// Containers are scoped by location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerScope {
    pub location: String,
}

impl ContainerScope {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

pub struct ContainerKind;

impl ResourceKind for ContainerKind {
    const KIND: &'static str = "Container";

    type Resource = Container;
    type Scope = ContainerScope;
    type Wire = proto::Container;
    type Request = proto::ContainerRequest;
    type Response = proto::ContainerResponse;

    fn validate(scope: &ContainerScope) -> Result<()> {
        if scope.location.is_empty() {
            return Err(Error::InvalidInput("Location not specified".to_string()));
        }
        Ok(())
    }

    fn identity(scope: &ContainerScope, name: &str) -> proto::Container {
        proto::Container {
            name: name.to_string(),
            location_name: scope.location.clone(),
            ..Default::default()
        }
    }

    fn to_wire(scope: &ContainerScope, name: &str, container: &Container) -> Result<proto::Container> {
        Ok(proto::Container {
            name: resolve_name(Self::KIND, name, &container.name)?,
            id: container.id.clone().unwrap_or_default(),
            path: container.path.clone().unwrap_or_default(),
            status: container.status.to_wire(),
            location_name: scope.location.clone(),
            info: container.info.map(|info| proto::ContainerInfo {
                available_size: info.available_size_bytes,
                total_size: info.total_size_bytes,
            }),
            tags: tags_to_wire(&container.tags),
        })
    }

    fn from_wire(scope: &ContainerScope, wire: proto::Container) -> Container {
        Container {
            id: non_empty(wire.id),
            name: wire.name,
            location: non_empty(wire.location_name).or_else(|| Some(scope.location.clone())),
            path: non_empty(wire.path),
            info: wire.info.map(|info| ContainerInfo {
                available_size_bytes: info.available_size,
                total_size_bytes: info.total_size,
            }),
            status: ResourceStatus::from_wire(wire.status),
            tags: tags_from_wire(wire.tags),
        }
    }

    fn request(operation: Operation, items: Vec<proto::Container>) -> proto::ContainerRequest {
        proto::ContainerRequest {
            containers: items,
            operation_type: operation as i32,
        }
    }

    fn into_parts(response: proto::ContainerResponse) -> (Vec<proto::Container>, Option<String>) {
        (response.containers, non_empty(response.error))
    }
}

#[async_trait]
impl Invoke<ContainerKind> for Connection<ContainerAgentClient<AgentChannel>> {
    async fn invoke(
        &self,
        request: proto::ContainerRequest,
    ) -> std::result::Result<proto::ContainerResponse, tonic::Status> {
        let mut client = self.client();
        Ok(client.invoke(request).await?.into_inner())
    }
}

#[async_trait]
impl ContainerService for RemoteOperations<ContainerKind> {
    async fn get(&self, location: &str, name: &str) -> Result<Vec<Container>> {
        self.get_resources(&ContainerScope::new(location), name).await
    }

    async fn create_or_update(
        &self,
        location: &str,
        name: &str,
        container: &Container,
    ) -> Result<Container> {
        self.create_or_update_resource(&ContainerScope::new(location), name, container)
            .await
    }

    async fn delete(&self, location: &str, name: &str) -> Result<()> {
        self.delete_resource(&ContainerScope::new(location), name).await
    }
}
