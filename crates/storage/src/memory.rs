//! In-memory services
//!
//! Drop-in backends for [`ContainerClient`](crate::ContainerClient) and
//! [`VirtualHardDiskClient`](crate::VirtualHardDiskClient) that keep resources
//! in a map instead of talking to an agent. They follow the same rules as the
//! remote services (required scope and name, no deleting what is absent) and
//! record every call in order.

use async_trait::async_trait;
use cloudagent_common::{Container, Error, ProvisioningState, Result, VirtualHardDisk};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::container::{ContainerKind, ContainerService};
use crate::operations::{resolve_name, ResourceKind};
use crate::virtualharddisk::{VirtualHardDiskKind, VirtualHardDiskService};

/// One call made against an in-memory service
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall<R> {
    Get {
        scope: Vec<String>,
        name: String,
    },
    CreateOrUpdate {
        scope: Vec<String>,
        name: String,
        resource: R,
    },
    Delete {
        scope: Vec<String>,
        name: String,
    },
}

impl<R> ServiceCall<R> {
    pub fn name(&self) -> &str {
        match self {
            ServiceCall::Get { name, .. }
            | ServiceCall::CreateOrUpdate { name, .. }
            | ServiceCall::Delete { name, .. } => name,
        }
    }
}

type Key = (Vec<String>, String);

/// Scoped map of resources plus a call log
struct MemoryStore<R> {
    kind: &'static str,
    required: &'static str,
    entries: Mutex<BTreeMap<Key, R>>,
    calls: Mutex<Vec<ServiceCall<R>>>,
}

impl<R: Clone> MemoryStore<R> {
    fn new(kind: &'static str, required: &'static str) -> Self {
        Self {
            kind,
            required,
            entries: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: ServiceCall<R>) {
        self.calls.lock().push(call);
    }

    /// The first scope identifier is required.
    fn validate(&self, scope: &[String]) -> Result<()> {
        match scope.first() {
            Some(first) if !first.is_empty() => Ok(()),
            _ => Err(Error::InvalidInput(format!("{} not specified", self.required))),
        }
    }

    fn get(&self, scope: Vec<String>, name: &str) -> Result<Vec<R>> {
        self.record(ServiceCall::Get {
            scope: scope.clone(),
            name: name.to_string(),
        });
        self.validate(&scope)?;

        let entries = self.entries.lock();
        Ok(entries
            .iter()
            .filter(|((s, n), _)| *s == scope && (name.is_empty() || n == name))
            .map(|(_, r)| r.clone())
            .collect())
    }

    /// Store `resource` after `prepare` fills in the server-owned fields.
    /// `prepare` gets the previously stored value, if any.
    fn put(
        &self,
        scope: Vec<String>,
        name: &str,
        payload_name: &str,
        resource: &R,
        prepare: impl FnOnce(R, Option<&R>) -> R,
    ) -> Result<R> {
        self.record(ServiceCall::CreateOrUpdate {
            scope: scope.clone(),
            name: name.to_string(),
            resource: resource.clone(),
        });
        self.validate(&scope)?;
        let name = resolve_name(self.kind, name, payload_name)?;

        let mut entries = self.entries.lock();
        let key = (scope, name);
        let stored = prepare(resource.clone(), entries.get(&key));
        entries.insert(key, stored.clone());
        Ok(stored)
    }

    fn delete(&self, scope: Vec<String>, name: &str) -> Result<()> {
        self.record(ServiceCall::Delete {
            scope: scope.clone(),
            name: name.to_string(),
        });
        self.validate(&scope)?;
        if name.is_empty() {
            return Err(Error::InvalidInput(format!("{} name not specified", self.kind)));
        }

        self.entries
            .lock()
            .remove(&(scope, name.to_string()))
            .map(|_| ())
            .ok_or_else(|| Error::not_found(self.kind, name))
    }

    fn seed(&self, scope: Vec<String>, name: String, resource: R) {
        self.entries.lock().insert((scope, name), resource);
    }

    fn calls(&self) -> Vec<ServiceCall<R>> {
        self.calls.lock().clone()
    }

    fn clear_calls(&self) {
        self.calls.lock().clear();
    }
}

fn provisioned<R>(previous: Option<&R>) -> ProvisioningState {
    if previous.is_some() {
        ProvisioningState::Updated
    } else {
        ProvisioningState::Created
    }
}

/// In-memory [`ContainerService`]
pub struct InMemoryContainerService {
    store: MemoryStore<Container>,
}

impl Default for InMemoryContainerService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContainerService {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(ContainerKind::KIND, "Location"),
        }
    }

    /// Add a container without recording a call.
    pub fn insert(&self, location: &str, container: Container) {
        let mut container = container;
        container.location = Some(location.to_string());
        self.store
            .seed(vec![location.to_string()], container.name.clone(), container);
    }

    pub fn calls(&self) -> Vec<ServiceCall<Container>> {
        self.store.calls()
    }

    pub fn clear_calls(&self) {
        self.store.clear_calls();
    }
}

#[async_trait]
impl ContainerService for InMemoryContainerService {
    async fn get(&self, location: &str, name: &str) -> Result<Vec<Container>> {
        self.store.get(vec![location.to_string()], name)
    }

    async fn create_or_update(
        &self,
        location: &str,
        name: &str,
        container: &Container,
    ) -> Result<Container> {
        self.store.put(
            vec![location.to_string()],
            name,
            &container.name,
            container,
            |mut stored, previous| {
                stored.name = name.to_string();
                stored.location = Some(location.to_string());
                stored.id = stored
                    .id
                    .or_else(|| previous.and_then(|p| p.id.clone()))
                    .or_else(|| Some(Uuid::new_v4().to_string()));
                stored.status.provisioning_state = Some(provisioned(previous));
                stored
            },
        )
    }

    async fn delete(&self, location: &str, name: &str) -> Result<()> {
        self.store.delete(vec![location.to_string()], name)
    }
}

/// In-memory [`VirtualHardDiskService`]
pub struct InMemoryVirtualHardDiskService {
    store: MemoryStore<VirtualHardDisk>,
}

impl Default for InMemoryVirtualHardDiskService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVirtualHardDiskService {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(VirtualHardDiskKind::KIND, "Group"),
        }
    }

    /// Add a disk without recording a call.
    pub fn insert(&self, group: &str, container: &str, vhd: VirtualHardDisk) {
        let mut vhd = vhd;
        vhd.group = Some(group.to_string());
        vhd.container_name = Some(container.to_string());
        self.store.seed(
            vec![group.to_string(), container.to_string()],
            vhd.name.clone(),
            vhd,
        );
    }

    pub fn calls(&self) -> Vec<ServiceCall<VirtualHardDisk>> {
        self.store.calls()
    }

    pub fn clear_calls(&self) {
        self.store.clear_calls();
    }
}

#[async_trait]
impl VirtualHardDiskService for InMemoryVirtualHardDiskService {
    async fn get(&self, group: &str, container: &str, name: &str) -> Result<Vec<VirtualHardDisk>> {
        self.store
            .get(vec![group.to_string(), container.to_string()], name)
    }

    async fn create_or_update(
        &self,
        group: &str,
        container: &str,
        name: &str,
        vhd: &VirtualHardDisk,
    ) -> Result<VirtualHardDisk> {
        self.store.put(
            vec![group.to_string(), container.to_string()],
            name,
            &vhd.name,
            vhd,
            |mut stored, previous| {
                stored.name = name.to_string();
                stored.group = Some(group.to_string());
                stored.container_name = Some(container.to_string());
                stored.id = stored
                    .id
                    .or_else(|| previous.and_then(|p| p.id.clone()))
                    .or_else(|| Some(Uuid::new_v4().to_string()));
                stored.status.provisioning_state = Some(provisioned(previous));
                stored
            },
        )
    }

    async fn delete(&self, group: &str, container: &str, name: &str) -> Result<()> {
        self.store
            .delete(vec![group.to_string(), container.to_string()], name)
    }
}
