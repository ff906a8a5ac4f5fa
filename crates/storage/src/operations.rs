//! Generic remote resource operations
//!
//! Every storage resource follows the same shape: identity fields plus an
//! operation become a request envelope, the envelope is sent through the
//! agent's single `Invoke` RPC, and the descriptors in the response become
//! domain objects. [`ResourceKind`] captures the per-kind mapping and
//! [`RemoteOperations`] implements Get / CreateOrUpdate / Delete once for all
//! kinds.

use async_trait::async_trait;
use cloudagent_common::proto::Operation;
use cloudagent_common::{Error, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Wire mapping for one resource kind
pub trait ResourceKind: Send + Sync + 'static {
    /// Human-readable kind used in errors and logs
    const KIND: &'static str;

    /// Domain object
    type Resource: Clone + Send + Sync;
    /// Scoping identifiers qualifying a name
    type Scope: fmt::Debug + Send + Sync;
    /// Wire descriptor
    type Wire: Send;
    /// Request envelope
    type Request: Send;
    /// Response envelope
    type Response: Send;

    /// Reject scopes missing a required identifier.
    fn validate(scope: &Self::Scope) -> Result<()>;

    /// Descriptor carrying only the identity fields.
    fn identity(scope: &Self::Scope, name: &str) -> Self::Wire;

    /// Descriptor carrying every field of `resource`.
    fn to_wire(scope: &Self::Scope, name: &str, resource: &Self::Resource) -> Result<Self::Wire>;

    fn from_wire(scope: &Self::Scope, wire: Self::Wire) -> Self::Resource;

    fn request(operation: Operation, items: Vec<Self::Wire>) -> Self::Request;

    /// Descriptors and the agent's error message, if it set one.
    fn into_parts(response: Self::Response) -> (Vec<Self::Wire>, Option<String>);
}

/// The agent's `Invoke` RPC for one resource kind
#[async_trait]
pub trait Invoke<K: ResourceKind>: Send + Sync {
    async fn invoke(&self, request: K::Request) -> std::result::Result<K::Response, tonic::Status>;
}

/// Get / CreateOrUpdate / Delete over any [`Invoke`] implementation
pub struct RemoteOperations<K: ResourceKind> {
    agent: Arc<dyn Invoke<K>>,
}

impl<K: ResourceKind> Clone for RemoteOperations<K> {
    fn clone(&self) -> Self {
        Self {
            agent: self.agent.clone(),
        }
    }
}

impl<K: ResourceKind> RemoteOperations<K> {
    pub fn new(agent: Arc<dyn Invoke<K>>) -> Self {
        Self { agent }
    }

    /// Every resource matching `name` in `scope`; empty when none match.
    pub async fn get_resources(&self, scope: &K::Scope, name: &str) -> Result<Vec<K::Resource>> {
        let request = build_request::<K>(Operation::Get, scope, name, None)?;
        self.call(Operation::Get, scope, name, request).await
    }

    /// Submit `resource` and return what the agent stored.
    pub async fn create_or_update_resource(
        &self,
        scope: &K::Scope,
        name: &str,
        resource: &K::Resource,
    ) -> Result<K::Resource> {
        let request = build_request::<K>(Operation::Post, scope, name, Some(resource))?;
        let mut resources = self.call(Operation::Post, scope, name, request).await?;

        if resources.is_empty() {
            warn!(kind = K::KIND, resource = name, "Agent accepted create but returned no resource");
            return Err(Error::Internal(format!(
                "[{}][Create] creating {} returned no result",
                K::KIND,
                name
            )));
        }

        Ok(resources.swap_remove(0))
    }

    /// Delete an existing resource. The resource is fetched first and the
    /// fetched descriptor is what gets deleted.
    pub async fn delete_resource(&self, scope: &K::Scope, name: &str) -> Result<()> {
        K::validate(scope)?;
        if name.is_empty() {
            return Err(Error::InvalidInput(format!("{} name not specified", K::KIND)));
        }

        let existing = self.get_resources(scope, name).await?;
        let Some(resource) = existing.first() else {
            return Err(Error::not_found(K::KIND, name));
        };

        let request = build_request::<K>(Operation::Delete, scope, name, Some(resource))?;
        self.call(Operation::Delete, scope, name, request).await?;

        info!("Deleted {} {} ({:?})", K::KIND, name, scope);
        Ok(())
    }

    async fn call(
        &self,
        operation: Operation,
        scope: &K::Scope,
        name: &str,
        request: K::Request,
    ) -> Result<Vec<K::Resource>> {
        debug!(
            kind = K::KIND,
            operation = operation.as_str_name(),
            resource = name,
            scope = ?scope,
            "Invoking cloud agent"
        );

        let response = self.agent.invoke(request).await?;
        let (items, error) = K::into_parts(response);

        if let Some(message) = error {
            warn!(kind = K::KIND, resource = name, "Agent reported error: {}", message);
            return Err(Error::Agent(message));
        }

        Ok(items
            .into_iter()
            .map(|wire| K::from_wire(scope, wire))
            .collect())
    }
}

/// Build the request envelope for one operation. Fails before anything is
/// sent when the scope is incomplete.
pub fn build_request<K: ResourceKind>(
    operation: Operation,
    scope: &K::Scope,
    name: &str,
    resource: Option<&K::Resource>,
) -> Result<K::Request> {
    K::validate(scope)?;

    let item = match resource {
        Some(resource) => K::to_wire(scope, name, resource)?,
        None => K::identity(scope, name),
    };

    Ok(K::request(operation, vec![item]))
}

/// The explicit name wins; a payload may leave its own name empty but may not
/// contradict it.
pub fn resolve_name(kind: &str, name: &str, payload_name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidInput(format!("{} name not specified", kind)));
    }
    if !payload_name.is_empty() && payload_name != name {
        return Err(Error::InvalidInput(format!(
            "{} name mismatch: '{}' does not match payload name '{}'",
            kind, name, payload_name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name("Container", "c1", "").unwrap(), "c1");
        assert_eq!(resolve_name("Container", "c1", "c1").unwrap(), "c1");

        let err = resolve_name("Container", "c1", "c2").unwrap_err();
        assert!(err.is_invalid_input());

        let err = resolve_name("Container", "", "c1").unwrap_err();
        assert!(err.is_invalid_input());
    }
}
