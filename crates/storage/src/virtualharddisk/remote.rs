//! Virtual hard disk wire mapping and agent binding

use async_trait::async_trait;
use cloudagent_common::proto::{
    self, virtual_hard_disk_agent_client::VirtualHardDiskAgentClient, Operation,
};
use cloudagent_common::wire::{non_empty, non_zero, tags_from_wire, tags_to_wire};
use cloudagent_common::{
    DiskFileFormat, Error, HyperVGeneration, ResourceStatus, Result, VirtualHardDisk,
};

use super::VirtualHardDiskService;
use crate::client::{AgentChannel, Connection};
use crate::operations::{resolve_name, Invoke, RemoteOperations, ResourceKind};

/// Disks are scoped by group and container. An empty container lets the
/// agent pick its default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskScope {
    pub group: String,
    pub container: String,
}

impl DiskScope {
    pub fn new(group: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            container: container.into(),
        }
    }
}

pub struct VirtualHardDiskKind;

impl ResourceKind for VirtualHardDiskKind {
    const KIND: &'static str = "VirtualHardDisk";

    type Resource = VirtualHardDisk;
    type Scope = DiskScope;
    type Wire = proto::VirtualHardDisk;
    type Request = proto::VirtualHardDiskRequest;
    type Response = proto::VirtualHardDiskResponse;

    fn validate(scope: &DiskScope) -> Result<()> {
        if scope.group.is_empty() {
            return Err(Error::InvalidInput("Group not specified".to_string()));
        }
        Ok(())
    }

    fn identity(scope: &DiskScope, name: &str) -> proto::VirtualHardDisk {
        proto::VirtualHardDisk {
            name: name.to_string(),
            group_name: scope.group.clone(),
            container_name: scope.container.clone(),
            ..Default::default()
        }
    }

    fn to_wire(scope: &DiskScope, name: &str, vhd: &VirtualHardDisk) -> Result<proto::VirtualHardDisk> {
        let container_name = if scope.container.is_empty() {
            vhd.container_name.clone().unwrap_or_default()
        } else {
            scope.container.clone()
        };

        Ok(proto::VirtualHardDisk {
            name: resolve_name(Self::KIND, name, &vhd.name)?,
            id: vhd.id.clone().unwrap_or_default(),
            source: vhd.source_path.clone().unwrap_or_default(),
            path: vhd.path.clone().unwrap_or_default(),
            status: vhd.status.to_wire(),
            size: vhd.disk_size_bytes.unwrap_or_default(),
            dynamic: vhd.dynamic.unwrap_or_default(),
            blocksizebytes: vhd.block_size_bytes.unwrap_or_default(),
            logicalsectorbytes: vhd.logical_sector_bytes.unwrap_or_default(),
            physicalsectorbytes: vhd.physical_sector_bytes.unwrap_or_default(),
            virtualmachine_name: vhd.virtual_machine_name.clone().unwrap_or_default(),
            group_name: scope.group.clone(),
            container_name,
            disk_file_format: DiskFileFormat::to_wire(vhd.disk_file_format) as i32,
            hyper_v_generation: HyperVGeneration::to_wire(vhd.hyperv_generation) as i32,
            tags: tags_to_wire(&vhd.tags),
        })
    }

    fn from_wire(scope: &DiskScope, wire: proto::VirtualHardDisk) -> VirtualHardDisk {
        VirtualHardDisk {
            id: non_empty(wire.id),
            name: wire.name,
            group: non_empty(wire.group_name).or_else(|| Some(scope.group.clone())),
            container_name: non_empty(wire.container_name).or_else(|| non_empty(scope.container.clone())),
            disk_size_bytes: Some(wire.size),
            dynamic: Some(wire.dynamic),
            block_size_bytes: non_zero(wire.blocksizebytes),
            logical_sector_bytes: non_zero(wire.logicalsectorbytes),
            physical_sector_bytes: non_zero(wire.physicalsectorbytes),
            virtual_machine_name: non_empty(wire.virtualmachine_name),
            source_path: non_empty(wire.source),
            path: non_empty(wire.path),
            disk_file_format: DiskFileFormat::from_wire(wire.disk_file_format),
            hyperv_generation: HyperVGeneration::from_wire(wire.hyper_v_generation),
            status: ResourceStatus::from_wire(wire.status),
            tags: tags_from_wire(wire.tags),
        }
    }

    fn request(operation: Operation, items: Vec<proto::VirtualHardDisk>) -> proto::VirtualHardDiskRequest {
        proto::VirtualHardDiskRequest {
            virtual_hard_disks: items,
            operation_type: operation as i32,
        }
    }

    fn into_parts(
        response: proto::VirtualHardDiskResponse,
    ) -> (Vec<proto::VirtualHardDisk>, Option<String>) {
        (response.virtual_hard_disks, non_empty(response.error))
    }
}

#[async_trait]
impl Invoke<VirtualHardDiskKind> for Connection<VirtualHardDiskAgentClient<AgentChannel>> {
    async fn invoke(
        &self,
        request: proto::VirtualHardDiskRequest,
    ) -> std::result::Result<proto::VirtualHardDiskResponse, tonic::Status> {
        let mut client = self.client();
        Ok(client.invoke(request).await?.into_inner())
    }
}

#[async_trait]
impl VirtualHardDiskService for RemoteOperations<VirtualHardDiskKind> {
    async fn get(&self, group: &str, container: &str, name: &str) -> Result<Vec<VirtualHardDisk>> {
        self.get_resources(&DiskScope::new(group, container), name).await
    }

    async fn create_or_update(
        &self,
        group: &str,
        container: &str,
        name: &str,
        vhd: &VirtualHardDisk,
    ) -> Result<VirtualHardDisk> {
        self.create_or_update_resource(&DiskScope::new(group, container), name, vhd)
            .await
    }

    async fn delete(&self, group: &str, container: &str, name: &str) -> Result<()> {
        self.delete_resource(&DiskScope::new(group, container), name)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::virtualharddisk::VirtualHardDiskClient;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    type Reply = std::result::Result<proto::VirtualHardDiskResponse, tonic::Status>;

    #[derive(Default)]
    struct ScriptedAgent {
        responses: Mutex<VecDeque<Reply>>,
        requests: Mutex<Vec<proto::VirtualHardDiskRequest>>,
    }

    impl ScriptedAgent {
        fn replying(responses: Vec<Reply>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<proto::VirtualHardDiskRequest> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl Invoke<VirtualHardDiskKind> for ScriptedAgent {
        async fn invoke(&self, request: proto::VirtualHardDiskRequest) -> Reply {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(tonic::Status::internal("no scripted response")))
        }
    }

    fn reply(disks: Vec<proto::VirtualHardDisk>) -> Reply {
        Ok(proto::VirtualHardDiskResponse {
            virtual_hard_disks: disks,
            error: String::new(),
        })
    }

    fn stored_disk() -> proto::VirtualHardDisk {
        proto::VirtualHardDisk {
            name: "disk0".to_string(),
            id: "vhd-0001".to_string(),
            source: "/images/base.vhdx".to_string(),
            path: "/var/lib/c1/disk0.vhdx".to_string(),
            status: None,
            size: 1024,
            dynamic: true,
            blocksizebytes: 4096,
            logicalsectorbytes: 512,
            physicalsectorbytes: 4096,
            virtualmachine_name: "vm0".to_string(),
            group_name: "group1".to_string(),
            container_name: "c1".to_string(),
            disk_file_format: proto::DiskFileFormat::Vhdx as i32,
            hyper_v_generation: proto::HyperVGeneration::V2 as i32,
            tags: Some(proto::Tags {
                tags: vec![proto::Tag {
                    key: "tier".to_string(),
                    value: "gold".to_string(),
                }],
            }),
        }
    }

    fn client(agent: &Arc<ScriptedAgent>) -> VirtualHardDiskClient {
        VirtualHardDiskClient::from_service(Arc::new(RemoteOperations::<VirtualHardDiskKind>::new(
            agent.clone(),
        )))
    }

    #[tokio::test]
    async fn test_get_sends_identity_only() {
        let agent = ScriptedAgent::replying(vec![reply(vec![stored_disk()])]);

        let disks = client(&agent).get("group1", "c1", "disk0").await.unwrap();
        assert_eq!(disks.len(), 1);
        assert_eq!(disks[0].group.as_deref(), Some("group1"));
        assert_eq!(disks[0].container_name.as_deref(), Some("c1"));
        assert_eq!(disks[0].disk_size_bytes, Some(1024));
        assert_eq!(disks[0].disk_file_format, Some(DiskFileFormat::Vhdx));
        assert_eq!(disks[0].hyperv_generation, Some(HyperVGeneration::V2));

        let sent = &agent.requests()[0].virtual_hard_disks[0];
        assert_eq!(sent.name, "disk0");
        assert_eq!(sent.group_name, "group1");
        assert_eq!(sent.container_name, "c1");
        assert_eq!(sent.size, 0);
        assert!(sent.id.is_empty());
    }

    #[tokio::test]
    async fn test_empty_group_never_reaches_agent() {
        let agent = ScriptedAgent::replying(vec![]);
        let client = client(&agent);

        assert!(client.get("", "c1", "disk0").await.unwrap_err().is_invalid_input());
        assert!(client
            .create_or_update("", "c1", "disk0", &VirtualHardDisk::new("disk0", 1))
            .await
            .unwrap_err()
            .is_invalid_input());
        assert!(client.delete("", "c1", "disk0").await.unwrap_err().is_invalid_input());
        assert!(client.resize("", "c1", "disk0", 2048).await.unwrap_err().is_invalid_input());

        assert!(agent.requests().is_empty());
    }

    #[tokio::test]
    async fn test_resize_resubmits_fetched_disk_with_new_size() {
        let mut resized = stored_disk();
        resized.size = 2048;
        let agent = ScriptedAgent::replying(vec![reply(vec![stored_disk()]), reply(vec![resized])]);

        client(&agent).resize("group1", "c1", "disk0", 2048).await.unwrap();

        let requests = agent.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].operation_type(), Operation::Get);
        assert_eq!(requests[1].operation_type(), Operation::Post);

        let mut expected = stored_disk();
        expected.size = 2048;
        assert_eq!(requests[1].virtual_hard_disks, vec![expected]);
    }

    #[tokio::test]
    async fn test_resize_and_delete_keep_fetched_status() {
        let mut fetched = stored_disk();
        fetched.status = Some(proto::Status {
            health: Some(proto::Health {
                current_state: proto::HealthState::Ok as i32,
                previous_state: proto::HealthState::Warning as i32,
            }),
            provisioning_status: Some(proto::ProvisionStatus {
                current_state: proto::ProvisionState::Created as i32,
                previous_state: proto::ProvisionState::Creating as i32,
            }),
            last_error: Some(proto::LastError {
                message: "x".to_string(),
                code: 7,
            }),
            version: Some(proto::Version {
                number: "4".to_string(),
            }),
        });
        let agent = ScriptedAgent::replying(vec![
            reply(vec![fetched.clone()]),
            reply(vec![fetched.clone()]),
            reply(vec![fetched.clone()]),
            reply(vec![]),
        ]);
        let client = client(&agent);

        client.resize("group1", "c1", "disk0", 2048).await.unwrap();
        client.delete("group1", "c1", "disk0").await.unwrap();

        let requests = agent.requests();
        assert_eq!(requests.len(), 4);

        let resized = &requests[1].virtual_hard_disks[0];
        assert_eq!(resized.size, 2048);
        assert_eq!(resized.status, fetched.status);

        assert_eq!(requests[3].operation_type(), Operation::Delete);
        assert_eq!(requests[3].virtual_hard_disks, vec![fetched]);
    }

    #[tokio::test]
    async fn test_resize_without_name_never_reaches_agent() {
        let agent = ScriptedAgent::replying(vec![]);

        let err = client(&agent)
            .resize("group1", "c1", "", 2048)
            .await
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(agent.requests().is_empty());
    }

    #[tokio::test]
    async fn test_resize_missing_disk_is_not_found() {
        let agent = ScriptedAgent::replying(vec![reply(vec![])]);

        let err = client(&agent)
            .resize("group1", "c1", "disk0", 2048)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(agent.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_sends_fetched_disk() {
        let agent = ScriptedAgent::replying(vec![reply(vec![stored_disk()]), reply(vec![])]);

        client(&agent).delete("group1", "c1", "disk0").await.unwrap();

        let requests = agent.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].operation_type(), Operation::Delete);
        assert_eq!(requests[1].virtual_hard_disks, vec![stored_disk()]);
    }

    #[tokio::test]
    async fn test_create_with_empty_response_is_internal_error() {
        let agent = ScriptedAgent::replying(vec![reply(vec![])]);

        let err = client(&agent)
            .create_or_update("group1", "c1", "disk0", &VirtualHardDisk::new("", 1024))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(agent.requests()[0].virtual_hard_disks[0].name, "disk0");
    }

    #[test]
    fn test_identity_round_trip() {
        let scope = DiskScope::new("group1", "c1");
        let vhd = VirtualHardDisk::new("disk0", 4096).dynamic(false);

        let wire = VirtualHardDiskKind::to_wire(&scope, "disk0", &vhd).unwrap();
        let back = VirtualHardDiskKind::from_wire(&scope, wire);

        assert_eq!(back.name, "disk0");
        assert_eq!(back.group.as_deref(), Some("group1"));
        assert_eq!(back.container_name.as_deref(), Some("c1"));
        assert_eq!(back.disk_size_bytes, Some(4096));
        assert_eq!(back.block_size_bytes, None);
    }

    #[test]
    fn test_default_container_falls_back_to_payload() {
        let scope = DiskScope::new("group1", "");
        let vhd = VirtualHardDisk {
            container_name: Some("c9".to_string()),
            ..VirtualHardDisk::new("disk0", 1)
        };

        let wire = VirtualHardDiskKind::to_wire(&scope, "disk0", &vhd).unwrap();
        assert_eq!(wire.container_name, "c9");

        let wire = VirtualHardDiskKind::identity(&scope, "disk0");
        assert!(wire.container_name.is_empty());
    }
}
