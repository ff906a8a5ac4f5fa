use std::sync::Arc;

use cloudagent_storage::memory::{InMemoryVirtualHardDiskService, ServiceCall};
use cloudagent_storage::{
    DiskFileFormat, Error, HyperVGeneration, ProvisioningState, VirtualHardDisk, VirtualHardDiskClient,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn client() -> (Arc<InMemoryVirtualHardDiskService>, VirtualHardDiskClient) {
    init_tracing();
    let service = Arc::new(InMemoryVirtualHardDiskService::new());
    let client = VirtualHardDiskClient::from_service(service.clone());
    (service, client)
}

fn disk0() -> VirtualHardDisk {
    VirtualHardDisk {
        id: Some("vhd-0".to_string()),
        block_size_bytes: Some(1 << 20),
        logical_sector_bytes: Some(512),
        physical_sector_bytes: Some(4096),
        hyperv_generation: Some(HyperVGeneration::V2),
        ..VirtualHardDisk::new("disk0", 1024)
            .dynamic(true)
            .with_format(DiskFileFormat::Vhdx)
    }
}

/// Resize issues exactly one Get and one CreateOrUpdate, and only the size
/// changes between what was fetched and what was submitted.
#[tokio::test]
async fn resize_changes_only_the_size() {
    let (service, client) = client();
    service.insert("group1", "container1", disk0());

    client.resize("group1", "container1", "disk0", 2048).await.unwrap();

    let calls = service.calls();
    assert_eq!(calls.len(), 2);

    let fetched = match &calls[0] {
        ServiceCall::Get { scope, name } => {
            assert_eq!(scope, &["group1".to_string(), "container1".to_string()]);
            assert_eq!(name, "disk0");
            let mut expected = disk0();
            expected.group = Some("group1".to_string());
            expected.container_name = Some("container1".to_string());
            expected
        }
        other => panic!("expected Get, got {:?}", other),
    };

    match &calls[1] {
        ServiceCall::CreateOrUpdate { name, resource, .. } => {
            assert_eq!(name, "disk0");
            assert_eq!(resource.disk_size_bytes, Some(2048));

            let mut unchanged = resource.clone();
            unchanged.disk_size_bytes = fetched.disk_size_bytes;
            assert_eq!(unchanged, fetched);
        }
        other => panic!("expected CreateOrUpdate, got {:?}", other),
    }

    let stored = client.get("group1", "container1", "disk0").await.unwrap();
    assert_eq!(stored[0].disk_size_bytes, Some(2048));
    assert_eq!(stored[0].status.provisioning_state, Some(ProvisioningState::Updated));
}

#[tokio::test]
async fn resize_missing_disk_is_not_found() {
    let (service, client) = client();

    let err = client
        .resize("group1", "container1", "disk0", 2048)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], ServiceCall::Get { .. }));
}

#[tokio::test]
async fn resize_without_group_is_invalid_input() {
    let (_service, client) = client();

    let err = client.resize("", "container1", "disk0", 2048).await.unwrap_err();
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn create_then_delete() {
    let (_service, client) = client();

    let created = client
        .create_or_update("group1", "container1", "disk1", &VirtualHardDisk::new("", 4096))
        .await
        .unwrap();
    assert_eq!(created.name, "disk1");
    assert!(created.id.is_some());
    assert_eq!(created.status.provisioning_state, Some(ProvisioningState::Created));

    client.delete("group1", "container1", "disk1").await.unwrap();
    assert!(client
        .get("group1", "container1", "disk1")
        .await
        .unwrap()
        .is_empty());

    let err = client.delete("group1", "container1", "disk1").await.unwrap_err();
    assert!(err.is_not_found());
}
