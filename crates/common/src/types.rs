//! Storage resource types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form key/value tags attached to a resource
pub type Tags = BTreeMap<String, String>;

/// Provisioning state reported by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisioningState {
    Creating,
    Created,
    CreateFailed,
    Deleting,
    DeleteFailed,
    Deleted,
    Updating,
    UpdateFailed,
    Updated,
}

impl std::fmt::Display for ProvisioningState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisioningState::Creating => write!(f, "creating"),
            ProvisioningState::Created => write!(f, "created"),
            ProvisioningState::CreateFailed => write!(f, "create_failed"),
            ProvisioningState::Deleting => write!(f, "deleting"),
            ProvisioningState::DeleteFailed => write!(f, "delete_failed"),
            ProvisioningState::Deleted => write!(f, "deleted"),
            ProvisioningState::Updating => write!(f, "updating"),
            ProvisioningState::UpdateFailed => write!(f, "update_failed"),
            ProvisioningState::Updated => write!(f, "updated"),
        }
    }
}

/// Health state reported by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Ok,
    Warning,
    Critical,
    Missing,
    Degraded,
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthState::Ok => write!(f, "ok"),
            HealthState::Warning => write!(f, "warning"),
            HealthState::Critical => write!(f, "critical"),
            HealthState::Missing => write!(f, "missing"),
            HealthState::Degraded => write!(f, "degraded"),
        }
    }
}

/// Status block owned by the agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub provisioning_state: Option<ProvisioningState>,
    pub previous_provisioning_state: Option<ProvisioningState>,
    pub health: Option<HealthState>,
    pub previous_health: Option<HealthState>,
    pub last_error: Option<String>,
    /// Agent-defined code accompanying `last_error`
    pub last_error_code: Option<i32>,
    pub version: Option<String>,
}

impl ResourceStatus {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Capacity of a storage container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub available_size_bytes: u64,
    pub total_size_bytes: u64,
}

/// Storage container: a directory on the agent's host holding disks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: Option<String>,
    /// Empty means "take the name passed alongside the payload".
    #[serde(default)]
    pub name: String,
    pub location: Option<String>,
    pub path: Option<String>,
    pub info: Option<ContainerInfo>,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub tags: Tags,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

/// On-disk image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskFileFormat {
    Vhdx,
    Vhd,
}

impl std::fmt::Display for DiskFileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiskFileFormat::Vhdx => write!(f, "vhdx"),
            DiskFileFormat::Vhd => write!(f, "vhd"),
        }
    }
}

/// Hyper-V virtual machine generation the disk is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyperVGeneration {
    V1,
    V2,
}

/// Virtual hard disk stored inside a container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualHardDisk {
    pub id: Option<String>,
    /// Empty means "take the name passed alongside the payload".
    #[serde(default)]
    pub name: String,
    pub group: Option<String>,
    pub container_name: Option<String>,
    pub disk_size_bytes: Option<u64>,
    pub dynamic: Option<bool>,
    pub block_size_bytes: Option<u32>,
    pub logical_sector_bytes: Option<u32>,
    pub physical_sector_bytes: Option<u32>,
    pub virtual_machine_name: Option<String>,
    /// Image the disk was created from
    pub source_path: Option<String>,
    /// Location of the disk file on the agent's host
    pub path: Option<String>,
    pub disk_file_format: Option<DiskFileFormat>,
    pub hyperv_generation: Option<HyperVGeneration>,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub tags: Tags,
}

impl VirtualHardDisk {
    pub fn new(name: impl Into<String>, disk_size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            disk_size_bytes: Some(disk_size_bytes),
            ..Default::default()
        }
    }

    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    pub fn with_format(mut self, format: DiskFileFormat) -> Self {
        self.disk_file_format = Some(format);
        self
    }
}
