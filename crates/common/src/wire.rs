//! Conversions between domain types and wire messages shared by every
//! resource kind.

use crate::proto;
use crate::types::{
    DiskFileFormat, HealthState, HyperVGeneration, ProvisioningState, ResourceStatus, Tags,
};

/// Wire strings use "" for absent.
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Wire numbers use 0 for absent.
pub fn non_zero(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

impl ProvisioningState {
    pub fn from_wire(value: i32) -> Option<Self> {
        match proto::ProvisionState::try_from(value).ok()? {
            proto::ProvisionState::Unknown => None,
            proto::ProvisionState::Creating => Some(Self::Creating),
            proto::ProvisionState::Created => Some(Self::Created),
            proto::ProvisionState::CreateFailed => Some(Self::CreateFailed),
            proto::ProvisionState::Deleting => Some(Self::Deleting),
            proto::ProvisionState::DeleteFailed => Some(Self::DeleteFailed),
            proto::ProvisionState::Deleted => Some(Self::Deleted),
            proto::ProvisionState::Updating => Some(Self::Updating),
            proto::ProvisionState::UpdateFailed => Some(Self::UpdateFailed),
            proto::ProvisionState::Updated => Some(Self::Updated),
        }
    }

    pub fn to_wire(state: Option<Self>) -> proto::ProvisionState {
        match state {
            None => proto::ProvisionState::Unknown,
            Some(Self::Creating) => proto::ProvisionState::Creating,
            Some(Self::Created) => proto::ProvisionState::Created,
            Some(Self::CreateFailed) => proto::ProvisionState::CreateFailed,
            Some(Self::Deleting) => proto::ProvisionState::Deleting,
            Some(Self::DeleteFailed) => proto::ProvisionState::DeleteFailed,
            Some(Self::Deleted) => proto::ProvisionState::Deleted,
            Some(Self::Updating) => proto::ProvisionState::Updating,
            Some(Self::UpdateFailed) => proto::ProvisionState::UpdateFailed,
            Some(Self::Updated) => proto::ProvisionState::Updated,
        }
    }
}

impl HealthState {
    pub fn from_wire(value: i32) -> Option<Self> {
        match proto::HealthState::try_from(value).ok()? {
            proto::HealthState::Unknown => None,
            proto::HealthState::Ok => Some(Self::Ok),
            proto::HealthState::Warning => Some(Self::Warning),
            proto::HealthState::Critical => Some(Self::Critical),
            proto::HealthState::Missing => Some(Self::Missing),
            proto::HealthState::Degraded => Some(Self::Degraded),
        }
    }

    pub fn to_wire(state: Option<Self>) -> proto::HealthState {
        match state {
            None => proto::HealthState::Unknown,
            Some(Self::Ok) => proto::HealthState::Ok,
            Some(Self::Warning) => proto::HealthState::Warning,
            Some(Self::Critical) => proto::HealthState::Critical,
            Some(Self::Missing) => proto::HealthState::Missing,
            Some(Self::Degraded) => proto::HealthState::Degraded,
        }
    }
}

impl DiskFileFormat {
    pub fn from_wire(value: i32) -> Option<Self> {
        match proto::DiskFileFormat::try_from(value).ok()? {
            proto::DiskFileFormat::Unspecified => None,
            proto::DiskFileFormat::Vhdx => Some(Self::Vhdx),
            proto::DiskFileFormat::Vhd => Some(Self::Vhd),
        }
    }

    pub fn to_wire(format: Option<Self>) -> proto::DiskFileFormat {
        match format {
            None => proto::DiskFileFormat::Unspecified,
            Some(Self::Vhdx) => proto::DiskFileFormat::Vhdx,
            Some(Self::Vhd) => proto::DiskFileFormat::Vhd,
        }
    }
}

impl HyperVGeneration {
    pub fn from_wire(value: i32) -> Option<Self> {
        match proto::HyperVGeneration::try_from(value).ok()? {
            proto::HyperVGeneration::Unspecified => None,
            proto::HyperVGeneration::V1 => Some(Self::V1),
            proto::HyperVGeneration::V2 => Some(Self::V2),
        }
    }

    pub fn to_wire(generation: Option<Self>) -> proto::HyperVGeneration {
        match generation {
            None => proto::HyperVGeneration::Unspecified,
            Some(Self::V1) => proto::HyperVGeneration::V1,
            Some(Self::V2) => proto::HyperVGeneration::V2,
        }
    }
}

impl ResourceStatus {
    pub fn from_wire(status: Option<proto::Status>) -> Self {
        let Some(status) = status else {
            return Self::default();
        };
        let provisioning = status.provisioning_status.unwrap_or_default();
        let health = status.health.unwrap_or_default();
        let last_error = status.last_error.unwrap_or_default();

        Self {
            provisioning_state: ProvisioningState::from_wire(provisioning.current_state),
            previous_provisioning_state: ProvisioningState::from_wire(provisioning.previous_state),
            health: HealthState::from_wire(health.current_state),
            previous_health: HealthState::from_wire(health.previous_state),
            last_error: non_empty(last_error.message),
            last_error_code: (last_error.code != 0).then_some(last_error.code),
            version: status.version.and_then(|v| non_empty(v.number)),
        }
    }

    /// Inverse of [`ResourceStatus::from_wire`], so a fetched status can be
    /// submitted back unchanged.
    pub fn to_wire(&self) -> Option<proto::Status> {
        if self.is_empty() {
            return None;
        }

        let provisioning_status = (self.provisioning_state.is_some()
            || self.previous_provisioning_state.is_some())
        .then(|| proto::ProvisionStatus {
            current_state: ProvisioningState::to_wire(self.provisioning_state) as i32,
            previous_state: ProvisioningState::to_wire(self.previous_provisioning_state) as i32,
        });
        let health = (self.health.is_some() || self.previous_health.is_some()).then(|| {
            proto::Health {
                current_state: HealthState::to_wire(self.health) as i32,
                previous_state: HealthState::to_wire(self.previous_health) as i32,
            }
        });
        let last_error = (self.last_error.is_some() || self.last_error_code.is_some()).then(|| {
            proto::LastError {
                message: self.last_error.clone().unwrap_or_default(),
                code: self.last_error_code.unwrap_or_default(),
            }
        });

        Some(proto::Status {
            health,
            provisioning_status,
            last_error,
            version: self.version.as_ref().map(|number| proto::Version {
                number: number.clone(),
            }),
        })
    }
}

pub fn tags_from_wire(tags: Option<proto::Tags>) -> Tags {
    tags.map(|t| t.tags.into_iter().map(|tag| (tag.key, tag.value)).collect())
        .unwrap_or_default()
}

pub fn tags_to_wire(tags: &Tags) -> Option<proto::Tags> {
    if tags.is_empty() {
        return None;
    }

    Some(proto::Tags {
        tags: tags
            .iter()
            .map(|(key, value)| proto::Tag {
                key: key.clone(),
                value: value.clone(),
            })
            .collect(),
    })
}
