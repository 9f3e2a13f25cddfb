//! Audit trail entries.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, Entity, EntityBase};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Kinds of audited operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditType {
    New,
    Save,
    SaveVariant,
    Open,
    Delete,
    Publish,
    PublishVariant,
    SendToPublish,
    SendToPublishVariant,
    Unpublish,
    UnpublishVariant,
    Move,
    Copy,
    AssignDomain,
    PublicAccess,
    Sort,
    Notify,
    System,
    RollBack,
    PackagerInstall,
    PackagerUninstall,
    Custom,
    ContentVersionPreventCleanup,
    ContentVersionEnableCleanup,
}

impl AuditType {
    pub const ALL: [AuditType; 24] = [
        AuditType::New,
        AuditType::Save,
        AuditType::SaveVariant,
        AuditType::Open,
        AuditType::Delete,
        AuditType::Publish,
        AuditType::PublishVariant,
        AuditType::SendToPublish,
        AuditType::SendToPublishVariant,
        AuditType::Unpublish,
        AuditType::UnpublishVariant,
        AuditType::Move,
        AuditType::Copy,
        AuditType::AssignDomain,
        AuditType::PublicAccess,
        AuditType::Sort,
        AuditType::Notify,
        AuditType::System,
        AuditType::RollBack,
        AuditType::PackagerInstall,
        AuditType::PackagerUninstall,
        AuditType::Custom,
        AuditType::ContentVersionPreventCleanup,
        AuditType::ContentVersionEnableCleanup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditType::New => "new",
            AuditType::Save => "save",
            AuditType::SaveVariant => "saveVariant",
            AuditType::Open => "open",
            AuditType::Delete => "delete",
            AuditType::Publish => "publish",
            AuditType::PublishVariant => "publishVariant",
            AuditType::SendToPublish => "sendToPublish",
            AuditType::SendToPublishVariant => "sendToPublishVariant",
            AuditType::Unpublish => "unpublish",
            AuditType::UnpublishVariant => "unpublishVariant",
            AuditType::Move => "move",
            AuditType::Copy => "copy",
            AuditType::AssignDomain => "assignDomain",
            AuditType::PublicAccess => "publicAccess",
            AuditType::Sort => "sort",
            AuditType::Notify => "notify",
            AuditType::System => "system",
            AuditType::RollBack => "rollBack",
            AuditType::PackagerInstall => "packagerInstall",
            AuditType::PackagerUninstall => "packagerUninstall",
            AuditType::Custom => "custom",
            AuditType::ContentVersionPreventCleanup => "contentVersionPreventCleanup",
            AuditType::ContentVersionEnableCleanup => "contentVersionEnableCleanup",
        }
    }

    /// Whether the operation applies to a single culture variant.
    pub fn is_variant(&self) -> bool {
        matches!(
            self,
            AuditType::SaveVariant
                | AuditType::PublishVariant
                | AuditType::SendToPublishVariant
                | AuditType::UnpublishVariant
        )
    }
}

impl FromStr for AuditType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown audit type: {}", s))
    }
}

impl std::fmt::Display for AuditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An audit trail entry for an operation on a stored object.
///
/// The entity id is the id of the audited object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditItem {
    #[serde(flatten)]
    entity: EntityBase,
    audit_type: AuditType,
    user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<String>,
}

impl_entity!(AuditItem);

impl AuditItem {
    pub fn new(
        object_id: i32,
        audit_type: AuditType,
        user_id: i32,
        entity_type: Option<String>,
        comment: Option<String>,
        parameters: Option<String>,
    ) -> Self {
        Self {
            entity: EntityBase::with_identity(object_id, Uuid::new_v4()),
            audit_type,
            user_id,
            entity_type,
            comment,
            parameters,
        }
    }

    pub fn object_id(&self) -> i32 {
        self.id()
    }

    pub fn audit_type(&self) -> AuditType {
        self.audit_type
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn parameters(&self) -> Option<&str> {
        self.parameters.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        set_property(&mut self.entity.tracker, &mut self.comment, comment, "comment");
    }

    pub fn set_parameters(&mut self, parameters: Option<String>) {
        set_property(
            &mut self.entity.tracker,
            &mut self.parameters,
            parameters,
            "parameters",
        );
    }
}

impl DeepClone for AuditItem {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}
