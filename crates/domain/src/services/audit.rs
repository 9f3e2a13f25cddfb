//! Fluent construction of audit items.

use crate::models::{AuditItem, AuditType};

/// Builder for [`AuditItem`] so call sites only name the optional parts they
/// actually have.
#[derive(Debug, Clone)]
pub struct AuditItemBuilder {
    object_id: i32,
    audit_type: AuditType,
    user_id: i32,
    entity_type: Option<String>,
    comment: Option<String>,
    parameters: Option<String>,
}

impl AuditItemBuilder {
    pub fn new(object_id: i32, audit_type: AuditType, user_id: i32) -> Self {
        Self {
            object_id,
            audit_type,
            user_id,
            entity_type: None,
            comment: None,
            parameters: None,
        }
    }

    /// Set the kind of entity the action applied to, e.g. `Document`.
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }

    pub fn build(self) -> AuditItem {
        AuditItem::new(
            self.object_id,
            self.audit_type,
            self.user_id,
            self.entity_type,
            self.comment,
            self.parameters,
        )
    }
}

/// Shorthands for the audit entries written most often.
pub mod audit_helpers {
    use super::*;

    pub fn published(object_id: i32, user_id: i32, entity_type: &str) -> AuditItem {
        AuditItemBuilder::new(object_id, AuditType::Publish, user_id)
            .with_entity_type(entity_type)
            .build()
    }

    pub fn deleted(object_id: i32, user_id: i32, entity_type: &str, comment: &str) -> AuditItem {
        AuditItemBuilder::new(object_id, AuditType::Delete, user_id)
            .with_entity_type(entity_type)
            .with_comment(comment)
            .build()
    }
}
