//! Host names assigned to content roots.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, EntityBase};
use serde::{Deserialize, Serialize};
use shared::validation::require_not_blank;
use shared::ArgumentError;

/// Prefix marking a wildcard domain (culture assignment without a host).
pub const WILDCARD_PREFIX: char = '*';

/// A domain (host name, optionally with a path) assigned to a content node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(flatten)]
    entity: EntityBase,
    domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_iso_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root_content_id: Option<i32>,
    sort_order: i32,
}

impl_entity!(Domain);

impl Domain {
    pub fn new(domain_name: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            entity: EntityBase::new(),
            domain_name: require_not_blank("domain_name", domain_name)?.trim().to_string(),
            language_id: None,
            language_iso_code: None,
            root_content_id: None,
            sort_order: 0,
        })
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn language_id(&self) -> Option<i32> {
        self.language_id
    }

    /// Iso code of the assigned language, when loaded alongside the domain.
    pub fn language_iso_code(&self) -> Option<&str> {
        self.language_iso_code.as_deref()
    }

    pub fn root_content_id(&self) -> Option<i32> {
        self.root_content_id
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Wildcard domains only assign a culture, e.g. `*1050`.
    pub fn is_wildcard(&self) -> bool {
        self.domain_name.starts_with(WILDCARD_PREFIX)
    }

    pub fn set_domain_name(&mut self, domain_name: &str) -> Result<(), ArgumentError> {
        let domain_name = require_not_blank("domain_name", domain_name)?.trim().to_string();
        set_property(
            &mut self.entity.tracker,
            &mut self.domain_name,
            domain_name,
            "domainName",
        );
        Ok(())
    }

    pub fn set_language(&mut self, language_id: Option<i32>, iso_code: Option<String>) {
        set_property(
            &mut self.entity.tracker,
            &mut self.language_id,
            language_id,
            "languageId",
        );
        self.language_iso_code = iso_code;
    }

    pub fn set_root_content_id(&mut self, root_content_id: Option<i32>) {
        set_property(
            &mut self.entity.tracker,
            &mut self.root_content_id,
            root_content_id,
            "rootContentId",
        );
    }

    pub fn set_sort_order(&mut self, sort_order: i32) {
        set_property(&mut self.entity.tracker, &mut self.sort_order, sort_order, "sortOrder");
    }
}

impl DeepClone for Domain {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_new() {
        let domain = Domain::new(" example.com/en ").unwrap();
        assert_eq!(domain.domain_name(), "example.com/en");
        assert!(!domain.is_wildcard());
        assert!(domain.language_id().is_none());
        assert!(!domain.is_dirty());
    }

    #[test]
    fn test_domain_requires_name() {
        assert_eq!(
            Domain::new("").unwrap_err(),
            ArgumentError::NullOrWhiteSpace { param: "domain_name" }
        );
    }

    #[test]
    fn test_wildcard_domain() {
        let domain = Domain::new("*1050").unwrap();
        assert!(domain.is_wildcard());
    }

    #[test]
    fn test_domain_setters_track_changes() {
        let mut domain = Domain::new("example.com").unwrap();
        domain.set_language(Some(1), Some("en-US".to_string()));
        domain.set_root_content_id(Some(1050));
        domain.set_sort_order(0);

        assert!(domain.is_property_dirty("languageId"));
        assert!(domain.is_property_dirty("rootContentId"));
        assert!(!domain.is_property_dirty("sortOrder"));
        assert_eq!(domain.language_iso_code(), Some("en-US"));
    }
}
