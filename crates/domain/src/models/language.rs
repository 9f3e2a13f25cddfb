//! Languages available for content variants.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, EntityBase};
use serde::{Deserialize, Serialize};
use shared::culture::{cultures_equal, validate_culture_code};
use shared::validation::require_not_blank;
use shared::ArgumentError;

/// A language configured for the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(flatten)]
    entity: EntityBase,
    iso_code: String,
    culture_name: String,
    is_default: bool,
    is_mandatory: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_iso_code: Option<String>,
}

impl_entity!(Language);

impl Language {
    pub fn new(iso_code: &str, culture_name: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            entity: EntityBase::new(),
            iso_code: checked_iso_code("iso_code", iso_code)?,
            culture_name: require_not_blank("culture_name", culture_name)?.to_string(),
            is_default: false,
            is_mandatory: false,
            fallback_iso_code: None,
        })
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn culture_name(&self) -> &str {
        &self.culture_name
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn is_mandatory(&self) -> bool {
        self.is_mandatory
    }

    pub fn fallback_iso_code(&self) -> Option<&str> {
        self.fallback_iso_code.as_deref()
    }

    pub fn set_iso_code(&mut self, iso_code: &str) -> Result<(), ArgumentError> {
        let iso_code = checked_iso_code("iso_code", iso_code)?;
        set_property(&mut self.entity.tracker, &mut self.iso_code, iso_code, "isoCode");
        Ok(())
    }

    pub fn set_culture_name(&mut self, culture_name: &str) -> Result<(), ArgumentError> {
        let culture_name = require_not_blank("culture_name", culture_name)?.to_string();
        set_property(
            &mut self.entity.tracker,
            &mut self.culture_name,
            culture_name,
            "cultureName",
        );
        Ok(())
    }

    pub fn set_is_default(&mut self, is_default: bool) {
        set_property(&mut self.entity.tracker, &mut self.is_default, is_default, "isDefault");
    }

    pub fn set_is_mandatory(&mut self, is_mandatory: bool) {
        set_property(
            &mut self.entity.tracker,
            &mut self.is_mandatory,
            is_mandatory,
            "isMandatory",
        );
    }

    /// Sets the language to fall back to; a language cannot fall back to itself.
    pub fn set_fallback_iso_code(&mut self, fallback: Option<&str>) -> Result<(), ArgumentError> {
        let fallback = match fallback {
            Some(code) => {
                let code = checked_iso_code("fallback_iso_code", code)?;
                if cultures_equal(&code, &self.iso_code) {
                    return Err(ArgumentError::Invalid {
                        param: "fallback_iso_code",
                        message: "a language cannot fall back to itself".to_string(),
                    });
                }
                Some(code)
            }
            None => None,
        };
        set_property(
            &mut self.entity.tracker,
            &mut self.fallback_iso_code,
            fallback,
            "fallbackIsoCode",
        );
        Ok(())
    }
}

impl DeepClone for Language {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

fn checked_iso_code(param: &'static str, iso_code: &str) -> Result<String, ArgumentError> {
    let iso_code = require_not_blank(param, iso_code)?.trim();
    validate_culture_code(iso_code).map_err(|e| ArgumentError::Invalid {
        param,
        message: e
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| e.code.to_string()),
    })?;
    Ok(iso_code.to_string())
}
