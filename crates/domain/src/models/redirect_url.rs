//! Redirects recorded when published content moves.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, EntityBase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_relative_url;
use shared::ArgumentError;
use uuid::Uuid;

/// A former URL of a content item that should redirect to its current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectUrl {
    #[serde(flatten)]
    entity: EntityBase,
    content_id: i32,
    content_key: Uuid,
    create_date_utc: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    culture: Option<String>,
    url: String,
}

impl_entity!(RedirectUrl);

impl RedirectUrl {
    /// Creates a redirect dated now.
    pub fn new(
        content_id: i32,
        content_key: Uuid,
        url: &str,
        culture: Option<String>,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            entity: EntityBase::new(),
            content_id,
            content_key,
            create_date_utc: Utc::now(),
            culture,
            url: checked_url(url)?,
        })
    }

    pub fn content_id(&self) -> i32 {
        self.content_id
    }

    pub fn content_key(&self) -> Uuid {
        self.content_key
    }

    pub fn create_date_utc(&self) -> DateTime<Utc> {
        self.create_date_utc
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_content_id(&mut self, content_id: i32) {
        set_property(&mut self.entity.tracker, &mut self.content_id, content_id, "contentId");
    }

    pub fn set_content_key(&mut self, content_key: Uuid) {
        set_property(
            &mut self.entity.tracker,
            &mut self.content_key,
            content_key,
            "contentKey",
        );
    }

    pub fn set_create_date_utc(&mut self, date: DateTime<Utc>) {
        set_property(
            &mut self.entity.tracker,
            &mut self.create_date_utc,
            date,
            "createDateUtc",
        );
    }

    pub fn set_culture(&mut self, culture: Option<String>) {
        set_property(&mut self.entity.tracker, &mut self.culture, culture, "culture");
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), ArgumentError> {
        let url = checked_url(url)?;
        set_property(&mut self.entity.tracker, &mut self.url, url, "url");
        Ok(())
    }
}

impl DeepClone for RedirectUrl {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

fn checked_url(url: &str) -> Result<String, ArgumentError> {
    validate_relative_url(url).map_err(|_| ArgumentError::Invalid {
        param: "url",
        message: format!("'{}' is not a site-relative path", url),
    })?;
    Ok(url.to_string())
}
