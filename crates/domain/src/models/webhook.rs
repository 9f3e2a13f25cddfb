//! Webhook domain models.

use crate::change_tracking::{set_property, set_property_with, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, Entity, EntityBase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{require_not_blank, validate_absolute_url};
use shared::{ArgumentError, PagedModel};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use uuid::Uuid;
use validator::Validate;

/// Event aliases raised by the content and media pipelines.
pub mod events {
    pub const CONTENT_PUBLISH: &str = "Umbraco.ContentPublish";
    pub const CONTENT_UNPUBLISH: &str = "Umbraco.ContentUnpublish";
    pub const CONTENT_DELETE: &str = "Umbraco.ContentDelete";
    pub const MEDIA_SAVE: &str = "Umbraco.MediaSave";
    pub const MEDIA_DELETE: &str = "Umbraco.MediaDelete";
}

/// A subscription that posts event payloads to an external URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(flatten)]
    entity: EntityBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    url: String,
    events: Vec<String>,
    content_type_keys: Vec<Uuid>,
    enabled: bool,
    headers: HashMap<String, String>,
}

impl_entity!(Webhook);

impl Webhook {
    pub fn new(url: &str, enabled: bool) -> Result<Self, ArgumentError> {
        Ok(Self {
            entity: EntityBase::new(),
            name: None,
            description: None,
            url: checked_url(url)?,
            events: Vec::new(),
            content_type_keys: Vec::new(),
            enabled,
            headers: HashMap::new(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Content types the webhook is limited to; empty means all.
    pub fn content_type_keys(&self) -> &[Uuid] {
        &self.content_type_keys
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn set_name(&mut self, name: Option<String>) {
        set_property(&mut self.entity.tracker, &mut self.name, name, "name");
    }

    pub fn set_description(&mut self, description: Option<String>) {
        set_property(
            &mut self.entity.tracker,
            &mut self.description,
            description,
            "description",
        );
    }

    pub fn set_url(&mut self, url: &str) -> Result<(), ArgumentError> {
        let url = checked_url(url)?;
        set_property(&mut self.entity.tracker, &mut self.url, url, "url");
        Ok(())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        set_property(&mut self.entity.tracker, &mut self.enabled, enabled, "enabled");
    }

    /// Replaces the events; order and duplicates do not count as a change.
    pub fn set_events(&mut self, events: Vec<String>) {
        set_property_with(
            &mut self.entity.tracker,
            &mut self.events,
            events,
            "events",
            same_set,
        );
    }

    /// Replaces the content type keys; order and duplicates do not count as a change.
    pub fn set_content_type_keys(&mut self, keys: Vec<Uuid>) {
        set_property_with(
            &mut self.entity.tracker,
            &mut self.content_type_keys,
            keys,
            "contentTypeKeys",
            same_set,
        );
    }

    pub fn set_headers(&mut self, headers: HashMap<String, String>) {
        set_property(&mut self.entity.tracker, &mut self.headers, headers, "headers");
    }

    /// Whether the webhook fires for `event_alias` on content of `content_type_key`.
    pub fn handles(&self, event_alias: &str, content_type_key: Option<Uuid>) -> bool {
        if !self.enabled || !self.events.iter().any(|e| e == event_alias) {
            return false;
        }
        match content_type_key {
            Some(key) if !self.content_type_keys.is_empty() => {
                self.content_type_keys.contains(&key)
            }
            _ => true,
        }
    }
}

impl DeepClone for Webhook {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

fn same_set<T: Eq + Hash>(a: &Vec<T>, b: &Vec<T>) -> bool {
    a.iter().collect::<HashSet<_>>() == b.iter().collect::<HashSet<_>>()
}

fn checked_url(url: &str) -> Result<String, ArgumentError> {
    let url = require_not_blank("url", url)?;
    validate_absolute_url(url).map_err(|e| ArgumentError::Invalid {
        param: "url",
        message: e
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| e.code.to_string()),
    })?;
    Ok(url.to_string())
}

/// A single delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookLog {
    pub key: Uuid,
    pub webhook_key: Uuid,
    pub event_alias: String,
    pub url: String,
    pub status_code: u16,
    pub date: DateTime<Utc>,
    pub retry_count: u32,
    pub request_headers: String,
    pub request_body: String,
    pub response_headers: String,
    pub response_body: String,
    pub exception_occurred: bool,
}

impl WebhookLog {
    pub fn is_success_status_code(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// A queued delivery awaiting (re)sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub id: i32,
    pub webhook_key: Uuid,
    pub event_alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_object: Option<String>,
    pub retry_count: u32,
}

impl WebhookRequest {
    pub fn new(webhook_key: Uuid, event_alias: &str, request_object: Option<String>) -> Self {
        Self {
            id: 0,
            webhook_key,
            event_alias: event_alias.to_string(),
            request_object,
            retry_count: 0,
        }
    }

    /// Whether another attempt is allowed under `max_retries`.
    pub fn can_retry(&self, max_retries: u32) -> bool {
        self.retry_count < max_retries
    }
}

/// Default enabled status for new webhooks.
fn default_enabled() -> bool {
    true
}

/// Request payload for creating a webhook.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,

    #[validate(length(min = 1, message = "At least one event is required"))]
    pub events: Vec<String>,

    #[serde(default)]
    pub content_type_keys: Vec<Uuid>,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl CreateWebhookRequest {
    /// Builds the webhook after the request has been validated.
    pub fn into_webhook(self) -> Result<Webhook, ArgumentError> {
        let mut webhook = Webhook::new(&self.url, self.enabled)?;
        webhook.set_name(self.name);
        webhook.set_description(self.description);
        webhook.set_events(self.events);
        webhook.set_content_type_keys(self.content_type_keys);
        webhook.set_headers(self.headers);
        webhook.reset_dirty_properties(false);
        Ok(webhook)
    }
}

/// Response payload for webhook operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
    pub events: Vec<String>,
    pub content_type_keys: Vec<Uuid>,
    pub enabled: bool,
}

impl From<&Webhook> for WebhookResponse {
    fn from(w: &Webhook) -> Self {
        Self {
            id: w.key(),
            name: w.name.clone(),
            url: w.url.clone(),
            events: w.events.clone(),
            content_type_keys: w.content_type_keys.clone(),
            enabled: w.enabled,
        }
    }
}

/// Response for listing webhooks.
pub type ListWebhooksResponse = PagedModel<WebhookResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_webhook() -> Webhook {
        let mut webhook = Webhook::new("https://example.com/webhook", true).unwrap();
        webhook.set_events(vec![events::CONTENT_PUBLISH.to_string()]);
        webhook.reset_dirty_properties(false);
        webhook
    }

    #[test]
    fn test_webhook_requires_absolute_url() {
        assert!(matches!(
            Webhook::new("/relative", true),
            Err(ArgumentError::Invalid { param: "url", .. })
        ));
        assert_eq!(
            Webhook::new("", true).unwrap_err(),
            ArgumentError::NullOrWhiteSpace { param: "url" }
        );
    }

    #[test]
    fn test_content_type_keys_compare_as_sets() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut webhook = create_test_webhook();
        webhook.set_content_type_keys(vec![a, b]);
        webhook.reset_dirty_properties(false);

        webhook.set_content_type_keys(vec![b, a]);
        assert!(!webhook.is_dirty());

        webhook.set_content_type_keys(vec![a]);
        assert!(webhook.is_property_dirty("contentTypeKeys"));
        assert_eq!(webhook.content_type_keys(), &[a]);
    }

    #[test]
    fn test_events_compare_as_sets() {
        let mut webhook = create_test_webhook();
        webhook.set_events(vec![
            events::CONTENT_PUBLISH.to_string(),
            events::CONTENT_PUBLISH.to_string(),
        ]);
        assert!(!webhook.is_dirty());

        webhook.set_events(vec![events::CONTENT_DELETE.to_string()]);
        assert!(webhook.is_property_dirty("events"));
    }

    #[test]
    fn test_headers_change_detection() {
        let mut webhook = create_test_webhook();
        webhook.set_headers(HashMap::new());
        assert!(!webhook.is_dirty());

        webhook.set_headers(HashMap::from([("X-Api-Key".to_string(), "abc".to_string())]));
        assert!(webhook.is_property_dirty("headers"));
    }

    #[test]
    fn test_webhook_handles() {
        let key = Uuid::new_v4();
        let mut webhook = create_test_webhook();

        assert!(webhook.handles(events::CONTENT_PUBLISH, None));
        assert!(webhook.handles(events::CONTENT_PUBLISH, Some(key)));
        assert!(!webhook.handles(events::MEDIA_SAVE, None));

        webhook.set_content_type_keys(vec![Uuid::new_v4()]);
        assert!(!webhook.handles(events::CONTENT_PUBLISH, Some(key)));

        webhook.set_content_type_keys(vec![key]);
        assert!(webhook.handles(events::CONTENT_PUBLISH, Some(key)));

        webhook.set_enabled(false);
        assert!(!webhook.handles(events::CONTENT_PUBLISH, Some(key)));
    }

    #[test]
    fn test_webhook_log_success_status() {
        let mut log = WebhookLog {
            key: Uuid::new_v4(),
            webhook_key: Uuid::new_v4(),
            event_alias: events::CONTENT_PUBLISH.to_string(),
            url: "https://example.com/webhook".to_string(),
            status_code: 204,
            date: Utc::now(),
            retry_count: 0,
            request_headers: String::new(),
            request_body: "{}".to_string(),
            response_headers: String::new(),
            response_body: String::new(),
            exception_occurred: false,
        };
        assert!(log.is_success_status_code());

        log.status_code = 500;
        assert!(!log.is_success_status_code());
        log.status_code = 300;
        assert!(!log.is_success_status_code());
    }

    #[test]
    fn test_webhook_request_can_retry() {
        let mut request = WebhookRequest::new(Uuid::new_v4(), events::CONTENT_PUBLISH, None);
        assert!(request.can_retry(5));

        request.retry_count = 5;
        assert!(!request.can_retry(5));
        assert!(!request.can_retry(0));
    }

    #[test]
    fn test_create_webhook_request_deserialization() {
        let json = r#"{
            "name": "Search indexer",
            "url": "https://search.example.com/hooks/content",
            "events": ["Umbraco.ContentPublish", "Umbraco.ContentUnpublish"]
        }"#;

        let request: CreateWebhookRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert!(request.enabled);
        assert!(request.content_type_keys.is_empty());

        let webhook = request.into_webhook().unwrap();
        assert_eq!(webhook.name(), Some("Search indexer"));
        assert_eq!(webhook.events().len(), 2);
        assert!(!webhook.is_dirty());
    }

    #[test]
    fn test_create_webhook_request_validation() {
        let request = CreateWebhookRequest {
            name: Some(String::new()),
            description: None,
            url: "not-a-url".to_string(),
            events: vec![],
            content_type_keys: vec![],
            headers: HashMap::new(),
            enabled: true,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("url"));
        assert!(fields.contains_key("events"));
    }

    #[test]
    fn test_webhook_response_serialization() {
        let webhook = create_test_webhook();
        let response = WebhookResponse::from(&webhook);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"url\":\"https://example.com/webhook\""));
        assert!(json.contains("\"events\":[\"Umbraco.ContentPublish\"]"));
        assert!(json.contains("\"contentTypeKeys\":[]"));
        assert!(json.contains("\"enabled\":true"));
    }

    #[test]
    fn test_list_webhooks_response_serialization() {
        let response: ListWebhooksResponse = PagedModel::empty();

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"items\":[]"));
        assert!(json.contains("\"total\":0"));
    }
}
