//! Domain models for the CMS core.

pub mod audit_item;
pub mod consent;
pub mod content_culture;
pub mod content_status;
pub mod email;
pub mod image_crop;
pub mod language;
pub mod long_running_operation;
pub mod macro_property;
pub mod redirect_url;
pub mod site_domain;
pub mod tag;
pub mod telemetry;
pub mod template;
pub mod upload_progress;
pub mod webhook;

pub use audit_item::{AuditItem, AuditType};
pub use consent::{Consent, ConsentState};
pub use content_culture::{ContentCultureInfos, ContentCultureInfosCollection, CultureNameCollection};
pub use content_status::ContentStatus;
pub use email::{
    EmailMessage, EmailMessageAttachment, NotificationEmailBodyParams,
    NotificationEmailSubjectParams,
};
pub use image_crop::{ImageCropAnchor, ImageCropMode};
pub use language::Language;
pub use long_running_operation::{LongRunningOperation, LongRunningOperationStatus};
pub use macro_property::{MacroProperty, MacroPropertyCollection, MacroPropertyUpdate};
pub use redirect_url::RedirectUrl;
pub use site_domain::Domain;
pub use tag::{Tag, TagsStorageType};
pub use telemetry::TelemetryLevel;
pub use template::Template;
pub use upload_progress::UploadProgress;
pub use webhook::{
    CreateWebhookRequest, ListWebhooksResponse, Webhook, WebhookLog, WebhookRequest,
    WebhookResponse,
};
