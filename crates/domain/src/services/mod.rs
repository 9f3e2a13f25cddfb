//! Domain services for the CMS core model.
//!
//! Services hold behavior that spans models or carries runtime state.

pub mod audit;
pub mod metrics_consent;
pub mod notification;

pub use audit::{audit_helpers, AuditItemBuilder};
pub use metrics_consent::MetricsConsentService;
pub use notification::{
    compose_notification_email, compose_notification_email_with_settings, EmailSendResult,
    EmailSender, MockEmailSender,
};
