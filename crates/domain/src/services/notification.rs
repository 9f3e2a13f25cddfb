//! Notification emails sent to users subscribed to content actions.
//!
//! Composition is pure; delivery goes through an [`EmailSender`] so hosts can
//! plug in SMTP or a queue, and tests can use [`MockEmailSender`].

use crate::models::{EmailMessage, NotificationEmailBodyParams, NotificationEmailSubjectParams};
use shared::{ArgumentError, ContentSettings};
use std::sync::{Arc, Mutex};

/// Builds the notification email for one recipient.
pub fn compose_notification_email(
    from: Option<&str>,
    to: &str,
    subject_params: &NotificationEmailSubjectParams,
    body_params: &NotificationEmailBodyParams,
    is_html: bool,
) -> Result<EmailMessage, ArgumentError> {
    let subject = notification_subject(subject_params);
    let body = if is_html {
        html_body(body_params)
    } else {
        text_body(body_params)
    };
    EmailMessage::new(from, to, &subject, &body, is_html)
}

/// Like [`compose_notification_email`], taking sender and format from settings.
pub fn compose_notification_email_with_settings(
    settings: &ContentSettings,
    to: &str,
    subject_params: &NotificationEmailSubjectParams,
    body_params: &NotificationEmailBodyParams,
) -> Result<EmailMessage, ArgumentError> {
    let from = Some(settings.notification_email.as_str()).filter(|f| !f.trim().is_empty());
    compose_notification_email(
        from,
        to,
        subject_params,
        body_params,
        !settings.disable_html_email,
    )
}

fn notification_subject(params: &NotificationEmailSubjectParams) -> String {
    format!(
        "Notification about {} performed on {}",
        params.action, params.item_name
    )
}

fn text_body(params: &NotificationEmailBodyParams) -> String {
    let mut body = format!(
        "Hi {},\n\nThis is an automated mail to inform you that the task '{}' has been performed on the page '{}' by the user '{}'.\n\nGo to {} to edit.\n",
        params.recipient_name, params.action, params.item_name, params.editor_name, params.item_url
    );
    if !params.summary.is_empty() {
        body.push_str("\nUpdate summary:\n");
        body.push_str(&params.summary);
        body.push('\n');
    }
    body.push_str(&format!("\nHave a nice day!\n\nCheers from {}\n", params.site_url));
    body
}

fn html_body(params: &NotificationEmailBodyParams) -> String {
    let mut body = format!(
        "<p>Hi {},</p><p>This is an automated mail to inform you that the task <strong>'{}'</strong> has been performed on the page <a href=\"{}\"><strong>'{}'</strong></a> by the user <strong>'{}'</strong>.</p>",
        escape_html(&params.recipient_name),
        escape_html(&params.action),
        escape_html(&params.item_url),
        escape_html(&params.item_name),
        escape_html(&params.editor_name),
    );
    if !params.summary.is_empty() {
        body.push_str("<h3>Update summary:</h3><p>");
        body.push_str(&escape_html(&params.summary));
        body.push_str("</p>");
    }
    body.push_str(&format!(
        "<p>Have a nice day!<br />Cheers from {}</p>",
        escape_html(&params.site_url)
    ));
    body
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Result of an email send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailSendResult {
    Sent,
    /// Sending is not configured on this installation.
    NotConfigured,
    Failed(String),
}

/// Delivers composed emails.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> EmailSendResult;

    /// Whether the sender can deliver anything at all.
    fn can_send(&self) -> bool {
        true
    }
}

/// Sender for development and testing that records instead of delivering.
#[derive(Debug, Clone, Default)]
pub struct MockEmailSender {
    pub simulate_failure: bool,
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Messages accepted so far, oldest first.
    pub fn sent(&self) -> Vec<EmailMessage> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait::async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, message: EmailMessage) -> EmailSendResult {
        if self.simulate_failure {
            tracing::warn!(
                to = ?message.to(),
                subject = %message.subject(),
                "Mock email sender simulating failure"
            );
            return EmailSendResult::Failed("Simulated failure".to_string());
        }

        tracing::info!(
            to = ?message.to(),
            subject = %message.subject(),
            html = message.is_body_html(),
            "Mock: Would send email"
        );

        match self.sent.lock() {
            Ok(mut sent) => sent.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
        EmailSendResult::Sent
    }
}
