//! Outgoing email messages and notification email parameters.

use serde::{Deserialize, Serialize};
use shared::validation::{require_not_empty, require_some_not_empty};
use shared::ArgumentError;

/// A file attached to an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessageAttachment {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl EmailMessageAttachment {
    pub fn new(file_name: &str, content: Vec<u8>) -> Result<Self, ArgumentError> {
        Ok(Self {
            file_name: require_not_empty("file_name", file_name)?.to_string(),
            content,
        })
    }
}

/// An email ready to hand to a sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
    subject: String,
    body: String,
    is_body_html: bool,
    attachments: Vec<EmailMessageAttachment>,
}

impl EmailMessage {
    /// A message to a single recipient.
    ///
    /// Fails when `to`, `subject` or `body` is empty.
    pub fn new(
        from: Option<&str>,
        to: &str,
        subject: &str,
        body: &str,
        is_body_html: bool,
    ) -> Result<Self, ArgumentError> {
        Self::with_recipients(from, vec![to.to_string()], subject, body, is_body_html)
    }

    /// A message to several recipients; every recipient must be non-empty.
    pub fn with_recipients(
        from: Option<&str>,
        to: Vec<String>,
        subject: &str,
        body: &str,
        is_body_html: bool,
    ) -> Result<Self, ArgumentError> {
        if to.is_empty() || to.iter().any(|recipient| recipient.is_empty()) {
            return Err(ArgumentError::NullOrEmpty { param: "to" });
        }

        Ok(Self {
            from: from.map(str::to_string),
            to,
            cc: Vec::new(),
            bcc: Vec::new(),
            reply_to: Vec::new(),
            subject: require_not_empty("subject", subject)?.to_string(),
            body: require_not_empty("body", body)?.to_string(),
            is_body_html,
            attachments: Vec::new(),
        })
    }

    pub fn with_cc(mut self, cc: Vec<String>) -> Self {
        self.cc = cc;
        self
    }

    pub fn with_bcc(mut self, bcc: Vec<String>) -> Self {
        self.bcc = bcc;
        self
    }

    pub fn with_reply_to(mut self, reply_to: Vec<String>) -> Self {
        self.reply_to = reply_to;
        self
    }

    pub fn with_attachment(mut self, attachment: EmailMessageAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn cc(&self) -> &[String] {
        &self.cc
    }

    pub fn bcc(&self) -> &[String] {
        &self.bcc
    }

    pub fn reply_to(&self) -> &[String] {
        &self.reply_to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_body_html(&self) -> bool {
        self.is_body_html
    }

    pub fn attachments(&self) -> &[EmailMessageAttachment] {
        &self.attachments
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Values substituted into a notification email subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEmailSubjectParams {
    pub site_url: String,
    pub action: String,
    pub item_name: String,
}

impl NotificationEmailSubjectParams {
    pub fn new(site_url: &str, action: &str, item_name: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            site_url: require_not_empty("site_url", site_url)?.to_string(),
            action: require_not_empty("action", action)?.to_string(),
            item_name: require_not_empty("item_name", item_name)?.to_string(),
        })
    }
}

/// Values substituted into a notification email body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEmailBodyParams {
    pub recipient_name: String,
    pub action: String,
    pub item_name: String,
    pub item_id: String,
    pub item_url: String,
    pub editor_name: String,
    pub site_url: String,
    /// Summary of changed properties; may be empty
    pub summary: String,
}

impl NotificationEmailBodyParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        recipient_name: &str,
        action: &str,
        item_name: &str,
        item_id: &str,
        item_url: &str,
        editor_name: Option<&str>,
        site_url: &str,
        summary: &str,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            recipient_name: require_not_empty("recipient_name", recipient_name)?.to_string(),
            action: require_not_empty("action", action)?.to_string(),
            item_name: require_not_empty("item_name", item_name)?.to_string(),
            item_id: require_not_empty("item_id", item_id)?.to_string(),
            item_url: require_not_empty("item_url", item_url)?.to_string(),
            editor_name: require_some_not_empty("editor_name", editor_name)?.to_string(),
            site_url: require_not_empty("site_url", site_url)?.to_string(),
            summary: summary.to_string(),
        })
    }
}
