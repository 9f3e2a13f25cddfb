//! Layered settings for the model layer.

use serde::Deserialize;

/// Telemetry levels accepted by `global.default_telemetry_level`.
const TELEMETRY_LEVELS: [&str; 3] = ["minimal", "basic", "detailed"];

#[derive(Debug, Clone, Deserialize)]
pub struct CoreSettings {
    #[serde(default)]
    pub global: GlobalSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub webhook: WebhookSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalSettings {
    /// Culture used for the back office when a user has none configured
    #[serde(default = "default_ui_language")]
    pub default_ui_language: String,

    /// Consent level the metrics service starts with
    #[serde(default = "default_telemetry_level")]
    pub default_telemetry_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSettings {
    /// Sender address for notification emails
    #[serde(default = "default_notification_email")]
    pub notification_email: String,

    /// Send notification emails as plain text only
    #[serde(default)]
    pub disable_html_email: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSettings {
    #[serde(default = "default_webhook_enabled")]
    pub enabled: bool,

    /// Delivery attempts before a request is dropped
    #[serde(default = "default_webhook_max_retries")]
    pub max_retries: u32,

    /// Seconds between retry sweeps
    #[serde(default = "default_webhook_period")]
    pub period_secs: u64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_ui_language: default_ui_language(),
            default_telemetry_level: default_telemetry_level(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            notification_email: default_notification_email(),
            disable_html_email: false,
        }
    }
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            enabled: default_webhook_enabled(),
            max_retries: default_webhook_max_retries(),
            period_secs: default_webhook_period(),
        }
    }
}

// Default value functions
fn default_ui_language() -> String {
    "en-US".to_string()
}
fn default_telemetry_level() -> String {
    "basic".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_notification_email() -> String {
    "noreply@example.com".to_string()
}
fn default_webhook_enabled() -> bool {
    true
}
fn default_webhook_max_retries() -> u32 {
    5
}
fn default_webhook_period() -> u64 {
    10
}

/// Settings validation error
#[derive(Debug, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("Missing required setting: {0}")]
    MissingRequired(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

impl CoreSettings {
    /// Load settings from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml
    /// 2. config/local.toml (optional, not in git)
    /// 3. Environment variables with CMS__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CMS").separator("__"))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(settings)
    }

    /// Load settings from embedded defaults plus overrides, without touching
    /// the file system.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [global]
            default_ui_language = "en-US"
            default_telemetry_level = "basic"

            [logging]
            level = "info"
            format = "pretty"

            [content]
            notification_email = "noreply@example.com"
            disable_html_email = false

            [webhook]
            enabled = true
            max_retries = 5
            period_secs = 10
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Validate setting values.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if self.global.default_ui_language.trim().is_empty() {
            return Err(SettingsValidationError::MissingRequired(
                "CMS__GLOBAL__DEFAULT_UI_LANGUAGE must not be empty".to_string(),
            ));
        }

        if crate::culture::validate_culture_code(&self.global.default_ui_language).is_err() {
            return Err(SettingsValidationError::InvalidValue(format!(
                "default_ui_language '{}' is not a culture code",
                self.global.default_ui_language
            )));
        }

        let level = self.global.default_telemetry_level.to_lowercase();
        if !TELEMETRY_LEVELS.contains(&level.as_str()) {
            return Err(SettingsValidationError::InvalidValue(format!(
                "default_telemetry_level must be one of {:?}",
                TELEMETRY_LEVELS
            )));
        }

        if self.content.notification_email.trim().is_empty() {
            return Err(SettingsValidationError::MissingRequired(
                "CMS__CONTENT__NOTIFICATION_EMAIL must be set".to_string(),
            ));
        }

        if self.webhook.period_secs == 0 {
            return Err(SettingsValidationError::InvalidValue(
                "webhook period_secs cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            global: GlobalSettings::default(),
            logging: LoggingSettings::default(),
            content: ContentSettings::default(),
            webhook: WebhookSettings::default(),
        }
    }
}
