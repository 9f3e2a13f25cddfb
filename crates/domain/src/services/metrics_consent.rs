//! Holds the telemetry level the installation has consented to.

use crate::models::TelemetryLevel;
use shared::CoreSettings;
use std::str::FromStr;
use std::sync::RwLock;

#[derive(Debug)]
pub struct MetricsConsentService {
    level: RwLock<TelemetryLevel>,
}

impl MetricsConsentService {
    pub fn new(level: TelemetryLevel) -> Self {
        Self {
            level: RwLock::new(level),
        }
    }

    /// Seeds the level from `global.default_telemetry_level`.
    ///
    /// An unrecognized value falls back to the default level.
    pub fn from_settings(settings: &CoreSettings) -> Self {
        let configured = &settings.global.default_telemetry_level;
        let level = TelemetryLevel::from_str(configured).unwrap_or_else(|err| {
            tracing::warn!(
                configured = %configured,
                error = %err,
                "Falling back to default telemetry level"
            );
            TelemetryLevel::default()
        });
        Self::new(level)
    }

    pub fn get_consent_level(&self) -> TelemetryLevel {
        match self.level.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_consent_level(&self, level: TelemetryLevel) {
        let mut current = match self.level.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *current != level {
            tracing::info!(from = %*current, to = %level, "Telemetry consent level changed");
            *current = level;
        }
    }
}

impl Default for MetricsConsentService {
    fn default() -> Self {
        Self::new(TelemetryLevel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_from_settings() {
        let settings = CoreSettings::load_for_test(&[("global.default_telemetry_level", "detailed")])
            .unwrap();
        let service = MetricsConsentService::from_settings(&settings);
        assert_eq!(service.get_consent_level(), TelemetryLevel::Detailed);
    }

    #[test]
    fn test_from_settings_falls_back_on_unknown_level() {
        let mut settings = CoreSettings::default();
        settings.global.default_telemetry_level = "everything".to_string();

        let service = MetricsConsentService::from_settings(&settings);
        assert_eq!(service.get_consent_level(), TelemetryLevel::Basic);
    }

    #[test]
    fn test_set_consent_level() {
        let service = MetricsConsentService::default();
        service.set_consent_level(TelemetryLevel::Minimal);
        assert_eq!(service.get_consent_level(), TelemetryLevel::Minimal);
    }

    #[test]
    fn test_shared_across_threads() {
        let service = Arc::new(MetricsConsentService::default());
        let writer = Arc::clone(&service);

        std::thread::spawn(move || writer.set_consent_level(TelemetryLevel::Detailed))
            .join()
            .unwrap();

        assert_eq!(service.get_consent_level(), TelemetryLevel::Detailed);
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let service = Arc::new(MetricsConsentService::new(TelemetryLevel::Minimal));
        let poisoner = Arc::clone(&service);

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.level.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(service.get_consent_level(), TelemetryLevel::Minimal);
        service.set_consent_level(TelemetryLevel::Basic);
        assert_eq!(service.get_consent_level(), TelemetryLevel::Basic);
    }
}
