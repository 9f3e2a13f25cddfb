//! Telemetry consent levels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How much usage data the installation consents to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TelemetryLevel {
    Minimal,
    #[default]
    Basic,
    Detailed,
}

impl FromStr for TelemetryLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(TelemetryLevel::Minimal),
            "basic" => Ok(TelemetryLevel::Basic),
            "detailed" => Ok(TelemetryLevel::Detailed),
            _ => Err(format!("Unknown telemetry level: {}", s)),
        }
    }
}

impl std::fmt::Display for TelemetryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryLevel::Minimal => write!(f, "minimal"),
            TelemetryLevel::Basic => write!(f, "basic"),
            TelemetryLevel::Detailed => write!(f, "detailed"),
        }
    }
}
