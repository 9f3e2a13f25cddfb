//! Status labels for background operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LongRunningOperationStatus {
    Success,
    Failed,
    Enqueued,
    Running,
}

impl LongRunningOperationStatus {
    /// Whether the operation has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            LongRunningOperationStatus::Success | LongRunningOperationStatus::Failed
        )
    }
}

impl FromStr for LongRunningOperationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(LongRunningOperationStatus::Success),
            "failed" => Ok(LongRunningOperationStatus::Failed),
            "enqueued" => Ok(LongRunningOperationStatus::Enqueued),
            "running" => Ok(LongRunningOperationStatus::Running),
            _ => Err(format!("Unknown operation status: {}", s)),
        }
    }
}

impl std::fmt::Display for LongRunningOperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LongRunningOperationStatus::Success => write!(f, "success"),
            LongRunningOperationStatus::Failed => write!(f, "failed"),
            LongRunningOperationStatus::Enqueued => write!(f, "enqueued"),
            LongRunningOperationStatus::Running => write!(f, "running"),
        }
    }
}

/// A background operation as reported to clients polling for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRunningOperation {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub operation_type: String,
    pub status: LongRunningOperationStatus,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

impl LongRunningOperation {
    /// A newly enqueued operation of `operation_type`.
    pub fn enqueued(operation_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            operation_type: operation_type.into(),
            status: LongRunningOperationStatus::Enqueued,
            create_date: now,
            update_date: now,
        }
    }

    /// Records a new status label and bumps the update date.
    pub fn with_status(mut self, status: LongRunningOperationStatus) -> Self {
        self.status = status;
        self.update_date = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_finished() {
        assert!(LongRunningOperationStatus::Success.is_finished());
        assert!(LongRunningOperationStatus::Failed.is_finished());
        assert!(!LongRunningOperationStatus::Enqueued.is_finished());
        assert!(!LongRunningOperationStatus::Running.is_finished());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            LongRunningOperationStatus::from_str("Running").unwrap(),
            LongRunningOperationStatus::Running
        );
        assert!(LongRunningOperationStatus::from_str("paused").is_err());
    }

    #[test]
    fn test_enqueued_operation() {
        let operation = LongRunningOperation::enqueued("RebuildIndex");
        assert_eq!(operation.status, LongRunningOperationStatus::Enqueued);
        assert_eq!(operation.create_date, operation.update_date);

        let operation = operation.with_status(LongRunningOperationStatus::Running);
        assert_eq!(operation.status, LongRunningOperationStatus::Running);
        assert!(operation.update_date >= operation.create_date);
    }

    #[test]
    fn test_operation_serialization() {
        let operation = LongRunningOperation::enqueued("RebuildIndex");
        let json = serde_json::to_string(&operation).unwrap();

        assert!(json.contains("\"type\":\"RebuildIndex\""));
        assert!(json.contains("\"status\":\"enqueued\""));
    }
}
