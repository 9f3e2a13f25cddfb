//! Publishing status of content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentStatus {
    Unpublished,
    Published,
    Expired,
    Trashed,
    AwaitingRelease,
}

impl ContentStatus {
    /// Derives the status from the publishing state and schedule at `now`.
    pub fn resolve(
        trashed: bool,
        published: bool,
        release_date: Option<DateTime<Utc>>,
        expire_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        if trashed {
            return ContentStatus::Trashed;
        }
        if published {
            return ContentStatus::Published;
        }
        if expire_date.is_some_and(|d| d <= now) {
            return ContentStatus::Expired;
        }
        if release_date.is_some_and(|d| d > now) {
            return ContentStatus::AwaitingRelease;
        }
        ContentStatus::Unpublished
    }
}

impl FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unpublished" => Ok(ContentStatus::Unpublished),
            "published" => Ok(ContentStatus::Published),
            "expired" => Ok(ContentStatus::Expired),
            "trashed" => Ok(ContentStatus::Trashed),
            "awaitingrelease" => Ok(ContentStatus::AwaitingRelease),
            _ => Err(format!("Unknown content status: {}", s)),
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentStatus::Unpublished => write!(f, "unpublished"),
            ContentStatus::Published => write!(f, "published"),
            ContentStatus::Expired => write!(f, "expired"),
            ContentStatus::Trashed => write!(f, "trashed"),
            ContentStatus::AwaitingRelease => write!(f, "awaitingRelease"),
        }
    }
}
