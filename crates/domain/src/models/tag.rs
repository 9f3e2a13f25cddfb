//! Tags and how tag properties store them.

use serde::{Deserialize, Serialize};
use shared::validation::require_not_blank;
use shared::ArgumentError;
use std::str::FromStr;

/// Default group for tags without an explicit group.
pub const DEFAULT_TAG_GROUP: &str = "default";

/// Storage format of a tags property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagsStorageType {
    /// Comma separated values
    Csv,
    /// JSON array of strings
    #[default]
    Json,
}

impl TagsStorageType {
    /// Serializes tag texts in this storage format.
    pub fn format(&self, tags: &[String]) -> String {
        match self {
            TagsStorageType::Csv => tags.join(","),
            TagsStorageType::Json => serde_json::to_string(tags).unwrap_or_else(|_| "[]".into()),
        }
    }

    /// Parses a stored value; unparseable JSON yields no tags.
    pub fn parse(&self, value: &str) -> Vec<String> {
        match self {
            TagsStorageType::Csv => value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            TagsStorageType::Json => serde_json::from_str::<Vec<String>>(value)
                .map(|tags| tags.into_iter().filter(|t| !t.trim().is_empty()).collect())
                .unwrap_or_default(),
        }
    }
}

impl FromStr for TagsStorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TagsStorageType::Csv),
            "json" => Ok(TagsStorageType::Json),
            _ => Err(format!("Unknown tags storage type: {}", s)),
        }
    }
}

impl std::fmt::Display for TagsStorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagsStorageType::Csv => write!(f, "csv"),
            TagsStorageType::Json => write!(f, "json"),
        }
    }
}

/// A tag within a group, optionally bound to a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i32,
    pub group: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    /// Number of content items using the tag
    pub node_count: i32,
}

impl Tag {
    pub fn new(group: Option<&str>, text: &str, language_id: Option<i32>) -> Result<Self, ArgumentError> {
        let group = match group {
            Some(g) if !g.trim().is_empty() => g.trim().to_string(),
            _ => DEFAULT_TAG_GROUP.to_string(),
        };
        Ok(Self {
            id: 0,
            group,
            text: require_not_blank("text", text)?.trim().to_string(),
            language_id,
            node_count: 0,
        })
    }
}
