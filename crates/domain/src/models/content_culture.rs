//! Per-culture names and dates of variant content.

use crate::change_tracking::{set_property, ChangeTracker, DeepClone, RememberBeingDirty};
use crate::error::ModelError;
use crate::observable::{MapChange, ObservableMap};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::culture::normalize_culture;
use shared::ArgumentError;
use tracing::debug;

/// The name and last edit date of one culture variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCultureInfos {
    culture: String,
    name: String,
    date: DateTime<Utc>,
    #[serde(skip)]
    tracker: ChangeTracker,
}

impl ContentCultureInfos {
    /// Creates an entry for `culture`, stored lowercased.
    pub fn new(culture: &str) -> Result<Self, ArgumentError> {
        Ok(Self {
            culture: normalize_culture("culture", culture)?,
            name: String::new(),
            date: Utc::now(),
            tracker: ChangeTracker::new(),
        })
    }

    pub fn culture(&self) -> &str {
        &self.culture
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        set_property(&mut self.tracker, &mut self.name, name.into(), "name");
    }

    pub fn set_date(&mut self, date: DateTime<Utc>) {
        set_property(&mut self.tracker, &mut self.date, date, "date");
    }
}

impl PartialEq for ContentCultureInfos {
    fn eq(&self, other: &Self) -> bool {
        self.culture == other.culture && self.name == other.name && self.date == other.date
    }
}

impl RememberBeingDirty for ContentCultureInfos {
    fn change_tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    fn change_tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }
}

impl DeepClone for ContentCultureInfos {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

/// Culture infos keyed by case-insensitive culture code.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ContentCultureInfosCollection {
    items: ObservableMap<String, ContentCultureInfos>,
    #[serde(skip)]
    tracker: ChangeTracker,
}

/// Earlier name of [`ContentCultureInfosCollection`], kept for callers that
/// only deal in culture names.
pub type CultureNameCollection = ContentCultureInfosCollection;

impl ContentCultureInfosCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates the entry for `culture`.
    ///
    /// An existing entry (matched case-insensitively) is updated in place and a
    /// replace notification is raised; otherwise a new entry is added.
    pub fn add_or_update(
        &mut self,
        culture: &str,
        name: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<(), ArgumentError> {
        let key = normalize_culture("culture", culture)?;
        let name = name.into();

        if let Some(infos) = self.items.get_mut(key.as_str()) {
            infos.set_name(name);
            infos.set_date(date);
            debug!(culture = %key, "Updated culture infos");
            self.items.notify_replaced(key);
            return Ok(());
        }

        let mut infos = ContentCultureInfos::new(&key)?;
        infos.set_name(name);
        infos.set_date(date);
        debug!(culture = %key, "Added culture infos");
        self.items.insert(key, infos);
        self.tracker.on_property_changed("items");
        Ok(())
    }

    /// Adds a prepared entry; fails if its culture is already present.
    pub fn add(&mut self, infos: ContentCultureInfos) -> Result<(), ModelError> {
        let key = infos.culture().to_string();
        if self.items.contains_key(key.as_str()) {
            return Err(ModelError::Duplicate(key));
        }
        self.items.insert(key, infos);
        self.tracker.on_property_changed("items");
        Ok(())
    }

    /// Lookups accept what `add_or_update` accepts; a blank culture is a miss.
    pub fn get(&self, culture: &str) -> Option<&ContentCultureInfos> {
        let key = normalize_culture("culture", culture).ok()?;
        self.items.get(key.as_str())
    }

    pub fn contains(&self, culture: &str) -> bool {
        self.get(culture).is_some()
    }

    pub fn remove(&mut self, culture: &str) -> Option<ContentCultureInfos> {
        let key = normalize_culture("culture", culture).ok()?;
        let removed = self.items.remove(key.as_str());
        if removed.is_some() {
            self.tracker.on_property_changed("items");
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.tracker.on_property_changed("items");
        }
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lowercased culture codes in insertion order.
    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentCultureInfos> {
        self.items.values()
    }

    /// Registers a callback for collection changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&MapChange<String>) + Send + Sync + 'static,
    {
        self.items.subscribe(callback);
    }
}

impl PartialEq for ContentCultureInfosCollection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl RememberBeingDirty for ContentCultureInfosCollection {
    fn change_tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    fn change_tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }

    fn is_dirty(&self) -> bool {
        self.tracker.is_dirty() || self.items.values().any(|infos| infos.is_dirty())
    }

    fn reset_dirty_properties(&mut self, remember: bool) {
        self.tracker.reset(remember);
        for infos in self.items.values_mut() {
            infos.reset_dirty_properties(remember);
        }
    }
}

impl DeepClone for ContentCultureInfosCollection {
    fn deep_clone(&self) -> Self {
        let mut items = ObservableMap::new();
        for (key, infos) in self.items.iter() {
            items.insert(key.clone(), infos.deep_clone());
        }
        Self {
            items,
            tracker: ChangeTracker::new(),
        }
    }
}
