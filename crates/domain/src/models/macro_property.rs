//! Macro parameters and their alias-keyed collection.

use crate::change_tracking::{set_property, ChangeTracker, DeepClone, RememberBeingDirty};
use crate::error::ModelError;
use crate::observable::{MapChange, ObservableMap};
use serde::Serialize;
use shared::validation::require_not_blank;
use shared::ArgumentError;
use tracing::debug;
use uuid::Uuid;

/// A parameter accepted by a macro.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProperty {
    id: i32,
    key: Uuid,
    alias: String,
    name: String,
    sort_order: i32,
    editor_alias: String,
    #[serde(skip)]
    tracker: ChangeTracker,
}

impl MacroProperty {
    pub fn new(
        alias: &str,
        name: &str,
        sort_order: i32,
        editor_alias: &str,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            id: 0,
            key: Uuid::new_v4(),
            alias: require_not_blank("alias", alias)?.to_string(),
            name: name.to_string(),
            sort_order,
            editor_alias: require_not_blank("editor_alias", editor_alias)?.to_string(),
            tracker: ChangeTracker::new(),
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn editor_alias(&self) -> &str {
        &self.editor_alias
    }

    pub fn set_id(&mut self, id: i32) {
        set_property(&mut self.tracker, &mut self.id, id, "id");
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        set_property(&mut self.tracker, &mut self.name, name.into(), "name");
    }

    pub fn set_sort_order(&mut self, sort_order: i32) {
        set_property(&mut self.tracker, &mut self.sort_order, sort_order, "sortOrder");
    }

    pub fn set_editor_alias(&mut self, editor_alias: impl Into<String>) {
        set_property(
            &mut self.tracker,
            &mut self.editor_alias,
            editor_alias.into(),
            "editorAlias",
        );
    }

    // Only the owning collection may change the alias, since it is the key.
    fn set_alias(&mut self, alias: String) {
        set_property(&mut self.tracker, &mut self.alias, alias, "alias");
    }
}

impl PartialEq for MacroProperty {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.alias == other.alias
            && self.name == other.name
            && self.sort_order == other.sort_order
            && self.editor_alias == other.editor_alias
    }
}

impl RememberBeingDirty for MacroProperty {
    fn change_tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    fn change_tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }
}

impl DeepClone for MacroProperty {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}

/// Field changes applied by [`MacroPropertyCollection::update_property`].
#[derive(Debug, Clone, Default)]
pub struct MacroPropertyUpdate {
    pub name: Option<String>,
    pub sort_order: Option<i32>,
    pub editor_alias: Option<String>,
    pub new_alias: Option<String>,
}

/// Macro properties keyed by alias (case-sensitive).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MacroPropertyCollection {
    items: ObservableMap<String, MacroProperty>,
    #[serde(skip)]
    tracker: ChangeTracker,
}

impl MacroPropertyCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property; fails if the alias is taken.
    pub fn add(&mut self, property: MacroProperty) -> Result<(), ModelError> {
        let alias = property.alias().to_string();
        if self.items.contains_key(alias.as_str()) {
            return Err(ModelError::Duplicate(alias));
        }
        self.items.insert(alias, property);
        self.tracker.on_property_changed("items");
        Ok(())
    }

    /// Updates the property at `current_alias` in place, re-keying it when a
    /// different `new_alias` is given.
    pub fn update_property(
        &mut self,
        current_alias: &str,
        update: MacroPropertyUpdate,
    ) -> Result<(), ModelError> {
        let current_alias = require_not_blank("current_alias", current_alias)?;
        if !self.items.contains_key(current_alias) {
            return Err(ModelError::NotFound(current_alias.to_string()));
        }

        let new_alias = match update.new_alias {
            Some(alias) if alias != current_alias => {
                require_not_blank("new_alias", &alias)?;
                if self.items.contains_key(alias.as_str()) {
                    return Err(ModelError::Duplicate(alias));
                }
                Some(alias)
            }
            _ => None,
        };

        if let Some(property) = self.items.get_mut(current_alias) {
            if let Some(name) = update.name {
                property.set_name(name);
            }
            if let Some(sort_order) = update.sort_order {
                property.set_sort_order(sort_order);
            }
            if let Some(editor_alias) = update.editor_alias {
                property.set_editor_alias(editor_alias);
            }
            if let Some(alias) = &new_alias {
                property.set_alias(alias.clone());
            }
        }

        match new_alias {
            Some(alias) => {
                debug!(from = current_alias, to = %alias, "Re-keyed macro property");
                self.items.rekey(current_alias, alias);
                self.tracker.on_property_changed("items");
            }
            None => self.items.notify_replaced(current_alias.to_string()),
        }
        Ok(())
    }

    pub fn get(&self, alias: &str) -> Option<&MacroProperty> {
        self.items.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.items.contains_key(alias)
    }

    pub fn remove(&mut self, alias: &str) -> Option<MacroProperty> {
        let removed = self.items.remove(alias);
        if removed.is_some() {
            self.tracker.on_property_changed("items");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MacroProperty> {
        self.items.values()
    }

    /// Properties ordered by sort order, then alias.
    pub fn sorted(&self) -> Vec<&MacroProperty> {
        let mut properties: Vec<&MacroProperty> = self.items.values().collect();
        properties.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.alias.cmp(&b.alias))
        });
        properties
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&MapChange<String>) + Send + Sync + 'static,
    {
        self.items.subscribe(callback);
    }
}

impl PartialEq for MacroPropertyCollection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl RememberBeingDirty for MacroPropertyCollection {
    fn change_tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    fn change_tracker_mut(&mut self) -> &mut ChangeTracker {
        &mut self.tracker
    }

    fn is_dirty(&self) -> bool {
        self.tracker.is_dirty() || self.items.values().any(|p| p.is_dirty())
    }

    fn reset_dirty_properties(&mut self, remember: bool) {
        self.tracker.reset(remember);
        for property in self.items.values_mut() {
            property.reset_dirty_properties(remember);
        }
    }
}

impl DeepClone for MacroPropertyCollection {
    fn deep_clone(&self) -> Self {
        let mut items = ObservableMap::new();
        for (alias, property) in self.items.iter() {
            items.insert(alias.clone(), property.deep_clone());
        }
        Self {
            items,
            tracker: ChangeTracker::new(),
        }
    }
}
