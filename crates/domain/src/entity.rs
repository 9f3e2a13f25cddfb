//! Entity identity and tree paths.

use crate::change_tracking::{set_property, ChangeTracker, RememberBeingDirty};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Separator between ids in a tree path.
pub const PATH_SEPARATOR: char = ',';

/// Id of the virtual root every tree path starts from.
pub const ROOT_ID: i32 = -1;

/// Identity, timestamps and change tracker shared by every entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    pub(crate) id: i32,
    pub(crate) key: Uuid,
    pub(crate) create_date: DateTime<Utc>,
    pub(crate) update_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) delete_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub(crate) tracker: ChangeTracker,
}

impl EntityBase {
    /// A fresh, unsaved identity with a random key.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            key: Uuid::new_v4(),
            create_date: now,
            update_date: now,
            delete_date: None,
            tracker: ChangeTracker::new(),
        }
    }

    /// An identity that already exists in storage.
    pub fn with_identity(id: i32, key: Uuid) -> Self {
        Self {
            id,
            key,
            ..Self::new()
        }
    }
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EntityBase {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.key == other.key
            && self.create_date == other.create_date
            && self.update_date == other.update_date
            && self.delete_date == other.delete_date
    }
}

/// Identity contract for stored models.
pub trait Entity: RememberBeingDirty {
    fn entity(&self) -> &EntityBase;

    fn entity_mut(&mut self) -> &mut EntityBase;

    fn id(&self) -> i32 {
        self.entity().id
    }

    fn key(&self) -> Uuid {
        self.entity().key
    }

    fn create_date(&self) -> DateTime<Utc> {
        self.entity().create_date
    }

    fn update_date(&self) -> DateTime<Utc> {
        self.entity().update_date
    }

    fn delete_date(&self) -> Option<DateTime<Utc>> {
        self.entity().delete_date
    }

    /// Whether the entity has been assigned a storage id.
    fn has_identity(&self) -> bool {
        self.entity().id != 0
    }

    fn set_id(&mut self, id: i32) {
        let base = self.entity_mut();
        set_property(&mut base.tracker, &mut base.id, id, "id");
    }

    fn set_key(&mut self, key: Uuid) {
        let base = self.entity_mut();
        set_property(&mut base.tracker, &mut base.key, key, "key");
    }

    fn set_create_date(&mut self, date: DateTime<Utc>) {
        let base = self.entity_mut();
        set_property(&mut base.tracker, &mut base.create_date, date, "createDate");
    }

    fn set_update_date(&mut self, date: DateTime<Utc>) {
        let base = self.entity_mut();
        set_property(&mut base.tracker, &mut base.update_date, date, "updateDate");
    }

    fn set_delete_date(&mut self, date: Option<DateTime<Utc>>) {
        let base = self.entity_mut();
        set_property(&mut base.tracker, &mut base.delete_date, date, "deleteDate");
    }

    /// Forgets the storage identity so the entity can be saved as new.
    fn reset_identity(&mut self) {
        let base = self.entity_mut();
        base.id = 0;
        base.key = Uuid::nil();
    }
}

/// Implements [`Entity`] and [`RememberBeingDirty`] for a struct holding an
/// `entity: EntityBase` field.
macro_rules! impl_entity {
    ($ty:ty) => {
        impl $crate::change_tracking::RememberBeingDirty for $ty {
            fn change_tracker(&self) -> &$crate::change_tracking::ChangeTracker {
                &self.entity.tracker
            }

            fn change_tracker_mut(&mut self) -> &mut $crate::change_tracking::ChangeTracker {
                &mut self.entity.tracker
            }
        }

        impl $crate::entity::Entity for $ty {
            fn entity(&self) -> &$crate::entity::EntityBase {
                &self.entity
            }

            fn entity_mut(&mut self) -> &mut $crate::entity::EntityBase {
                &mut self.entity
            }
        }
    };
}

pub(crate) use impl_entity;

/// Builds the tree path of a child: `"{parent_path},{id}"`.
pub fn build_path(parent_path: &str, id: i32) -> String {
    if parent_path.is_empty() {
        format!("{}{}{}", ROOT_ID, PATH_SEPARATOR, id)
    } else {
        format!("{}{}{}", parent_path, PATH_SEPARATOR, id)
    }
}

/// Depth of a path below the root; `"-1,1050,1060"` is level 2.
pub fn path_level(path: &str) -> usize {
    path.split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .count()
        .saturating_sub(1)
}

/// Parses the ids of a tree path, skipping the root.
pub fn path_ids(path: &str) -> Vec<i32> {
    path.split(PATH_SEPARATOR)
        .filter_map(|segment| segment.trim().parse::<i32>().ok())
        .filter(|id| *id != ROOT_ID)
        .collect()
}
