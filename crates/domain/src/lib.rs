//! Domain layer for the CMS core model.
//!
//! This crate contains:
//! - Entity identity and dirty-property tracking
//! - An insertion-ordered map that notifies subscribers of changes
//! - Content, language, webhook, consent and email models
//! - Services for auditing, metrics consent and notification emails

pub mod change_tracking;
pub mod entity;
pub mod error;
pub mod models;
pub mod observable;
pub mod services;

pub use change_tracking::{ChangeTracker, DeepClone, RememberBeingDirty};
pub use entity::{Entity, EntityBase};
pub use error::ModelError;
pub use observable::{MapChange, ObservableMap};
