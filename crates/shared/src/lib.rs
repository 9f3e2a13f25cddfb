//! Shared utilities and common types for the CMS core model.
//!
//! This crate provides common functionality used across all other crates:
//! - Argument guards and the shared error type
//! - Culture code normalization
//! - Offset pagination (`PagedResult`, `PagedModel`)
//! - Layered settings and logging setup

pub mod culture;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod settings;
pub mod validation;

pub use error::ArgumentError;
pub use pagination::{PagedModel, PagedResult};
pub use settings::{ContentSettings, CoreSettings};
