//! Consent records and their combinable states.

use crate::change_tracking::{set_property, DeepClone, RememberBeingDirty};
use crate::entity::{impl_entity, EntityBase};
use serde::{Deserialize, Serialize};
use shared::validation::require_not_blank;
use shared::ArgumentError;

bitflags::bitflags! {
    /// State of a consent. Values are bit flags and may be combined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ConsentState: u8 {
        const PENDING = 1;
        const GRANTED = 2;
        const REVOKED = 4;
    }
}

impl ConsentState {
    pub const NONE: ConsentState = ConsentState::empty();

    pub fn is_granted(self) -> bool {
        self.intersects(ConsentState::GRANTED)
    }

    pub fn is_revoked(self) -> bool {
        self.intersects(ConsentState::REVOKED)
    }

    pub fn is_pending(self) -> bool {
        self.intersects(ConsentState::PENDING)
    }
}

impl Default for ConsentState {
    fn default() -> Self {
        ConsentState::NONE
    }
}

/// A consent given by a source (e.g. a member) for an action in a context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    #[serde(flatten)]
    entity: EntityBase,
    current: bool,
    source: String,
    context: String,
    action: String,
    state: ConsentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl_entity!(Consent);

impl Consent {
    /// Creates the current consent for `source`/`context`/`action`.
    pub fn new(
        source: &str,
        context: &str,
        action: &str,
        state: ConsentState,
    ) -> Result<Self, ArgumentError> {
        Ok(Self {
            entity: EntityBase::new(),
            current: true,
            source: require_not_blank("source", source)?.to_string(),
            context: require_not_blank("context", context)?.to_string(),
            action: require_not_blank("action", action)?.to_string(),
            state,
            comment: None,
        })
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_granted(&self) -> bool {
        self.state.is_granted()
    }

    pub fn is_revoked(&self) -> bool {
        self.state.is_revoked()
    }

    pub fn set_state(&mut self, state: ConsentState) {
        set_property(&mut self.entity.tracker, &mut self.state, state, "state");
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        set_property(&mut self.entity.tracker, &mut self.comment, comment, "comment");
    }

    /// Marks this record as superseded by a newer one.
    pub fn supersede(&mut self) {
        set_property(&mut self.entity.tracker, &mut self.current, false, "current");
    }
}

impl DeepClone for Consent {
    fn deep_clone(&self) -> Self {
        let mut clone = self.clone();
        clone.reset_dirty_properties(false);
        clone
    }
}
