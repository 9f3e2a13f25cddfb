//! Per-field dirty tracking.
//!
//! Models keep a [`ChangeTracker`] next to their fields and route every
//! mutation through [`set_property`], which only marks the field dirty when
//! the value actually changes. Resetting can optionally remember what was
//! dirty, so callers that run after a save can still ask what changed.

use std::collections::BTreeSet;

/// Records which properties changed since the last reset.
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    dirty: BTreeSet<&'static str>,
    was_dirty: BTreeSet<&'static str>,
    enabled: bool,
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self {
            dirty: BTreeSet::new(),
            was_dirty: BTreeSet::new(),
            enabled: true,
        }
    }
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a property dirty, unless tracking is disabled.
    pub fn on_property_changed(&mut self, name: &'static str) {
        if self.enabled {
            self.dirty.insert(name);
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_property_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    pub fn dirty_properties(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dirty.iter().copied()
    }

    pub fn was_dirty(&self) -> bool {
        !self.was_dirty.is_empty()
    }

    pub fn was_property_dirty(&self, name: &str) -> bool {
        self.was_dirty.contains(name)
    }

    /// Clears the dirty set. With `remember`, the cleared names become the
    /// "was dirty" set; otherwise that set is cleared too.
    pub fn reset(&mut self, remember: bool) {
        if remember {
            self.was_dirty = std::mem::take(&mut self.dirty);
        } else {
            self.dirty.clear();
            self.was_dirty.clear();
        }
    }

    pub fn forget_previously_dirty(&mut self) {
        self.was_dirty.clear();
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Assigns `value` to `slot` and marks `name` dirty when it differs.
///
/// Returns whether the value changed.
pub fn set_property<T: PartialEq>(
    tracker: &mut ChangeTracker,
    slot: &mut T,
    value: T,
    name: &'static str,
) -> bool {
    set_property_with(tracker, slot, value, name, |a, b| a == b)
}

/// Like [`set_property`] with a custom equality check.
pub fn set_property_with<T, F>(
    tracker: &mut ChangeTracker,
    slot: &mut T,
    value: T,
    name: &'static str,
    equals: F,
) -> bool
where
    F: FnOnce(&T, &T) -> bool,
{
    if equals(slot, &value) {
        return false;
    }
    *slot = value;
    tracker.on_property_changed(name);
    true
}

/// Dirty-tracking surface shared by entities and tracked value objects.
pub trait RememberBeingDirty {
    fn change_tracker(&self) -> &ChangeTracker;

    fn change_tracker_mut(&mut self) -> &mut ChangeTracker;

    fn is_dirty(&self) -> bool {
        self.change_tracker().is_dirty()
    }

    fn is_property_dirty(&self, name: &str) -> bool {
        self.change_tracker().is_property_dirty(name)
    }

    fn dirty_properties(&self) -> Vec<&'static str> {
        self.change_tracker().dirty_properties().collect()
    }

    fn reset_dirty_properties(&mut self, remember: bool) {
        self.change_tracker_mut().reset(remember);
    }

    fn was_dirty(&self) -> bool {
        self.change_tracker().was_dirty()
    }

    fn was_property_dirty(&self, name: &str) -> bool {
        self.change_tracker().was_property_dirty(name)
    }

    fn forget_previously_dirty_properties(&mut self) {
        self.change_tracker_mut().forget_previously_dirty();
    }

    fn disable_change_tracking(&mut self) {
        self.change_tracker_mut().disable();
    }

    fn enable_change_tracking(&mut self) {
        self.change_tracker_mut().enable();
    }
}

/// Produces an independently-owned copy with change tracking reset.
pub trait DeepClone {
    fn deep_clone(&self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Sample {
        name: String,
        count: i32,
        tracker: ChangeTracker,
    }

    impl RememberBeingDirty for Sample {
        fn change_tracker(&self) -> &ChangeTracker {
            &self.tracker
        }

        fn change_tracker_mut(&mut self) -> &mut ChangeTracker {
            &mut self.tracker
        }
    }

    impl Sample {
        fn set_name(&mut self, name: &str) {
            set_property(&mut self.tracker, &mut self.name, name.to_string(), "name");
        }

        fn set_count(&mut self, count: i32) {
            set_property(&mut self.tracker, &mut self.count, count, "count");
        }
    }

    #[test]
    fn test_new_tracker_is_clean() {
        let sample = Sample::default();
        assert!(!sample.is_dirty());
        assert!(!sample.was_dirty());
        assert!(sample.change_tracker().is_enabled());
    }

    #[test]
    fn test_changed_value_marks_dirty() {
        let mut sample = Sample::default();
        sample.set_name("home");

        assert!(sample.is_dirty());
        assert!(sample.is_property_dirty("name"));
        assert!(!sample.is_property_dirty("count"));
        assert_eq!(sample.dirty_properties(), vec!["name"]);
    }

    #[test]
    fn test_same_value_stays_clean() {
        let mut sample = Sample::default();
        sample.set_count(0);
        assert!(!sample.is_dirty());
    }

    #[test]
    fn test_reset_with_remember() {
        let mut sample = Sample::default();
        sample.set_name("home");
        sample.set_count(3);
        sample.reset_dirty_properties(true);

        assert!(!sample.is_dirty());
        assert!(sample.was_dirty());
        assert!(sample.was_property_dirty("name"));
        assert!(sample.was_property_dirty("count"));

        sample.forget_previously_dirty_properties();
        assert!(!sample.was_dirty());
    }

    #[test]
    fn test_reset_without_remember_clears_history() {
        let mut sample = Sample::default();
        sample.set_name("home");
        sample.reset_dirty_properties(true);
        sample.set_count(1);
        sample.reset_dirty_properties(false);

        assert!(!sample.is_dirty());
        assert!(!sample.was_dirty());
    }

    #[test]
    fn test_disabled_tracking_ignores_changes() {
        let mut sample = Sample::default();
        sample.disable_change_tracking();
        sample.set_name("home");

        assert_eq!(sample.name, "home");
        assert!(!sample.is_dirty());

        sample.enable_change_tracking();
        sample.set_name("about");
        assert!(sample.is_property_dirty("name"));
    }

    #[test]
    fn test_set_property_with_custom_equality() {
        let mut tracker = ChangeTracker::new();
        let mut slot = "Home".to_string();

        let changed = set_property_with(&mut tracker, &mut slot, "HOME".to_string(), "name", |a, b| {
            a.eq_ignore_ascii_case(b)
        });

        assert!(!changed);
        assert_eq!(slot, "Home");
        assert!(!tracker.is_dirty());
    }
}
