//! Insertion-ordered keyed map that notifies subscribers of changes.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A change raised by an [`ObservableMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapChange<K> {
    Added(K),
    Replaced(K),
    Removed(K),
    Cleared,
}

type Subscriber<K> = Arc<dyn Fn(&MapChange<K>) + Send + Sync>;

pub struct ObservableMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
    subscribers: Vec<Subscriber<K>>,
}

impl<K, V> ObservableMap<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback invoked after every change.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&MapChange<K>) + Send + Sync + 'static,
    {
        self.subscribers.push(Arc::new(callback));
    }

    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Mutable access without notification; pair with [`Self::notify_replaced`].
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// Inserts or replaces, keeping the original position on replace.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&i) = self.index.get(&key) {
            let previous = std::mem::replace(&mut self.entries[i].1, value);
            self.notify(&MapChange::Replaced(key));
            return Some(previous);
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key.clone(), value));
        self.notify(&MapChange::Added(key));
        None
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.index.remove(key)?;
        let (removed_key, value) = self.entries.remove(i);
        self.reindex_from(i);
        self.notify(&MapChange::Removed(removed_key));
        Some(value)
    }

    /// Moves the entry at `old_key` to `new_key`, keeping its position.
    ///
    /// Returns `false` when `old_key` is missing or `new_key` is taken.
    pub fn rekey<Q>(&mut self, old_key: &Q, new_key: K) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.index.contains_key::<K>(&new_key) {
            return false;
        }
        let Some(i) = self.index.remove(old_key) else {
            return false;
        };
        let removed_key = std::mem::replace(&mut self.entries[i].0, new_key.clone());
        self.index.insert(new_key.clone(), i);
        self.notify(&MapChange::Removed(removed_key));
        self.notify(&MapChange::Added(new_key));
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.notify(&MapChange::Cleared);
    }

    /// Raises a replace notification for an entry changed in place.
    pub fn notify_replaced(&self, key: K) {
        self.notify(&MapChange::Replaced(key));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// A copy of the entries without any subscribers.
    pub fn detached_clone(&self) -> Self
    where
        V: Clone,
    {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
            subscribers: Vec::new(),
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, (key, _)) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = i;
            }
        }
    }

    fn notify(&self, change: &MapChange<K>) {
        for subscriber in &self.subscribers {
            subscriber(change);
        }
    }
}

impl<K, V> Default for ObservableMap<K, V>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ObservableMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<K, V> PartialEq for ObservableMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> fmt::Debug for ObservableMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> Serialize for ObservableMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_map() -> (ObservableMap<String, i32>, Arc<Mutex<Vec<MapChange<String>>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let mut map = ObservableMap::new();
        map.subscribe(move |change: &MapChange<String>| sink.lock().unwrap().push(change.clone()));
        (map, log)
    }

    #[test]
    fn test_insert_raises_added_then_replaced() {
        let (mut map, log) = recording_map();

        assert!(map.insert("a".into(), 1).is_none());
        assert_eq!(map.insert("a".into(), 2), Some(1));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&2));
        assert_eq!(
            *log.lock().unwrap(),
            vec![MapChange::Added("a".into()), MapChange::Replaced("a".into())]
        );
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut map = ObservableMap::new();
        map.insert("c".to_string(), 3);
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 10);

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_reindexes() {
        let (mut map, log) = recording_map();
        map.insert("a".into(), 1);
        map.insert("b".into(), 2);
        map.insert("c".into(), 3);

        assert_eq!(map.remove("a"), Some(1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert!(map.remove("a").is_none());
        assert_eq!(log.lock().unwrap().last(), Some(&MapChange::Removed("a".into())));
    }

    #[test]
    fn test_rekey() {
        let mut map = ObservableMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        assert!(map.rekey("a", "z".to_string()));
        assert!(!map.contains_key("a"));
        assert_eq!(map.get("z"), Some(&1));
        assert_eq!(map.keys().next().map(String::as_str), Some("z"));

        assert!(!map.rekey("missing", "y".to_string()));
        assert!(!map.rekey("z", "b".to_string()));
    }

    #[test]
    fn test_clear_notifies() {
        let (mut map, log) = recording_map();
        map.insert("a".into(), 1);
        map.clear();

        assert!(map.is_empty());
        assert_eq!(log.lock().unwrap().last(), Some(&MapChange::Cleared));
    }

    #[test]
    fn test_detached_clone_drops_subscribers() {
        let (mut map, log) = recording_map();
        map.insert("a".into(), 1);

        let mut copy = map.detached_clone();
        copy.insert("b".into(), 2);

        assert_eq!(log.lock().unwrap().len(), 1);
        assert_ne!(map, copy);
    }

    #[test]
    fn test_serializes_as_map() {
        let mut map = ObservableMap::new();
        map.insert("en-us".to_string(), 1);
        map.insert("da-dk".to_string(), 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"en-us":1,"da-dk":2}"#);
    }
}
