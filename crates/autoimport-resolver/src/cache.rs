//! Resolution cache
//!
//! Memoizes resolver answers by identifier name. The cache belongs to the
//! caller and is handed to each transform as `&mut`, so sharing it across
//! concurrent transforms requires external locking. Entries are only ever
//! added: an existing key is never overwritten.

use autoimport_common::ImportInfo;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionCache {
    entries: FxHashMap<String, ImportInfo>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ImportInfo> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Record `info` for `name` unless an entry already exists.
    ///
    /// Returns `true` when the entry was added.
    pub fn insert(&mut self, name: impl Into<String>, info: ImportInfo) -> bool {
        match self.entries.entry(name.into()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(info);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportInfo)> {
        self.entries.iter().map(|(name, info)| (name.as_str(), info))
    }
}

impl FromIterator<(String, ImportInfo)> for ResolutionCache {
    fn from_iter<T: IntoIterator<Item = (String, ImportInfo)>>(iter: T) -> Self {
        let mut cache = ResolutionCache::new();
        for (name, info) in iter {
            cache.insert(name, info);
        }
        cache
    }
}
