//! RegistryIndex entity - the validated catalogue
//!
//! Entries are stored in catalogue order (an arena) with a name → slot map,
//! so dependency edges are plain name lookups.

use std::collections::HashMap;

use super::RegistryEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryIndex {
    entries: Vec<RegistryEntry>,
    by_name: HashMap<String, usize>,
}

impl RegistryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns `false` (and keeps the existing one) when the
    /// name is already taken.
    pub fn insert(&mut self, entry: RegistryEntry) -> bool {
        if self.by_name.contains_key(&entry.name) {
            return false;
        }
        self.by_name.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.by_name.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RegistryEntry> for RegistryIndex {
    fn from_iter<T: IntoIterator<Item = RegistryEntry>>(iter: T) -> Self {
        let mut index = RegistryIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}
