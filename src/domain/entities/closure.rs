//! ResolvedClosure - the deduplicated transitive set of entries to install

use super::RegistryEntry;

/// Entries reachable from the requested names, in first-discovered order.
///
/// Each name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClosure {
    entries: Vec<RegistryEntry>,
}

impl ResolvedClosure {
    pub(crate) fn from_ordered(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RegistryEntry> {
        self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runtime packages required by the closure, deduplicated in order.
    pub fn package_dependencies(&self) -> Vec<String> {
        let mut packages: Vec<String> = Vec::new();
        for dep in self.entries.iter().flat_map(|e| e.dependencies.iter()) {
            if !packages.contains(dep) {
                packages.push(dep.clone());
            }
        }
        packages
    }
}
