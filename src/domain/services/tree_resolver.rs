//! Tree Resolver
//!
//! Expands requested entry names into their transitive closure over
//! `registry_dependencies`.
//!
//! The walk is iterative with an explicit stack, so dependency depth never
//! touches the call stack, and a visited set makes cycles terminate. Entries
//! are emitted the first time they are discovered (pre-order), with each
//! entry's dependencies expanded in declaration order.

use std::collections::HashSet;

use crate::domain::entities::{RegistryIndex, ResolvedClosure};
use crate::error::{ComponentryError, ComponentryResult};

/// Name of the bootstrap entry, always placed first in a closure.
pub const BOOTSTRAP_ENTRY: &str = "index";

/// Resolve `requested` against `index`.
pub fn resolve(requested: &[String], index: &RegistryIndex) -> ComponentryResult<ResolvedClosure> {
    let mut roots: Vec<&str> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = dependency_name(name);
        if !roots.contains(&name) {
            roots.push(name);
        }
    }
    if let Some(pos) = roots.iter().position(|n| *n == BOOTSTRAP_ENTRY) {
        let bootstrap = roots.remove(pos);
        roots.insert(0, bootstrap);
    }

    for name in &roots {
        if !index.contains(name) {
            return Err(ComponentryError::UnknownDependency {
                name: (*name).to_string(),
                referrer: None,
            });
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::new();

    for root in roots {
        // (name, referrer) pairs; pushed in reverse so pops follow declaration order
        let mut stack: Vec<(&str, Option<&str>)> = vec![(root, None)];

        while let Some((name, referrer)) = stack.pop() {
            if visited.contains(name) {
                continue;
            }

            let entry = index
                .get(name)
                .ok_or_else(|| ComponentryError::UnknownDependency {
                    name: name.to_string(),
                    referrer: referrer.map(str::to_string),
                })?;

            visited.insert(name);
            ordered.push(entry.clone());

            for dep in entry.registry_dependencies.iter().rev() {
                let dep = dependency_name(dep);
                if !visited.contains(dep) {
                    stack.push((dep, Some(entry.name.as_str())));
                }
            }
        }
    }

    tracing::debug!(
        closure = ?ordered.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        "resolved dependency closure"
    );
    Ok(ResolvedClosure::from_ordered(ordered))
}

/// Entry name for a dependency reference.
///
/// Plain names pass through; URLs and paths (`https://x/r/button.json`,
/// `./button.json`) resolve by their file stem.
pub fn dependency_name(reference: &str) -> &str {
    let looks_like_location = reference.contains("://")
        || reference.starts_with("./")
        || reference.starts_with("../")
        || reference.starts_with('/')
        || reference.ends_with(".json");
    if !looks_like_location {
        return reference;
    }

    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference);
    let file = without_query
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(without_query);
    file.strip_suffix(".json").unwrap_or(file)
}
