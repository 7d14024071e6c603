//! Property tests for dependency closure resolution.

use std::collections::HashSet;

use proptest::prelude::*;

use componentry::domain::entities::{ItemType, RegistryEntry, RegistryIndex};
use componentry::domain::services::resolve;

fn name(i: usize) -> String {
    format!("entry-{}", i)
}

/// Index of `deps.len()` entries; `deps[i]` lists indices entry i depends on.
/// Self-references and cycles are allowed.
fn build_index(deps: &[Vec<usize>]) -> RegistryIndex {
    let mut index = RegistryIndex::new();
    for (i, targets) in deps.iter().enumerate() {
        let entry = RegistryEntry::new(name(i), ItemType::Ui)
            .with_registry_dependencies(targets.iter().map(|t| name(*t)));
        index.insert(entry);
    }
    index
}

fn graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..12).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the closure holds each entry once and is closed under dependencies.
    #[test]
    fn property_closure_is_unique_and_complete(
        deps in graph(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let index = build_index(&deps);
        let requested: Vec<String> = picks.iter().map(|p| name(p.index(deps.len()))).collect();

        let closure = resolve(&requested, &index).unwrap();
        let names = closure.names();

        let unique: HashSet<&str> = names.iter().copied().collect();
        prop_assert_eq!(unique.len(), names.len(), "duplicates in {:?}", names);

        for r in &requested {
            prop_assert!(closure.contains(r));
        }
        for entry in closure.entries() {
            for dep in &entry.registry_dependencies {
                prop_assert!(closure.contains(dep), "{} missing from {:?}", dep, names);
            }
        }
    }

    /// PROPERTY: nothing unreachable from the request ends up in the closure.
    #[test]
    fn property_closure_is_minimal(deps in graph(), pick in any::<prop::sample::Index>()) {
        let index = build_index(&deps);
        let root = pick.index(deps.len());

        let mut reachable = HashSet::new();
        let mut todo = vec![root];
        while let Some(i) = todo.pop() {
            if reachable.insert(name(i)) {
                todo.extend(deps[i].iter().copied());
            }
        }

        let root_name = name(root);
        let closure = resolve(&[root_name.clone()], &index).unwrap();
        prop_assert_eq!(closure.len(), reachable.len());
        prop_assert_eq!(closure.names()[0], root_name.as_str());
    }

    /// PROPERTY: resolution is deterministic.
    #[test]
    fn property_closure_is_stable(deps in graph(), pick in any::<prop::sample::Index>()) {
        let index = build_index(&deps);
        let requested = vec![name(pick.index(deps.len()))];

        let first = resolve(&requested, &index).unwrap();
        let second = resolve(&requested, &index).unwrap();
        prop_assert_eq!(first.names(), second.names());
    }
}
