//! Scenario: a corrupted index with a dependency cycle
//!
//! Index: `A → [B]`, `B → [C]`, `C → [A]`.
//! Resolving `A` must terminate with `[A, B, C]`.

use componentry::domain::entities::{ItemType, RegistryEntry, RegistryIndex};
use componentry::domain::services::resolve;
use componentry::ComponentryError;

fn index(c_deps: &[&str]) -> RegistryIndex {
    let mut index = RegistryIndex::new();
    index.insert(RegistryEntry::new("A", ItemType::Ui).with_registry_dependencies(["B"]));
    index.insert(RegistryEntry::new("B", ItemType::Ui).with_registry_dependencies(["C"]));
    index.insert(
        RegistryEntry::new("C", ItemType::Ui).with_registry_dependencies(c_deps.iter().copied()),
    );
    index
}

#[test]
fn scenario_chain_resolves_in_order() {
    let closure = resolve(&["A".to_string()], &index(&[])).unwrap();
    assert_eq!(closure.names(), vec!["A", "B", "C"]);
}

#[test]
fn scenario_cycle_terminates_with_same_order() {
    let closure = resolve(&["A".to_string()], &index(&["A"])).unwrap();
    assert_eq!(closure.names(), vec!["A", "B", "C"]);
}

#[test]
fn scenario_missing_dependency_names_referrer() {
    let err = resolve(&["A".to_string()], &index(&["D"])).unwrap_err();
    match err {
        ComponentryError::UnknownDependency { name, referrer } => {
            assert_eq!(name, "D");
            assert_eq!(referrer.as_deref(), Some("C"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
