//! Integration tests for dependency closures

use std::collections::BTreeSet;
use yc_resolver::{closure_of, Catalog, ClosureEngine};

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_closure_contains_itself() {
    for name in ["Select", "Spin", "MenuItem", "Unknown", "Dropdown"] {
        assert!(closure_of(name).contains(name), "{name}");
    }
}

#[test]
fn test_closure_superset_of_dependencies() {
    let catalog = Catalog::builtin();
    for name in ["AutoComplete", "Mention", "ColorPicker", "Menu", "Avatar"] {
        let closure = closure_of(name);
        for dep in catalog.dependencies(name) {
            assert!(
                closure_of(dep).is_subset(&closure),
                "{dep} closure not contained in {name}"
            );
        }
    }
}

#[test]
fn test_cycle_then_independent_query() {
    let catalog = Catalog::new()
        .with_dependencies("A", &["B"])
        .with_dependencies("B", &["A"]);
    let engine = ClosureEngine::new(&catalog);

    assert_eq!(*engine.closure_of("A"), set(&["A", "B"]));
    assert_eq!(*engine.closure_of("B"), set(&["A", "B"]));
}

#[test]
fn test_cycle_queried_from_either_end() {
    let catalog = Catalog::new()
        .with_dependencies("A", &["B"])
        .with_dependencies("B", &["C"])
        .with_dependencies("C", &["B", "D"]);

    let from_c = ClosureEngine::new(&catalog);
    assert_eq!(*from_c.closure_of("C"), set(&["B", "C", "D"]));
    assert_eq!(*from_c.closure_of("A"), set(&["A", "B", "C", "D"]));

    let from_a = ClosureEngine::new(&catalog);
    assert_eq!(*from_a.closure_of("A"), set(&["A", "B", "C", "D"]));
    assert_eq!(*from_a.closure_of("C"), set(&["B", "C", "D"]));
    assert_eq!(*from_a.closure_of("B"), set(&["B", "C", "D"]));
}

#[test]
fn test_duplicate_edges() {
    let catalog = Catalog::new().with_dependencies("A", &["B", "B", "C", "B"]);
    let engine = ClosureEngine::new(&catalog);
    assert_eq!(*engine.closure_of("A"), set(&["A", "B", "C"]));
}

#[test]
fn test_cache_grows_monotonically() {
    let catalog = Catalog::new()
        .with_dependencies("A", &["B"])
        .with_dependencies("C", &["D"]);
    let engine = ClosureEngine::new(&catalog);

    assert_eq!(engine.cached_len(), 0);
    engine.closure_of("A");
    assert_eq!(engine.cached_len(), 2);
    engine.closure_of("A");
    assert_eq!(engine.cached_len(), 2);
    engine.closure_of("C");
    assert_eq!(engine.cached_len(), 4);
}

#[test]
fn test_dense_cycle_closes_in_one_query() {
    // Every component depends on every other one
    let names: Vec<String> = (0..12).map(|i| format!("C{}", i)).collect();
    let mut catalog = Catalog::new();
    for name in &names {
        let deps: Vec<&str> = names
            .iter()
            .filter(|dep| *dep != name)
            .map(String::as_str)
            .collect();
        catalog = catalog.with_dependencies(name, &deps);
    }
    let engine = ClosureEngine::new(&catalog);

    let all: BTreeSet<String> = names.iter().cloned().collect();
    assert_eq!(*engine.closure_of("C0"), all);
    assert_eq!(engine.cached_len(), names.len());
    for name in &names {
        assert!(engine.is_cached(name), "{name}");
        assert_eq!(*engine.closure_of(name), all);
    }
}
