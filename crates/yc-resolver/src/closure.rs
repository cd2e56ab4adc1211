//! Dependency closure engine
//!
//! Computes every component reachable from a component through the catalog's
//! dependency edges, the component itself included. Results are memoized for
//! the lifetime of the engine; the process-wide engine over the built-in
//! catalog therefore computes each closure at most once per build.

use crate::catalog::Catalog;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A computed dependency closure (sorted, shared)
pub type Closure = Arc<BTreeSet<String>>;

static BUILTIN_ENGINE: Lazy<ClosureEngine<'static>> =
    Lazy::new(|| ClosureEngine::new(Catalog::builtin()));

/// Closure of `name` over the built-in catalog, using the process-wide cache
pub fn closure_of(name: &str) -> Closure {
    BUILTIN_ENGINE.closure_of(name)
}

/// The process-wide engine over the built-in catalog
pub fn builtin_engine() -> &'static ClosureEngine<'static> {
    &BUILTIN_ENGINE
}

/// Traversal state for one top-level query
#[derive(Default)]
struct Walk {
    /// Discovery index of every component whose cycle group is still open
    open: FxHashMap<String, usize>,
    /// Open components in discovery order
    stack: Vec<String>,
    next_index: usize,
}

/// Result of visiting one node
struct Visit {
    members: Closure,
    /// Lowest discovery index reachable through open components; `None` once
    /// the node's cycle group is closed and cached
    low: Option<usize>,
}

/// Memoizing depth-first closure computation
///
/// Components that depend on each other form a cycle group (a strongly
/// connected component). A component reached again while its group is still
/// open contributes nothing to that branch; its members flow up to the
/// group's first-discovered component instead. When that component finishes,
/// its closure is complete and is cached for every member of the group at
/// once. Partial results of open groups are never cached.
pub struct ClosureEngine<'c> {
    catalog: &'c Catalog,

    /// Component → complete closure
    cache: RwLock<FxHashMap<String, Closure>>,
}

impl<'c> ClosureEngine<'c> {
    /// Create an engine with an empty cache
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// The catalog this engine walks
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// All components `name` depends on, transitively, plus `name` itself
    pub fn closure_of(&self, name: &str) -> Closure {
        let mut walk = Walk::default();
        let visit = self.visit(name, &mut walk);
        // A fresh walk discovers `name` at index 0, so its group always closes here
        debug_assert!(visit.low.is_none() && walk.stack.is_empty());
        visit.members
    }

    /// Whether a complete closure for `name` is memoized
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.read().contains_key(name)
    }

    /// Number of memoized closures
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    fn visit(&self, name: &str, walk: &mut Walk) -> Visit {
        if let Some(members) = self.cache.read().get(name) {
            tracing::trace!(component = name, "closure cache hit");
            return Visit {
                members: Arc::clone(members),
                low: None,
            };
        }

        if let Some(&index) = walk.open.get(name) {
            return Visit {
                members: Closure::default(),
                low: Some(index),
            };
        }

        let index = walk.next_index;
        walk.next_index += 1;
        walk.open.insert(name.to_string(), index);
        walk.stack.push(name.to_string());

        let mut members = BTreeSet::from([name.to_string()]);
        let mut low = index;
        for dep in self.catalog.dependencies(name) {
            let sub = self.visit(dep, walk);
            members.extend(sub.members.iter().cloned());
            if let Some(sub_low) = sub.low {
                low = low.min(sub_low);
            }
        }

        // Still part of a group opened above us
        if low < index {
            return Visit {
                members: Arc::new(members),
                low: Some(low),
            };
        }

        tracing::trace!(component = name, size = members.len(), "closure computed");
        let mut cache = self.cache.write();
        let members = Arc::clone(
            cache
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(members)),
        );
        while let Some(member) = walk.stack.pop() {
            walk.open.remove(&member);
            if member == name {
                break;
            }
            cache.entry(member).or_insert_with(|| Arc::clone(&members));
        }
        Visit { members, low: None }
    }
}
