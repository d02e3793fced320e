//! Resource lookup capability
//!
//! Presentation layers usually want a logo, badge or photo per team. The
//! engine never searches for those itself; a caller injects a
//! [`ResourceLookup`] and pairs leaderboard entries with whatever it finds.

use crate::engine::bracket::{BracketEntry, BracketStanding};
use crate::utils::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque handle to an external resource (a path, URL or asset key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceHandle(pub String);

impl ResourceHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trait for resolving a display name to an optional resource
pub trait ResourceLookup: Send + Sync {
    /// Find the resource for a team or captain name
    fn lookup(&self, name: &str) -> Option<ResourceHandle>;
}

/// Lookup that never finds anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLookup for NoResources {
    fn lookup(&self, _name: &str) -> Option<ResourceHandle> {
        None
    }
}

/// In-memory lookup keyed by normalized name, so "Equipo 1", "equipo_1"
/// and "EQUIPO-1" resolve to the same resource
#[derive(Debug, Clone, Default)]
pub struct StaticResourceLookup {
    resources: HashMap<String, ResourceHandle>,
}

impl StaticResourceLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource; a later registration for the same key wins
    pub fn insert(&mut self, name: &str, handle: impl Into<String>) {
        self.resources
            .insert(normalize_name(name), ResourceHandle(handle.into()));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<S: AsRef<str>, H: Into<String>> FromIterator<(S, H)> for StaticResourceLookup {
    fn from_iter<I: IntoIterator<Item = (S, H)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (name, handle) in iter {
            lookup.insert(name.as_ref(), handle);
        }
        lookup
    }
}

impl ResourceLookup for StaticResourceLookup {
    fn lookup(&self, name: &str) -> Option<ResourceHandle> {
        self.resources.get(&normalize_name(name)).cloned()
    }
}

/// Pair every leaderboard entry with its team resource, if any
pub fn resolve_resources<'a>(
    standing: &'a BracketStanding,
    lookup: &dyn ResourceLookup,
) -> Vec<(&'a BracketEntry, Option<ResourceHandle>)> {
    standing
        .entries
        .iter()
        .map(|entry| (entry, lookup.lookup(&entry.name)))
        .collect()
}
