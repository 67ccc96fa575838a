// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The id-keyed registry itself.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::region::Region;

/// A stored value plus the sequence number of the registration that wrote it.
#[derive(Clone, Debug, PartialEq)]
pub struct Registered<V> {
    /// The registered value.
    pub value: V,
    /// Registration sequence number; higher means more recently registered.
    pub sequence: u64,
}

/// Maps registration ids to their last-known region.
///
/// ## Semantics
///
/// - [`register`](Self::register) inserts or replaces: ids are unique and the
///   last write wins.
/// - Every register call stamps the entry with a fresh sequence number, so a
///   re-registration also makes the entry the most recent one. Hit testing
///   uses this as its final tie-break.
/// - [`unregister`](Self::unregister) of an unknown id is a no-op. Components
///   may unmount before they ever registered.
/// - [`all`](Self::all) returns an owned snapshot, so callers can keep it
///   across later registry mutations.
///
/// The registry does not keep any spatial acceleration structure; a lookup
/// over all entries is O(n), which is what the per-move hit test needs.
pub struct GeometryRegistry<K, V> {
    entries: HashMap<K, Registered<V>>,
    next_sequence: u64,
    revision: u64,
}

impl<K, V> Default for GeometryRegistry<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_sequence: 0,
            revision: 0,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for GeometryRegistry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryRegistry")
            .field("len", &self.entries.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<K, V> GeometryRegistry<K, V>
where
    K: Clone + Eq + Hash,
    V: Region<K>,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `value.id()`.
    ///
    /// Returns the value previously registered under the same id, if any.
    pub fn register(&mut self, value: V) -> Option<V> {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.revision += 1;
        let id = value.id().clone();
        self.entries
            .insert(id, Registered { value, sequence })
            .map(|old| old.value)
    }

    /// Removes the entry for `id`.
    ///
    /// Unknown ids are ignored and return `None`.
    pub fn unregister(&mut self, id: &K) -> Option<V> {
        let removed = self.entries.remove(id)?;
        self.revision += 1;
        Some(removed.value)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.revision += 1;
    }

    /// Returns the value registered under `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&V> {
        self.entries.get(id).map(|e| &e.value)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the registration sequence number of `id`.
    #[must_use]
    pub fn sequence(&self, id: &K) -> Option<u64> {
        self.entries.get(id).map(|e| e.sequence)
    }

    /// Iterates over registered values with their sequence numbers.
    ///
    /// Iteration order is unspecified; use [`Registered::sequence`] for
    /// recency.
    pub fn entries(&self) -> impl Iterator<Item = &Registered<V>> + '_ {
        self.entries.values()
    }

    /// Iterates over registered values in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values().map(|e| &e.value)
    }
}

impl<K, V> GeometryRegistry<K, V> {
    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped by every mutation that changed the registry.
    ///
    /// Unregistering an unknown id or clearing an empty registry leaves it
    /// unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K, V: Clone> GeometryRegistry<K, V> {
    /// Returns an owned snapshot of every registered value, oldest
    /// registration first.
    #[must_use]
    pub fn all(&self) -> Vec<V> {
        let mut entries: Vec<&Registered<V>> = self.entries.values().collect();
        entries.sort_unstable_by_key(|e| e.sequence);
        entries.into_iter().map(|e| e.value.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{DropTargetInfo, SortableItemInfo};
    use kurbo::Rect;

    fn target(id: u32, rect: Rect) -> DropTargetInfo<u32, ()> {
        DropTargetInfo::new(id, "zone", (), rect)
    }

    #[test]
    fn register_inserts_and_replaces() {
        let mut reg = GeometryRegistry::new();
        assert!(reg.register(target(1, Rect::new(0., 0., 10., 10.))).is_none());
        let old = reg.register(target(1, Rect::new(5., 5., 20., 20.)));

        assert_eq!(old.map(|o| o.rect), Some(Rect::new(0., 0., 10., 10.)));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(&1).map(|t| t.rect), Some(Rect::new(5., 5., 20., 20.)));
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let mut reg: GeometryRegistry<u32, DropTargetInfo<u32, ()>> = GeometryRegistry::new();
        assert!(reg.unregister(&7).is_none());
        assert_eq!(reg.revision(), 0);
        assert!(reg.is_empty());
    }

    #[test]
    fn reregistration_refreshes_sequence() {
        let mut reg = GeometryRegistry::new();
        reg.register(target(1, Rect::ZERO));
        reg.register(target(2, Rect::ZERO));
        assert!(reg.sequence(&2) > reg.sequence(&1));

        reg.register(target(1, Rect::ZERO));
        assert!(reg.sequence(&1) > reg.sequence(&2));
    }

    #[test]
    fn all_is_ordered_by_registration() {
        let mut reg = GeometryRegistry::new();
        for id in [3, 1, 2] {
            reg.register(target(id, Rect::ZERO));
        }
        reg.register(target(3, Rect::ZERO));

        let ids: Vec<u32> = reg.all().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut reg = GeometryRegistry::new();
        reg.register(SortableItemInfo::new(1_u32, 0, 0, Rect::ZERO));
        let snapshot = reg.all();
        reg.unregister(&1);

        assert_eq!(snapshot.len(), 1);
        assert!(reg.is_empty());
    }

    #[test]
    fn clear_bumps_revision_only_when_non_empty() {
        let mut reg = GeometryRegistry::new();
        reg.clear();
        assert_eq!(reg.revision(), 0);

        reg.register(target(1, Rect::ZERO));
        reg.clear();
        assert_eq!(reg.revision(), 2);
        assert!(!reg.contains(&1));
    }
}
