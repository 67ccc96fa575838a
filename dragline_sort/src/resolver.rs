// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-session tracking of the hovered sortable index.

/// One live reorder step within a sortable collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortMove<K> {
    /// Collection being reordered.
    pub collection: K,
    /// Id of the dragged item.
    pub item: K,
    /// Current index of the dragged item.
    pub from: usize,
    /// Index the dragged item moves to.
    pub to: usize,
}

/// Turns a stream of hovered indices into reorder steps.
///
/// During a sortable drag the pointer position is hit-tested against the
/// collection's items on every move. Most moves stay over the same item;
/// [`track`](Self::track) only yields a [`SortMove`] when the hovered index
/// changes and differs from the dragged item's own index.
///
/// Owners are expected to lay out items positionally: after a reorder the
/// dragged item occupies the slot the pointer is over, so the next move
/// sees `hovered == dragged` and the preview settles.
///
/// ```
/// use dragline_sort::{SortMove, SortResolver};
///
/// let mut resolver = SortResolver::new();
/// // Pointer moves from the dragged item (index 0) onto index 2.
/// assert_eq!(resolver.track("list", "a", 0, Some(0)), None);
/// let step = resolver.track("list", "a", 0, Some(2)).unwrap();
/// assert_eq!((step.from, step.to), (0, 2));
/// // After the owner applied the move, the dragged item sits at 2.
/// assert_eq!(resolver.track("list", "a", 2, Some(2)), None);
/// ```
#[derive(Clone, Debug)]
pub struct SortResolver<K> {
    last: Option<(K, usize)>,
}

impl<K> Default for SortResolver<K> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: Clone + PartialEq> SortResolver<K> {
    /// Creates a resolver with no hovered index.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Feeds the hovered index for one pointer move.
    ///
    /// `dragged` is the dragged item's current index in `collection`;
    /// `hovered` is the index of the collection item under the pointer, or
    /// `None` when the pointer is over no item of the collection.
    pub fn track(
        &mut self,
        collection: K,
        item: K,
        dragged: usize,
        hovered: Option<usize>,
    ) -> Option<SortMove<K>> {
        let Some(hovered) = hovered else {
            self.last = None;
            return None;
        };
        let unchanged = self
            .last
            .as_ref()
            .is_some_and(|(c, i)| *c == collection && *i == hovered);
        if unchanged {
            return None;
        }
        self.last = Some((collection.clone(), hovered));
        if hovered == dragged {
            return None;
        }
        Some(SortMove {
            collection,
            item,
            from: dragged,
            to: hovered,
        })
    }

    /// The last hovered `(collection, index)`, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&(K, usize)> {
        self.last.as_ref()
    }

    /// Forgets the hovered index; call between sessions.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
