// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context configuration.

use dragline_hit::TieBreak;

/// Behavior switches for a [`DragDropContext`](crate::DragDropContext).
///
/// ```
/// use dragline::DragConfig;
/// use dragline_hit::TieBreak;
///
/// let config = DragConfig::default()
///     .with_tie_break(TieBreak::MostRecent)
///     .no_escape_cancel();
/// assert!(!config.cancel_on_escape);
/// assert!(config.primary_button_only);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// Whether Escape cancels an active drag (default: `true`).
    pub cancel_on_escape: bool,
    /// Whether mouse drags start only with the primary button (default: `true`).
    pub primary_button_only: bool,
    /// Whether a drop target must have the dragged item's kind to be hit
    /// (default: `false`).
    pub match_kinds: bool,
    /// How overlapping drop targets are ranked (default: smallest area).
    pub tie_break: TieBreak,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            cancel_on_escape: true,
            primary_button_only: true,
            match_kinds: false,
            tie_break: TieBreak::SmallestArea,
        }
    }
}

impl DragConfig {
    /// Sets the overlap tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Escape no longer cancels drags.
    #[must_use]
    pub fn no_escape_cancel(mut self) -> Self {
        self.cancel_on_escape = false;
        self
    }

    /// Any mouse button may start a drag.
    #[must_use]
    pub fn any_button(mut self) -> Self {
        self.primary_button_only = false;
        self
    }

    /// Only drop targets whose kind equals the dragged item's kind are hit.
    #[must_use]
    pub fn match_kinds(mut self) -> Self {
        self.match_kinds = true;
        self
    }
}
