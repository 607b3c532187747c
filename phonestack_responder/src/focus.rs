// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus state.
//!
//! [`FocusState`] remembers the focused node and computes sequential
//! navigation over a caller-supplied focus order (for example
//! `Scene::focus_order` from `phonestack_scene`). Navigation wraps at both ends.
//!
//! ```
//! use phonestack_responder::focus::FocusState;
//! let order = [10_u32, 20, 30];
//! let mut focus = FocusState::new();
//! focus.set(focus.next_in(&order));
//! assert_eq!(focus.focused(), Some(10));
//! focus.set(focus.previous_in(&order));
//! assert_eq!(focus.focused(), Some(30));
//! ```

/// A focus change reported by [`FocusState::set`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusChange<K> {
    /// Node that lost focus.
    pub lost: Option<K>,
    /// Node that gained focus.
    pub gained: Option<K>,
}

/// The focused node, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusState<K: Copy + Eq> {
    focused: Option<K>,
}

impl<K: Copy + Eq> Default for FocusState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> FocusState<K> {
    /// Create a state with nothing focused.
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// The focused node.
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// Move focus. Returns `None` when focus did not change.
    pub fn set(&mut self, node: Option<K>) -> Option<FocusChange<K>> {
        if self.focused == node {
            return None;
        }
        let lost = core::mem::replace(&mut self.focused, node);
        Some(FocusChange { lost, gained: node })
    }

    /// The node after the focused one in `order`, wrapping; the first node when
    /// nothing in `order` is focused.
    pub fn next_in(&self, order: &[K]) -> Option<K> {
        match self.position_in(order) {
            Some(i) => order.get((i + 1) % order.len()).copied(),
            None => order.first().copied(),
        }
    }

    /// The node before the focused one in `order`, wrapping; the last node when
    /// nothing in `order` is focused.
    pub fn previous_in(&self, order: &[K]) -> Option<K> {
        match self.position_in(order) {
            Some(0) | None => order.last().copied(),
            Some(i) => order.get(i - 1).copied(),
        }
    }

    fn position_in(&self, order: &[K]) -> Option<usize> {
        let f = self.focused?;
        order.iter().position(|k| *k == f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes_once() {
        let mut focus = FocusState::new();
        assert_eq!(
            focus.set(Some(1_u32)),
            Some(FocusChange {
                lost: None,
                gained: Some(1)
            })
        );
        assert_eq!(focus.set(Some(1)), None);
        assert_eq!(
            focus.set(None),
            Some(FocusChange {
                lost: Some(1),
                gained: None
            })
        );
    }

    #[test]
    fn next_wraps_around() {
        let order = [1_u32, 2, 3];
        let mut focus = FocusState::new();
        let mut seen = [0_u32; 4];
        for slot in &mut seen {
            focus.set(focus.next_in(&order));
            *slot = focus.focused().unwrap();
        }
        assert_eq!(seen, [1, 2, 3, 1]);
    }

    #[test]
    fn stale_focus_restarts_navigation() {
        let mut focus = FocusState::new();
        focus.set(Some(99_u32));
        assert_eq!(focus.next_in(&[1, 2]), Some(1));
        assert_eq!(focus.previous_in(&[1, 2]), Some(2));
        assert_eq!(focus.next_in(&[]), None);
    }
}
