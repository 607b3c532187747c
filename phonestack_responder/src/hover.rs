// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions from path changes.
//!
//! Route a pointer move, take the root→target path with [`path_from_dispatch`],
//! and feed it to [`HoverState::update_path`].
//!
//! ```
//! use phonestack_responder::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update_path(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update_path(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! assert_eq!(h.target(), Some(3));
//! ```

use alloc::vec::Vec;

use crate::types::{Dispatch, Phase};

/// Tracks the hovered root→target path.
///
/// Leave events are emitted inner-most first, enter events outer-most first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer entered the node.
    Enter(K),
    /// Pointer left the node.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The current root→target path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// The inner-most hovered node, if any.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Forget the hovered path, returning leave events inner→outer.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Replace the hovered path and return the minimal set of transitions.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        // Length of the shared ancestry.
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<HoverEvent<K>> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(new_path[shared..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}

/// Extract the root→target path from a router dispatch sequence.
///
/// Expects the router's shape: capture steps for the ancestors followed by
/// the target step.
pub fn path_from_dispatch<K: Copy, M>(seq: &[Dispatch<K, M>]) -> Vec<K> {
    let mut path = Vec::new();
    for d in seq {
        match d.phase {
            Phase::Capture => path.push(d.node),
            Phase::Target => {
                path.push(d.node);
                break;
            }
            Phase::Bubble => break,
        }
    }
    path
}
