// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: phases, outcomes, hits, lookups, and dispatch.
//!
//! These types describe the routing protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and the
//! [`dispatcher`](crate::dispatcher).

use alloc::vec::Vec;

/// Phases of event propagation.
///
/// Appears on each [`Dispatch`] item produced by the [router](crate::router::Router).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Root-to-parent traversal, before the target.
    Capture,
    /// Target node.
    Target,
    /// Parent-to-root traversal, after the target.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Ordered by strength, so the strongest outcome of several handlers on the
/// same node can be taken with `max`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Outcome {
    /// Keep propagating.
    Continue,
    /// Stop propagation; nodes after this one are not visited.
    Stop,
    /// Stop propagation and prevent the event's default action.
    StopAndConsume,
}

/// A resolved hit to be routed.
///
/// Typically obtained from a scene hit test; see
/// [`adapters::scene`](crate::adapters) when the `scene_adapter` feature is on.
#[derive(Clone, Debug)]
pub struct ResolvedHit<K, M = ()> {
    /// Node key associated with the hit.
    pub node: K,
    /// Optional root→target path; if absent, the router may consult [`ParentLookup`]
    /// to derive one.
    pub path: Option<Vec<K>>,
    /// Paint order of the node; higher is nearer to the user.
    pub z_index: i32,
    /// Optional metadata carried alongside the hit.
    pub meta: M,
}

/// Look up the parent of a node to reconstruct a root→target path for propagation.
///
/// The [router](crate::router::Router) consults this when a [`ResolvedHit::path`] is absent
/// and when routing to a focused node.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

impl<K, P: ParentLookup<K> + ?Sized> ParentLookup<K> for &P {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// A no‑op parent provider used when callers always supply full paths.
///
/// All calls to [`ParentLookup::parent_of`] return `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A single dispatch item.
#[derive(Clone, Debug)]
pub struct Dispatch<K, M = ()> {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Node whose handlers run at this step.
    pub node: K,
    /// The event target; the same for every step of one sequence.
    pub target: K,
    /// Optional metadata (cloned from the winning hit).
    pub meta: Option<M>,
}
