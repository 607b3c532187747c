// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Orders hits, reconstructs paths, and emits dispatch steps.
//! Produces a capture → target → bubble sequence for the selected target.
//!
//! ## Target Selection
//!
//! - Ranks candidates by [`ResolvedHit::z_index`]; higher is nearer.
//! - Equal z-index ties are stable and the last candidate wins, so hits fed in
//!   paint order resolve to the element painted on top.
//!
//! ## Focus routing
//!
//! [`Router::dispatch_for`] routes to a known node (for example the focused
//! element for keyboard input) without any hit testing.
//!
//! ## Sequence shape
//!
//! For a path `[root, .., parent, target]` the router emits capture steps for
//! every ancestor (root first), one target step, then bubble steps for every
//! ancestor (parent first). The target itself appears only once.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::types::{Dispatch, NoParent, ParentLookup, Phase, ResolvedHit};

/// Deterministic responder chain router.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when callers always provide a full path in
///   [`ResolvedHit`], or with [`Router::with_parent`] to enable path
///   reconstruction via a [`ParentLookup`].
/// - Call [`Router::handle_with_hits`] for pointer input and
///   [`Router::dispatch_for`] for focus-routed input.
pub struct Router<K, P: ParentLookup<K> = NoParent> {
    parent: P,
    _key: PhantomData<fn() -> K>,
}

impl<K, P: ParentLookup<K>> core::fmt::Debug for Router<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router").finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Router<K, P> {
    /// Create a router with a default parent lookup.
    pub fn new() -> Self {
        Self::with_parent(P::default())
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Default for Router<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Router<K, P> {
    /// Create a router with an explicit parent lookup provider.
    pub fn with_parent(parent: P) -> Self {
        Self {
            parent,
            _key: PhantomData,
        }
    }

    /// Handle a pre-resolved sequence of hits and produce a propagation sequence.
    ///
    /// Returns an empty sequence when `hits` is empty.
    pub fn handle_with_hits<M: Clone>(&self, hits: &[ResolvedHit<K, M>]) -> Vec<Dispatch<K, M>> {
        // `>=` keeps the last of equal-z candidates.
        let best = hits.iter().reduce(|b, h| if h.z_index >= b.z_index { h } else { b });
        let Some(best) = best else {
            return Vec::new();
        };

        let path = match &best.path {
            Some(p) if !p.is_empty() => p.clone(),
            _ => self.reconstruct_path(best.node),
        };
        Self::emit_path(&path, Some(best.meta.clone()))
    }

    /// Produce a propagation sequence for a known target, such as the focused node.
    pub fn dispatch_for(&self, target: K) -> Vec<Dispatch<K, ()>> {
        let path = self.reconstruct_path(target);
        Self::emit_path(&path, None)
    }

    fn reconstruct_path(&self, target: K) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = target;
        // Collect to root; caller ensures acyclic ancestry.
        loop {
            out.push(cur);
            match self.parent.parent_of(&cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    fn emit_path<M: Clone>(path: &[K], meta: Option<M>) -> Vec<Dispatch<K, M>> {
        let Some((&target, ancestors)) = path.split_last() else {
            return Vec::new();
        };
        let step = |phase: Phase, node: K| Dispatch {
            phase,
            node,
            target,
            meta: meta.clone(),
        };
        let mut out = Vec::with_capacity(ancestors.len() * 2 + 1);
        // Capture: root→parent
        out.extend(ancestors.iter().map(|&n| step(Phase::Capture, n)));
        out.push(step(Phase::Target, target));
        // Bubble: parent→root
        out.extend(ancestors.iter().rev().map(|&n| step(Phase::Bubble, n)));
        out
    }
}
