// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a dispatch sequence and honor stop/consume outcomes.
//!
//! ## Rules
//!
//! - Steps are visited in order.
//! - [`Outcome::Stop`] ends the walk after the current step.
//! - [`Outcome::StopAndConsume`] ends the walk and marks the default action prevented.
//!
//! ```
//! use phonestack_responder::dispatcher;
//! use phonestack_responder::router::Router;
//! use phonestack_responder::types::{Outcome, Phase, ResolvedHit};
//!
//! let router: Router<u32> = Router::new();
//! let hits = [ResolvedHit { node: 3, path: Some(vec![1, 2, 3]), z_index: 0, meta: () }];
//! let seq = router.handle_with_hits(&hits);
//!
//! let mut visited = Vec::new();
//! let result = dispatcher::run(&seq, |d| {
//!     visited.push(d.node);
//!     if d.phase == Phase::Target { Outcome::StopAndConsume } else { Outcome::Continue }
//! });
//! assert_eq!(visited, vec![1, 2, 3]);
//! assert!(result.default_prevented);
//! assert_eq!(result.stopped_at, Some(2));
//! ```

use crate::types::{Dispatch, Outcome};

/// Result of walking a dispatch sequence.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DispatchResult {
    /// Index of the step that stopped propagation, if any.
    pub stopped_at: Option<usize>,
    /// True if a handler consumed the event.
    pub default_prevented: bool,
}

impl DispatchResult {
    /// True if propagation was stopped before the end of the sequence.
    pub fn propagation_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }
}

/// Deliver each step of `seq` to `handler` until it asks to stop.
pub fn run<K, M>(
    seq: &[Dispatch<K, M>],
    mut handler: impl FnMut(&Dispatch<K, M>) -> Outcome,
) -> DispatchResult {
    let mut result = DispatchResult::default();
    for (i, d) in seq.iter().enumerate() {
        match handler(d) {
            Outcome::Continue => {}
            Outcome::Stop => {
                result.stopped_at = Some(i);
                break;
            }
            Outcome::StopAndConsume => {
                result.stopped_at = Some(i);
                result.default_prevented = true;
                break;
            }
        }
    }
    result
}
