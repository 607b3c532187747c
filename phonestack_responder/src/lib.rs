// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phonestack Responder: a deterministic, `no_std` router for UI events.
//!
//! ## Overview
//!
//! This crate turns a resolved target into the capture → target → bubble
//! sequence an event system walks. It does not perform hit testing.
//! Feed it [`ResolvedHit`](crate::types::ResolvedHit) items (for example from
//! `phonestack_scene` through the `scene_adapter` feature) or a known target
//! such as the focused element.
//!
//! ## Modules
//!
//! - [`router`]: picks the winning hit (highest z-index, last on ties) and
//!   emits the propagation sequence; [`Router::dispatch_for`](router::Router::dispatch_for)
//!   routes focus-targeted input.
//! - [`dispatcher`]: walks a sequence and honors
//!   [`Outcome::Stop`](types::Outcome::Stop) and
//!   [`Outcome::StopAndConsume`](types::Outcome::StopAndConsume).
//! - [`hover`]: enter/leave transitions between successive hover paths.
//! - [`focus`]: focused node plus wrap-around sequential navigation.
//! - [`adapters`]: integration with other Phonestack crates.
//!
//! ## Layering
//!
//! Handlers are not stored here. A host (for example the `Document` in the
//! `phonestack` crate) owns listener tables and calls [`dispatcher::run`]
//! with a closure that invokes them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatcher;
pub mod focus;
pub mod hover;
pub mod router;
pub mod types;
