// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phonestack: a headless stacked-card component.
//!
//! A container holds overlapping cards (`.phone` elements tagged
//! `data-phone="1"`, `"2"`, `"3"`). [`PhoneStack`] appends one transparent,
//! focusable overlay per card so every card stays reachable however it is
//! stacked, and tracks which card, if any, is brought to the front.
//!
//! ## Pieces
//!
//! - [`Document`]: a [`Scene`] plus listeners, focus, hover, and input dispatch.
//!   Pointer input is hit-tested; keys go to the focused element.
//! - [`PhoneStack`]: the component. Clicks, taps, and Enter/Space on an overlay
//!   toggle its card; a click outside the container clears the selection.
//! - [`Notification`]: emitted to subscribers after each selection change.
//! - [`bootstrap`]: one component per `.phone-stack` container, collected in a
//!   [`Registry`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use phonestack::{bootstrap, Config, Document, LocalElement, PhoneId};
//!
//! let mut doc = Document::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let root = doc.root();
//! let container = doc.scene_mut().insert(
//!     Some(root),
//!     LocalElement { local_bounds: Rect::new(0.0, 0.0, 400.0, 600.0), ..Default::default() },
//! );
//! doc.scene_mut().add_class(container, "phone-stack");
//! for token in ["1", "2", "3"] {
//!     let card = doc.scene_mut().insert(Some(container), LocalElement::default());
//!     doc.scene_mut().add_class(card, "phone");
//!     doc.scene_mut().set_attribute(card, "data-phone", token);
//! }
//!
//! let registry = bootstrap(&mut doc, &Config::default());
//! let stack = registry.iter().next().unwrap().clone();
//!
//! // The default layout puts overlay 2 at x = 110..220.
//! doc.click(Point::new(150.0, 300.0));
//! assert_eq!(stack.active(), Some(PhoneId::Two));
//!
//! // Outside the container.
//! doc.click(Point::new(700.0, 300.0));
//! assert_eq!(stack.active(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bootstrap;
mod config;
mod controller;
mod document;
mod error;
mod events;
mod input;
pub mod markup;
mod overlay;
mod phone;
mod stack;

pub use bootstrap::{Registry, bootstrap};
pub use config::{Config, OverlayLayout};
pub use document::{Document, EventCx, ListenPhase, ListenerId, TapResult};
pub use error::{InitError, ParsePhoneIdError};
pub use events::{Notification, NotificationKind, StackId, Subscription};
pub use input::{EventKind, InputEvent, Key};
pub use overlay::{DEBUG_BORDER, DEBUG_FILL, Overlay};
pub use phone::PhoneId;
pub use stack::PhoneStack;

pub use phonestack_responder::dispatcher::DispatchResult;
pub use phonestack_responder::types::{Outcome, Phase};
pub use phonestack_scene::{ElementFlags, ElementId, ElementStyle, LocalElement, Scene};
