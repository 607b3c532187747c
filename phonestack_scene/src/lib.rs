// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phonestack Scene: a headless element tree for interactive components.
//!
//! The scene stands in for the part of a document object model that an
//! interactive component needs without a browser:
//!
//! - A hierarchy of elements with local bounds, transforms, z-order, and flags.
//! - String classes and attributes, so state can be mirrored as markup (for
//!   example presentation markers and ARIA attributes).
//! - A paint style per element for debug visualization.
//! - Point hit testing in paint order and a keyboard focus order.
//!
//! ## Not a renderer or layout engine
//!
//! Nothing here draws or measures. Upstream code supplies bounds and
//! transforms; a renderer, if any, reads styles and geometry back out.
//!
//! ## Paint order
//!
//! Elements paint by ascending z-index, then by document (pre-order) order.
//! [`Scene::hit_test_point`] returns the element painted last under the point,
//! so an element appended as the last child of a container is on top of its
//! earlier siblings unless they carry a higher z-index.
//!
//! ## API overview
//!
//! - [`Scene`]: container managing elements.
//! - [`LocalElement`]: per-element local data (bounds, transform, z, flags).
//! - [`ElementFlags`]: visibility, picking, and focus controls.
//! - [`ElementId`]: generational handle of an element.
//! - [`QueryFilter`]: restricts hit results (visible/pickable).
//! - [`ElementStyle`], [`Rgba`], [`Border`]: paint-facing style.
//!
//! ### Minimal usage
//!
//! ```
//! use phonestack_scene::{LocalElement, QueryFilter, Scene};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = Scene::new();
//! let page = scene.insert(
//!     None,
//!     LocalElement { local_bounds: Rect::new(0.0, 0.0, 400.0, 300.0), ..Default::default() },
//! );
//! let card = scene.insert(
//!     Some(page),
//!     LocalElement { local_bounds: Rect::new(20.0, 20.0, 120.0, 220.0), ..Default::default() },
//! );
//! let overlay = scene.insert(
//!     Some(page),
//!     LocalElement { local_bounds: Rect::new(20.0, 20.0, 70.0, 220.0), ..Default::default() },
//! );
//! scene.add_class(card, "phone");
//!
//! // The overlay was appended last, so it wins where the two overlap.
//! let hit = scene.hit_test_point(Point::new(30.0, 30.0), QueryFilter::POINTER).unwrap();
//! assert_eq!(hit.element, overlay);
//! assert_eq!(hit.path, vec![page, overlay]);
//!
//! // Outside the overlay, the card underneath is reachable.
//! let hit = scene.hit_test_point(Point::new(100.0, 30.0), QueryFilter::POINTER).unwrap();
//! assert_eq!(hit.element, card);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod types;
mod util;

pub use scene::{Hit, QueryFilter, Scene};
pub use types::{Border, ElementFlags, ElementId, ElementStyle, LocalElement, Rgba};
