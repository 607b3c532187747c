// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: element identifiers, flags, local geometry, and styles.

use kurbo::{Affine, Rect};

/// Identifier for an element in the scene.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the element is removed.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct
///   `ElementId`.
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether an `ElementId` still refers
/// to a live element. Stale ids never alias a different live element because the generation
/// must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility, picking, and keyboard focus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible. An element hidden here hides its whole subtree.
        const VISIBLE   = 0b0000_0001;
        /// Element is pickable (participates in hit testing).
        const PICKABLE  = 0b0000_0010;
        /// Element can hold keyboard focus.
        const FOCUSABLE = 0b0000_0100;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Local geometry for an element.
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// Local (untransformed) bounds, in the parent's coordinate space once
    /// `local_transform` is applied.
    pub local_bounds: Rect,
    /// Local transform relative to parent space.
    pub local_transform: Affine,
    /// Paint order. Higher is drawn on top; equal values fall back to document order.
    pub z_index: i32,
    /// Visibility, picking, and focus flags.
    pub flags: ElementFlags,
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            local_transform: Affine::IDENTITY,
            z_index: 0,
            flags: ElementFlags::default(),
        }
    }
}

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `0` is fully transparent.
    pub a: u8,
}

impl Rgba {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
}

/// A solid border drawn around an element's bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke width in local units.
    pub width: f64,
    /// Stroke color.
    pub color: Rgba,
}

/// Paint-facing style of an element.
///
/// The scene never draws anything; this is carried for whatever renderer
/// consumes the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Background fill, if any.
    pub fill: Option<Rgba>,
    /// Border, if any.
    pub border: Option<Border>,
}

impl ElementStyle {
    /// Returns true if nothing about this style would paint a pixel.
    pub fn is_transparent(&self) -> bool {
        let fill_clear = self.fill.is_none_or(|c| c.a == 0);
        let border_clear = self.border.is_none_or(|b| b.color.a == 0 || b.width <= 0.0);
        fill_clear && border_clear
    }
}
