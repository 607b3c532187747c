// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component configuration.

use kurbo::Rect;

use crate::phone::PhoneId;

/// Behavior toggles and overlay layout for a [`PhoneStack`](crate::PhoneStack).
///
/// Build with struct-update syntax over [`Config::default`]; after
/// construction, change fields through the component's setters.
///
/// ```
/// use phonestack::Config;
/// let config = Config { debug: true, ..Default::default() };
/// assert!(config.outside_click_dismiss);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Paint overlays with a translucent fill and a border.
    pub debug: bool,
    /// Deactivate on a click outside the component root.
    pub outside_click_dismiss: bool,
    /// Mark the container while the pointer is over an overlay.
    pub hover_feedback: bool,
    /// Overlay geometry.
    pub layout: OverlayLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            outside_click_dismiss: true,
            hover_feedback: true,
            layout: OverlayLayout::default(),
        }
    }
}

/// Horizontal placement of the overlays, indexed by [`PhoneId::index`].
///
/// Values are in the container's local units, measured from its left edge.
/// Every overlay spans the container's full height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Left edge of each overlay.
    pub offsets: [f64; PhoneId::COUNT],
    /// Visible width of each overlay.
    pub widths: [f64; PhoneId::COUNT],
}

impl Default for OverlayLayout {
    fn default() -> Self {
        // The back two cards show a 110-wide strip; the front card shows in full.
        Self {
            offsets: [0.0, 110.0, 220.0],
            widths: [110.0, 110.0, 180.0],
        }
    }
}

impl OverlayLayout {
    /// Overlay rectangle for `phone` inside a container with local bounds `container`.
    ///
    /// Negative widths collapse to zero.
    pub fn rect_for(&self, phone: PhoneId, container: Rect) -> Rect {
        let i = phone.index();
        let x0 = container.x0 + self.offsets[i];
        Rect::new(x0, container.y0, x0 + self.widths[i].max(0.0), container.y1)
    }
}
