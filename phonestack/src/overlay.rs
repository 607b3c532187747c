// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transparent hit-target overlays above the stacked cards.
//!
//! Each card found in the container gets one overlay element appended as the
//! container's last child, stacked above every sibling so it wins hit testing.
//! Overlays are focusable buttons and carry the ARIA state of the selection.

use alloc::format;
use alloc::vec::Vec;

use phonestack_scene::{Border, ElementFlags, ElementId, ElementStyle, LocalElement, Rgba, Scene};

use crate::config::OverlayLayout;
use crate::markup::{DEBUG_CLASS, OVERLAY_CLASS, PHONE_ATTR};
use crate::phone::PhoneId;

/// Fill painted on overlays in debug mode.
pub const DEBUG_FILL: Rgba = Rgba::new(255, 0, 0, 51);
/// Border painted around overlays in debug mode.
pub const DEBUG_BORDER: Border = Border {
    width: 2.0,
    color: Rgba::new(255, 0, 0, 204),
};

/// One hit target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    /// The card this overlay brings to front.
    pub item: PhoneId,
    /// The overlay's element.
    pub element: ElementId,
}

#[derive(Clone, Debug)]
pub(crate) struct OverlayManager {
    container: ElementId,
    overlays: Vec<Overlay>,
    layout: OverlayLayout,
}

impl OverlayManager {
    /// Manager for `container` with no overlays yet.
    pub(crate) fn empty(container: ElementId, layout: OverlayLayout) -> Self {
        Self {
            container,
            overlays: Vec::new(),
            layout,
        }
    }

    /// Append one overlay per item in `items`, in order.
    pub(crate) fn create(
        scene: &mut Scene,
        container: ElementId,
        items: &[PhoneId],
        layout: OverlayLayout,
    ) -> Self {
        let mut this = Self::empty(container, layout);
        // Hit testing compares z across the whole tree, so outrank the
        // container, its ancestors, and everything inside it.
        let top = scene
            .path_to_root(container)
            .into_iter()
            .chain(scene.descendants(container))
            .filter_map(|e| scene.z_index(e))
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        let bounds = scene
            .local(container)
            .map(|l| l.local_bounds)
            .unwrap_or_default();
        for &item in items {
            let element = scene.insert(
                Some(container),
                LocalElement {
                    local_bounds: layout.rect_for(item, bounds),
                    z_index: top,
                    flags: ElementFlags::VISIBLE | ElementFlags::PICKABLE | ElementFlags::FOCUSABLE,
                    ..Default::default()
                },
            );
            scene.add_class(element, OVERLAY_CLASS);
            scene.set_attribute(element, PHONE_ATTR, item.as_str());
            scene.set_attribute(element, "role", "button");
            scene.set_attribute(element, "tabindex", "0");
            scene.set_attribute(element, "aria-label", &format!("Bring phone {item} to front"));
            this.overlays.push(Overlay { item, element });
        }
        this.sync_aria(scene, None);
        this
    }

    pub(crate) fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub(crate) fn element_for(&self, item: PhoneId) -> Option<ElementId> {
        self.overlays
            .iter()
            .find(|o| o.item == item)
            .map(|o| o.element)
    }

    pub(crate) fn item_for(&self, element: ElementId) -> Option<PhoneId> {
        self.overlays
            .iter()
            .find(|o| o.element == element)
            .map(|o| o.item)
    }

    pub(crate) fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    /// Replace the layout and move every overlay to match it.
    pub(crate) fn set_layout(&mut self, scene: &mut Scene, layout: OverlayLayout) {
        self.layout = layout;
        let bounds = scene
            .local(self.container)
            .map(|l| l.local_bounds)
            .unwrap_or_default();
        for o in &self.overlays {
            scene.set_local_bounds(o.element, layout.rect_for(o.item, bounds));
        }
    }

    /// Paint overlays for debugging, or restore full transparency.
    pub(crate) fn set_debug(&self, scene: &mut Scene, on: bool) {
        let style = if on {
            ElementStyle {
                fill: Some(DEBUG_FILL),
                border: Some(DEBUG_BORDER),
            }
        } else {
            ElementStyle::default()
        };
        for o in &self.overlays {
            scene.set_style(o.element, style.clone());
        }
        if on {
            scene.add_class(self.container, DEBUG_CLASS);
        } else {
            scene.remove_class(self.container, DEBUG_CLASS);
        }
    }

    /// Set `aria-pressed` and `aria-expanded` on every overlay to whether its item is `active`.
    pub(crate) fn sync_aria(&self, scene: &mut Scene, active: Option<PhoneId>) {
        for o in &self.overlays {
            let state = if Some(o.item) == active { "true" } else { "false" };
            scene.set_attribute(o.element, "aria-pressed", state);
            scene.set_attribute(o.element, "aria-expanded", state);
        }
    }

    /// Remove every overlay element and the debug class.
    pub(crate) fn remove_all(&mut self, scene: &mut Scene) {
        for o in self.overlays.drain(..) {
            scene.remove(o.element);
        }
        scene.remove_class(self.container, DEBUG_CLASS);
    }
}
