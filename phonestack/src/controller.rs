// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection state machine and its reflection onto markup.
//!
//! [`Controller`] is pure: it only tracks `Idle` versus `Active(item)`.
//! [`reflect`] writes a selection onto the container and overlays.

use phonestack_scene::{ElementId, Scene};

use crate::markup::{active_marker, is_active_marker};
use crate::overlay::OverlayManager;
use crate::phone::PhoneId;

/// A selection change. `from == to` means nothing changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) from: Option<PhoneId>,
    pub(crate) to: Option<PhoneId>,
}

impl Transition {
    pub(crate) fn changed(self) -> bool {
        self.from != self.to
    }
}

/// At most one active item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Controller {
    active: Option<PhoneId>,
}

impl Controller {
    pub(crate) fn active(&self) -> Option<PhoneId> {
        self.active
    }

    fn go(&mut self, to: Option<PhoneId>) -> Transition {
        let from = core::mem::replace(&mut self.active, to);
        Transition { from, to }
    }

    /// Activating the active item deactivates it; any other item replaces it.
    pub(crate) fn activate(&mut self, item: PhoneId) -> Transition {
        let to = if self.active == Some(item) {
            None
        } else {
            Some(item)
        };
        self.go(to)
    }

    /// A transition that keeps the current selection.
    pub(crate) fn hold(&self) -> Transition {
        Transition {
            from: self.active,
            to: self.active,
        }
    }

    pub(crate) fn dismiss(&mut self) -> Transition {
        self.go(None)
    }

    /// Advance to the item after the active one in `items`, wrapping; from
    /// idle, or when the active item is not in `items`, start at the first.
    pub(crate) fn cycle_next(&mut self, items: &[PhoneId]) -> Transition {
        let Some(first) = items.first().copied() else {
            return self.hold();
        };
        let next = self
            .active
            .and_then(|a| items.iter().position(|i| *i == a))
            .map_or(first, |pos| items[(pos + 1) % items.len()]);
        self.go(Some(next))
    }
}

/// Write `active` onto `container`'s marker classes and every overlay's ARIA state.
pub(crate) fn reflect(
    scene: &mut Scene,
    container: ElementId,
    overlays: &OverlayManager,
    active: Option<PhoneId>,
) {
    scene.remove_classes_where(container, is_active_marker);
    if let Some(item) = active {
        scene.add_class(container, &active_marker(item));
    }
    overlays.sync_aria(scene, active);
}
