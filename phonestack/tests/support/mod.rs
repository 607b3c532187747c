// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use phonestack::{
    Document, ElementId, LocalElement, Notification, NotificationKind, PhoneId, PhoneStack,
};

/// Viewport of every fixture document.
pub const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);
/// Local bounds of the fixture container, placed at the document origin.
pub const CONTAINER: Rect = Rect::new(0.0, 0.0, 400.0, 600.0);
/// A point in the document but outside the container.
pub const OUTSIDE: Point = Point::new(700.0, 300.0);

/// A document with one container holding a card per `tokens` entry.
///
/// Cards cover the whole container and stack in the order given.
pub fn document_with_cards(tokens: &[&str]) -> (Document, ElementId) {
    let mut doc = Document::new(VIEWPORT);
    let root = doc.root();
    let scene = doc.scene_mut();
    let container = scene.insert(
        Some(root),
        LocalElement {
            local_bounds: CONTAINER,
            ..Default::default()
        },
    );
    scene.add_class(container, "phone-stack");
    for (z, token) in (1..).zip(tokens) {
        let card = scene.insert(
            Some(container),
            LocalElement {
                local_bounds: CONTAINER,
                z_index: z,
                ..Default::default()
            },
        );
        scene.add_class(card, "phone");
        scene.set_attribute(card, "data-phone", token);
    }
    (doc, container)
}

/// A document with all three cards.
pub fn three_cards() -> (Document, ElementId) {
    document_with_cards(&["1", "2", "3"])
}

/// Middle of `item`'s overlay under the default layout.
pub fn overlay_point(item: PhoneId) -> Point {
    let x = match item {
        PhoneId::One => 55.0,
        PhoneId::Two => 165.0,
        PhoneId::Three => 310.0,
    };
    Point::new(x, 300.0)
}

/// Record every notification `stack` emits.
pub fn record(stack: &PhoneStack) -> Rc<RefCell<Vec<Notification>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in [NotificationKind::Activated, NotificationKind::Deactivated] {
        let log = log.clone();
        stack.subscribe(kind, move |n| log.borrow_mut().push(*n));
    }
    log
}

/// Active marker classes currently on `container`.
pub fn active_markers(doc: &Document, container: ElementId) -> Vec<String> {
    doc.scene()
        .classes(container)
        .filter(|c| c.ends_with("-active"))
        .map(str::to_owned)
        .collect()
}

/// `aria-pressed` of `item`'s overlay.
pub fn pressed(doc: &Document, stack: &PhoneStack, item: PhoneId) -> Option<String> {
    let overlay = stack.overlay_for(item)?;
    doc.scene()
        .attribute(overlay, "aria-pressed")
        .map(str::to_owned)
}
