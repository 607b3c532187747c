// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A three-card stack driven by clicks, a tap, the keyboard, and an outside click.
//!
//! Run:
//! - `cargo run -p phonestack_demos --example phone_stack_basics`

use kurbo::{Point, Rect};
use phonestack::{
    Config, Document, Key, LocalElement, Notification, NotificationKind, PhoneId, PhoneStack,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut doc = Document::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let root = doc.root();
    let container = doc.scene_mut().insert(
        Some(root),
        LocalElement {
            local_bounds: Rect::new(0.0, 0.0, 400.0, 600.0),
            local_transform: kurbo::Affine::translate((100.0, 0.0)),
            ..Default::default()
        },
    );
    for (z, token) in (1..).zip(["1", "2", "3"]) {
        let card = doc.scene_mut().insert(
            Some(container),
            LocalElement {
                local_bounds: Rect::new(0.0, 0.0, 400.0, 600.0),
                z_index: z,
                ..Default::default()
            },
        );
        doc.scene_mut().add_class(card, "phone");
        doc.scene_mut().set_attribute(card, "data-phone", token);
    }

    let stack = PhoneStack::new(&mut doc, container, Config::default());
    for kind in [NotificationKind::Activated, NotificationKind::Deactivated] {
        stack.subscribe(kind, |n| match n {
            Notification::Activated { item, .. } => println!("  -> phone {item} to front"),
            Notification::Deactivated { .. } => println!("  -> back to idle"),
        });
    }

    // The container sits at x = 100, so overlay 2 (local 110..220) is at 210..320.
    println!("click phone 2");
    doc.click(Point::new(250.0, 300.0));

    println!("tap phone 3");
    let tap = doc.tap(Point::new(400.0, 300.0));
    println!("  compatibility click delivered: {}", tap.click.is_some());

    println!("tab to phone 1 and press Enter");
    doc.focus(None);
    doc.key(Key::Tab);
    doc.key(Key::Enter);

    println!("click outside");
    doc.click(Point::new(50.0, 300.0));

    println!("cycle twice");
    stack.cycle_to_next(&mut doc);
    stack.cycle_to_next(&mut doc);
    assert_eq!(stack.active(), Some(PhoneId::Two));

    let classes: Vec<_> = doc.scene().classes(container).collect();
    println!("container classes: {classes:?}");
    for overlay in stack.overlays() {
        println!(
            "overlay {}: aria-pressed={:?}",
            overlay.item,
            doc.scene().attribute(overlay.element, "aria-pressed")
        );
    }

    stack.destroy(&mut doc);
    println!("listeners after destroy: {}", doc.listener_count());
}
