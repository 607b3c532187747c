// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bootstrap every `.phone-stack` in a document and inspect overlay geometry
//! with debug painting on.
//!
//! Run:
//! - `cargo run -p phonestack_demos --example phone_stack_debug`

use kurbo::Rect;
use phonestack::{Config, Document, LocalElement, bootstrap};

fn add_stack(doc: &mut Document, bounds: Rect, tokens: &[&str]) {
    let root = doc.root();
    let scene = doc.scene_mut();
    let container = scene.insert(
        Some(root),
        LocalElement {
            local_bounds: bounds,
            ..Default::default()
        },
    );
    scene.add_class(container, "phone-stack");
    for token in tokens {
        let card = scene.insert(Some(container), LocalElement::default());
        scene.add_class(card, "phone");
        scene.set_attribute(card, "data-phone", token);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut doc = Document::new(Rect::new(0.0, 0.0, 1200.0, 600.0));
    add_stack(&mut doc, Rect::new(0.0, 0.0, 400.0, 600.0), &["1", "2", "3"]);
    add_stack(&mut doc, Rect::new(600.0, 0.0, 1000.0, 600.0), &["1", "3"]);
    // No cards: logs a warning and is skipped.
    add_stack(&mut doc, Rect::new(0.0, 0.0, 10.0, 10.0), &[]);

    let config = Config {
        debug: true,
        ..Default::default()
    };
    let mut registry = bootstrap(&mut doc, &config);
    println!("{} stacks", registry.len());

    for stack in registry.iter() {
        stack.update_overlay_positions(&mut doc, [0.0, 120.0, 240.0]);
        println!("stack at {:?}, items {:?}", stack.root(), stack.items());
        for overlay in stack.overlays() {
            let bounds = doc.scene().world_bounds(overlay.element);
            let style = doc.scene().style(overlay.element);
            println!("  overlay {} at {bounds:?} painted with {style:?}", overlay.item);
        }
        stack.toggle_debug_mode(&mut doc);
    }

    registry.destroy_all(&mut doc);
}
