// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer, touch, keyboard, and hover input routed through a `Document`.

mod support;

use kurbo::Point;
use phonestack::{
    Config, EventKind, Key, ListenPhase, LocalElement, Notification, Outcome, PhoneId, PhoneStack,
};
use support::{CONTAINER, OUTSIDE, document_with_cards, overlay_point, record, three_cards};

use PhoneId::{One, Three, Two};

#[test]
fn clicking_an_overlay_toggles_its_card() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    let result = doc.click(overlay_point(Two));
    assert!(result.default_prevented);
    assert_eq!(stack.active(), Some(Two));

    doc.click(overlay_point(Three));
    assert_eq!(stack.active(), Some(Three));

    doc.click(overlay_point(Three));
    assert_eq!(stack.active(), None);
}

#[test]
fn overlay_clicks_do_not_reach_ancestors() {
    let (mut doc, container) = three_cards();
    let _stack = PhoneStack::new(&mut doc, container, Config::default());
    let reached = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = reached.clone();
    doc.add_listener(container, EventKind::Click, ListenPhase::Bubble, move |_| {
        flag.set(true);
        Outcome::Continue
    });
    doc.click(overlay_point(One));
    assert!(!reached.get());
}

#[test]
fn a_tap_toggles_exactly_once() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let log = record(&stack);

    let tap = doc.tap(overlay_point(One));
    assert!(tap.touch.default_prevented);
    assert_eq!(tap.click, None, "no compatibility click after a consumed touch");
    assert_eq!(stack.active(), Some(One));
    assert_eq!(log.borrow().len(), 1);

    doc.tap(overlay_point(One));
    assert_eq!(stack.active(), None);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn enter_and_space_activate_the_focused_overlay() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    doc.focus(stack.overlay_for(Two));
    let result = doc.key(Key::Enter);
    assert!(result.default_prevented);
    assert_eq!(stack.active(), Some(Two));

    doc.key(Key::Space);
    assert_eq!(stack.active(), None);

    let ignored = doc.key(Key::Other);
    assert!(!ignored.default_prevented);
    assert_eq!(stack.active(), None);
}

#[test]
fn tab_walks_the_overlays() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    let mut visited = Vec::new();
    for _ in 0..4 {
        doc.key(Key::Tab);
        visited.push(doc.focused().and_then(|el| stack.item_for(el)));
    }
    assert_eq!(visited, [Some(One), Some(Two), Some(Three), Some(One)]);

    doc.key(Key::Enter);
    assert_eq!(stack.active(), Some(One));
}

#[test]
fn clicking_an_overlay_focuses_it() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    doc.click(overlay_point(Three));
    assert_eq!(doc.focused(), stack.overlay_for(Three));
}

#[test]
fn tapping_an_overlay_focuses_it() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    doc.focus(stack.overlay_for(One));

    doc.tap(overlay_point(Two));
    assert_eq!(doc.focused(), stack.overlay_for(Two));
    assert_eq!(stack.active(), Some(Two));

    // Enter goes to the tapped overlay, not the one focused before.
    doc.key(Key::Enter);
    assert_eq!(stack.active(), None);
}

#[test]
fn overlays_outrank_a_raised_container() {
    let (mut doc, container) = three_cards();
    doc.scene_mut().set_z_index(container, 10);
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    doc.click(overlay_point(Two));
    assert_eq!(stack.active(), Some(Two));
}

#[test]
fn overlays_outrank_elements_inside_the_cards() {
    let (mut doc, container) = document_with_cards(&["1", "2", "3"]);
    let cards = doc.scene().children(container).to_vec();
    for card in cards {
        doc.scene_mut().insert(
            Some(card),
            LocalElement {
                local_bounds: CONTAINER,
                z_index: 50,
                ..Default::default()
            },
        );
    }
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    doc.click(overlay_point(Two));
    assert_eq!(stack.active(), Some(Two));
    doc.click(overlay_point(Three));
    assert_eq!(stack.active(), Some(Three));
}

#[test]
fn outside_click_dismisses_when_enabled() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    stack.activate(&mut doc, Two);
    let log = record(&stack);

    doc.click(OUTSIDE);
    assert_eq!(stack.active(), None);
    assert_eq!(
        *log.borrow(),
        [Notification::Deactivated { source: stack.id() }]
    );

    doc.click(OUTSIDE);
    assert_eq!(log.borrow().len(), 1, "idle stays idle quietly");
}

#[test]
fn clicks_beyond_the_viewport_count_as_outside() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    stack.activate(&mut doc, One);
    doc.click(Point::new(-50.0, -50.0));
    assert_eq!(stack.active(), None);
}

#[test]
fn outside_click_is_ignored_when_disabled() {
    let (mut doc, container) = three_cards();
    let config = Config {
        outside_click_dismiss: false,
        ..Default::default()
    };
    let stack = PhoneStack::new(&mut doc, container, config);
    stack.activate(&mut doc, Two);
    let log = record(&stack);

    doc.click(OUTSIDE);
    assert_eq!(stack.active(), Some(Two));
    assert!(log.borrow().is_empty());

    stack.set_outside_click_dismiss(true);
    assert!(stack.config().outside_click_dismiss);
    doc.click(OUTSIDE);
    assert_eq!(stack.active(), None);
}

#[test]
fn clicks_inside_the_container_off_the_overlays_keep_the_selection() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    stack.set_overlay_widths(&mut doc, [50.0, 50.0, 50.0]);
    stack.activate(&mut doc, Three);

    // Lands on a card, not on an overlay.
    doc.click(Point::new(350.0, 300.0));
    assert_eq!(stack.active(), Some(Three));
}

#[test]
fn hovering_an_overlay_marks_the_container() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    doc.pointer_move(overlay_point(One));
    assert!(doc.scene().has_class(container, "phone-1-hover"));

    doc.pointer_move(overlay_point(Two));
    assert!(!doc.scene().has_class(container, "phone-1-hover"));
    assert!(doc.scene().has_class(container, "phone-2-hover"));

    doc.pointer_move(OUTSIDE);
    assert!(!doc.scene().has_class(container, "phone-2-hover"));

    doc.pointer_move(overlay_point(Three));
    stack.set_hover_feedback(&mut doc, false);
    assert!(!doc.scene().has_class(container, "phone-3-hover"));
    doc.pointer_exit();
    doc.pointer_move(overlay_point(One));
    assert!(!doc.scene().has_class(container, "phone-1-hover"));
}
