// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection semantics driven through the programmatic API.

mod support;

use std::cell::RefCell;
use std::rc::Rc;

use phonestack::{Config, Notification, NotificationKind, PhoneId, PhoneStack};
use support::{active_markers, document_with_cards, pressed, record, three_cards};

use PhoneId::{One, Three, Two};

#[test]
fn at_most_one_item_is_ever_active() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());

    let script = [One, Two, Two, Three, One, One, Three, Two, Two, Two];
    for item in script {
        stack.activate(&mut doc, item);
        let active = PhoneId::ALL
            .iter()
            .filter(|p| stack.is_active(**p))
            .count();
        assert!(active <= 1);
        assert!(active_markers(&doc, container).len() <= 1);
        let pressed_count = PhoneId::ALL
            .iter()
            .filter(|p| pressed(&doc, &stack, **p).as_deref() == Some("true"))
            .count();
        assert_eq!(pressed_count, active);
    }
}

#[test]
fn activating_the_active_item_toggles_it_off() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    stack.activate(&mut doc, Two);
    stack.activate(&mut doc, Two);
    assert_eq!(stack.active(), None);
    assert!(active_markers(&doc, container).is_empty());
}

#[test]
fn activating_another_item_switches_directly() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let log = record(&stack);

    stack.activate(&mut doc, One);
    stack.activate(&mut doc, Two);

    assert_eq!(stack.active(), Some(Two));
    assert_eq!(pressed(&doc, &stack, One).as_deref(), Some("false"));
    assert_eq!(pressed(&doc, &stack, Two).as_deref(), Some("true"));
    let overlay = stack.overlay_for(Two).unwrap();
    assert_eq!(doc.scene().attribute(overlay, "aria-expanded"), Some("true"));
    assert_eq!(active_markers(&doc, container), ["phone-2-active"]);

    let source = stack.id();
    assert_eq!(
        *log.borrow(),
        [
            Notification::Activated { item: One, source },
            Notification::Activated { item: Two, source },
        ],
        "no deactivation between the two"
    );
}

#[test]
fn cycling_visits_every_item_and_wraps() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let mut seen = Vec::new();
    for _ in 0..4 {
        stack.cycle_to_next(&mut doc);
        seen.push(stack.active());
    }
    assert_eq!(seen, [Some(One), Some(Two), Some(Three), Some(One)]);
}

#[test]
fn cycling_only_visits_cards_that_exist() {
    let (mut doc, container) = document_with_cards(&["3", "1"]);
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    assert_eq!(stack.items(), [One, Three]);

    stack.cycle_to_next(&mut doc);
    stack.cycle_to_next(&mut doc);
    assert_eq!(stack.active(), Some(Three));
    stack.cycle_to_next(&mut doc);
    assert_eq!(stack.active(), Some(One));
}

#[test]
fn absent_items_cannot_be_activated() {
    let (mut doc, container) = document_with_cards(&["1", "2"]);
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let log = record(&stack);
    assert_eq!(stack.overlays().len(), 2);
    assert_eq!(stack.overlay_for(Three), None);

    stack.activate(&mut doc, Three);
    assert_eq!(stack.active(), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn duplicate_and_unknown_cards_are_ignored() {
    let (mut doc, container) = document_with_cards(&["2", "2", "seven", " 1 "]);
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    assert_eq!(stack.items(), [One, Two]);
}

#[test]
fn deactivate_notifies_once() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let log = record(&stack);

    stack.deactivate(&mut doc);
    assert!(log.borrow().is_empty(), "already idle");

    stack.activate(&mut doc, Three);
    stack.deactivate(&mut doc);
    assert_eq!(
        log.borrow().last(),
        Some(&Notification::Deactivated { source: stack.id() })
    );
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn subscribers_run_in_order_and_see_a_consistent_component() {
    let (mut doc, container) = three_cards();
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second"] {
        let order = order.clone();
        let observer = stack.clone();
        stack.subscribe(NotificationKind::Activated, move |n| {
            let Notification::Activated { item, .. } = *n else {
                panic!("wrong kind delivered");
            };
            assert!(observer.is_active(item));
            order.borrow_mut().push(tag);
        });
    }
    let quiet = stack.subscribe(NotificationKind::Deactivated, |_| {
        panic!("unsubscribed callbacks never run");
    });
    assert!(stack.unsubscribe(quiet));
    assert!(!stack.unsubscribe(quiet));

    stack.activate(&mut doc, One);
    stack.activate(&mut doc, One);
    assert_eq!(*order.borrow(), ["first", "second"]);
}
