// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use phonestack::{Config, Document, LocalElement, PhoneId, PhoneStack};

fn gen_document() -> (Document, PhoneStack) {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let root = doc.root();
    let container = doc.scene_mut().insert(
        Some(root),
        LocalElement {
            local_bounds: Rect::new(0.0, 0.0, 400.0, 600.0),
            ..Default::default()
        },
    );
    for token in ["1", "2", "3"] {
        let card = doc.scene_mut().insert(Some(container), LocalElement::default());
        doc.scene_mut().add_class(card, "phone");
        doc.scene_mut().set_attribute(card, "data-phone", token);
    }
    let stack = PhoneStack::new(&mut doc, container, Config::default());
    stack.subscribe(phonestack::NotificationKind::Activated, |n| {
        black_box(n);
    });
    (doc, stack)
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_toggle");

    group.bench_function("activate_api", |b| {
        let (mut doc, stack) = gen_document();
        b.iter(|| {
            for item in PhoneId::ALL {
                stack.activate(&mut doc, item);
            }
            black_box(stack.active());
        });
    });

    group.bench_function("click_dispatch", |b| {
        let (mut doc, stack) = gen_document();
        let points = [
            Point::new(55.0, 300.0),
            Point::new(165.0, 300.0),
            Point::new(700.0, 300.0),
        ];
        b.iter(|| {
            for pt in points {
                black_box(doc.click(pt));
            }
            black_box(stack.active());
        });
    });

    group.bench_function("construct", |b| {
        b.iter(|| black_box(gen_document()));
    });

    group.finish();
}

criterion_group!(benches, bench_toggle);
criterion_main!(benches);
