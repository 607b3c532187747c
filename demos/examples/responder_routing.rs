// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route a pointer hit through a scene without the component layer.
//!
//! Shows the capture → target → bubble sequence for the topmost hit, how the
//! dispatcher stops on a consumed step, and hover enter/leave between moves.
//!
//! Run:
//! - `cargo run -p phonestack_demos --example responder_routing`

use kurbo::{Point, Rect};
use phonestack_responder::adapters::scene::hits_for_point;
use phonestack_responder::dispatcher;
use phonestack_responder::hover::{HoverState, path_from_dispatch};
use phonestack_responder::router::Router;
use phonestack_responder::types::{NoParent, Outcome, Phase};
use phonestack_scene::{ElementId, LocalElement, QueryFilter, Scene};

fn boxed(rect: Rect, z: i32) -> LocalElement {
    LocalElement {
        local_bounds: rect,
        z_index: z,
        ..Default::default()
    }
}

fn main() {
    let mut scene = Scene::new();
    let page = scene.insert(None, boxed(Rect::new(0.0, 0.0, 400.0, 300.0), 0));
    let panel = scene.insert(Some(page), boxed(Rect::new(20.0, 20.0, 220.0, 220.0), 1));
    let button = scene.insert(Some(panel), boxed(Rect::new(40.0, 40.0, 120.0, 80.0), 2));
    let aside = scene.insert(Some(page), boxed(Rect::new(250.0, 20.0, 380.0, 220.0), 1));

    let router: Router<ElementId, NoParent> = Router::new();
    let route = |scene: &Scene, pt: Point| {
        let hits = hits_for_point(scene, pt, QueryFilter::POINTER);
        router.handle_with_hits(&hits)
    };

    let seq = route(&scene, Point::new(50.0, 50.0));
    for d in &seq {
        println!("{:?} {:?}", d.phase, d.node);
    }

    // The button consumes; the panel's bubble step never runs.
    let result = dispatcher::run(&seq, |d| {
        if d.node == button && d.phase == Phase::Target {
            Outcome::StopAndConsume
        } else {
            Outcome::Continue
        }
    });
    println!("stopped at {:?}, default prevented: {}", result.stopped_at, result.default_prevented);

    let mut hover = HoverState::new();
    for pt in [Point::new(50.0, 50.0), Point::new(300.0, 100.0)] {
        let path = path_from_dispatch(&route(&scene, pt));
        println!("hover {pt:?}: {:?}", hover.update_path(&path));
    }
    println!("page={page:?} panel={panel:?} button={button:?} aside={aside:?}");
}
