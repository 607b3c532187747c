// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Phonestack Scene.
//!
//! ## Feature
//!
//! Enable with `scene_adapter`.
//!
//! ## Notes
//!
//! These helpers convert scene hit tests into responder hits and let the
//! router walk scene ancestry for focus-routed input.

use alloc::vec::Vec;

use kurbo::Point;
use phonestack_scene::{ElementId, Hit, QueryFilter, Scene};

use crate::types::{ParentLookup, ResolvedHit};

impl ParentLookup<ElementId> for Scene {
    fn parent_of(&self, node: &ElementId) -> Option<ElementId> {
        self.parent(*node)
    }
}

fn resolved(hit: Hit) -> ResolvedHit<ElementId, ()> {
    ResolvedHit {
        node: hit.element,
        path: Some(hit.path),
        z_index: hit.z_index,
        meta: (),
    }
}

/// Build a single resolved hit for the topmost element under a point.
///
/// Returns `None` if no element matches the filter. The path is populated
/// from the scene so the router does not need a parent lookup.
pub fn top_hit_for_point(
    scene: &Scene,
    pt: Point,
    filter: QueryFilter,
) -> Option<ResolvedHit<ElementId, ()>> {
    scene.hit_test_point(pt, filter).map(resolved)
}

/// Build resolved hits for every element under a point, in paint order.
///
/// Feeding the whole list to the router selects the same target as
/// [`top_hit_for_point`], since the router keeps the last of equal-z hits.
pub fn hits_for_point(
    scene: &Scene,
    pt: Point,
    filter: QueryFilter,
) -> Vec<ResolvedHit<ElementId, ()>> {
    scene
        .hits_at_point(pt, filter)
        .into_iter()
        .map(resolved)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;
    use crate::types::{NoParent, Phase};
    use kurbo::Rect;
    use phonestack_scene::LocalElement;

    fn boxed(x0: f64, y0: f64, x1: f64, y1: f64) -> LocalElement {
        LocalElement {
            local_bounds: Rect::new(x0, y0, x1, y1),
            ..Default::default()
        }
    }

    #[test]
    fn full_hit_list_routes_to_the_top_element() {
        let mut scene = Scene::new();
        let root = scene.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let card = scene.insert(Some(root), boxed(0.0, 0.0, 50.0, 50.0));
        let overlay = scene.insert(Some(root), boxed(0.0, 0.0, 20.0, 50.0));

        let router: Router<ElementId, NoParent> = Router::new();
        let pt = Point::new(10.0, 10.0);
        let all = router.handle_with_hits(&hits_for_point(&scene, pt, QueryFilter::POINTER));
        let top_hit = top_hit_for_point(&scene, pt, QueryFilter::POINTER).unwrap();
        let top = router.handle_with_hits(&[top_hit]);
        let target = |seq: &[crate::types::Dispatch<ElementId>]| {
            seq.iter().find(|d| d.phase == Phase::Target).map(|d| d.node)
        };
        assert_eq!(target(&all), Some(overlay));
        assert_eq!(target(&top), Some(overlay));

        let beside =
            top_hit_for_point(&scene, Point::new(30.0, 10.0), QueryFilter::POINTER).unwrap();
        assert_eq!(beside.node, card);
    }

    #[test]
    fn scene_drives_focus_routing() {
        let mut scene = Scene::new();
        let root = scene.insert(None, boxed(0.0, 0.0, 100.0, 100.0));
        let stack = scene.insert(Some(root), boxed(0.0, 0.0, 50.0, 50.0));
        let overlay = scene.insert(Some(stack), boxed(0.0, 0.0, 20.0, 50.0));

        let router = Router::with_parent(scene);
        let seq = router.dispatch_for(overlay);
        let nodes: Vec<_> = seq.iter().map(|d| d.node).collect();
        assert_eq!(nodes, alloc::vec![root, stack, overlay, stack, root]);
    }
}
