// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers.

use kurbo::{Affine, Point, Rect};

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box in world space.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let corners = [
        affine * Point::new(rect.x0, rect.y0),
        affine * Point::new(rect.x1, rect.y0),
        affine * Point::new(rect.x0, rect.y1),
        affine * Point::new(rect.x1, rect.y1),
    ];
    corners[1..].iter().fold(
        Rect::from_points(corners[0], corners[0]),
        |acc, p| acc.union_pt(*p),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_4;

    #[test]
    fn rotation_grows_the_box() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let bb = transform_rect_bbox(Affine::rotate(FRAC_PI_4), r);
        assert!(bb.width() > r.width());
        assert!(bb.height() > r.height());
    }

    #[test]
    fn translation_is_exact() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        let bb = transform_rect_bbox(Affine::translate((5.0, -5.0)), r);
        assert_eq!(bb, Rect::new(5.0, -5.0, 15.0, 15.0));
    }
}
