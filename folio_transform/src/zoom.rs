// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-anchored zoom: scale changes that keep the point under the
//! pointer visually fixed.

use kurbo::{Point, Size, Vec2};

use crate::transform::{ViewerTransform, clamp_scale};

/// Multiplicative scale step for one zoom-in command.
pub const ZOOM_STEP_IN: f64 = core::f64::consts::SQRT_2;

/// Multiplicative scale step for one zoom-out command.
pub const ZOOM_STEP_OUT: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// Zooms to an absolute target scale around the given anchor.
///
/// `rendered` is the current on-screen size of the scaled element (its
/// unscaled footprint times `transform.scale`), and `anchor` is the pointer
/// position relative to the element's container. The offset is adjusted so
/// that the content point that was under the anchor before the operation
/// remains under it afterwards:
///
/// 1. The anchor's position is expressed as a fraction of the pre-zoom
///    rendered frame, measured from the current offset.
/// 2. The element's unscaled footprint is recovered from the rendered size,
///    then re-projected under the candidate scale.
/// 3. The growth of the frame is distributed according to that fraction and
///    subtracted from the offset.
///
/// The candidate scale is clamped into
/// [`MIN_SCALE`](crate::MIN_SCALE)`..=`[`MAX_SCALE`](crate::MAX_SCALE)
/// *before* the offset math runs, so the anchoring guarantee holds for the
/// scale actually applied. A degenerate rendered size (zero, negative, or
/// non-finite extent) skips the operation and returns the input unchanged;
/// layout timing is not guaranteed, so this is a normal occurrence rather
/// than an error.
#[must_use]
pub fn zoom_to(
    transform: ViewerTransform,
    anchor: Point,
    rendered: Size,
    new_scale: f64,
) -> ViewerTransform {
    if !(rendered.width > 0.0 && rendered.height > 0.0)
        || !rendered.width.is_finite()
        || !rendered.height.is_finite()
    {
        return transform;
    }
    let new_scale = clamp_scale(new_scale);

    let x_scale = (anchor.x - transform.offset.x) / rendered.width;
    let y_scale = (anchor.y - transform.offset.y) / rendered.height;

    let init_width = rendered.width / transform.scale;
    let init_height = rendered.height / transform.scale;

    let amp_width = init_width * new_scale;
    let amp_height = init_height * new_scale;

    let dx = x_scale * (amp_width - rendered.width);
    let dy = y_scale * (amp_height - rendered.height);

    ViewerTransform {
        offset: transform.offset - Vec2::new(dx, dy),
        scale: new_scale,
    }
}

/// Zooms by a multiplicative factor around the given anchor.
///
/// `factor` is typically [`ZOOM_STEP_IN`] or [`ZOOM_STEP_OUT`]. Non-positive
/// or non-finite factors are ignored.
#[must_use]
pub fn zoom_by(
    transform: ViewerTransform,
    anchor: Point,
    rendered: Size,
    factor: f64,
) -> ViewerTransform {
    if !(factor > 0.0) || !factor.is_finite() {
        return transform;
    }
    zoom_to(transform, anchor, rendered, transform.scale * factor)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{ZOOM_STEP_IN, ZOOM_STEP_OUT, zoom_by, zoom_to};
    use crate::transform::{MAX_SCALE, MIN_SCALE, ViewerTransform};

    /// Rendered size of a transform over a 200x200 unscaled element.
    fn rendered_200(t: ViewerTransform) -> Size {
        Size::new(200.0 * t.scale, 200.0 * t.scale)
    }

    #[test]
    fn zoom_keeps_the_anchored_content_point_fixed() {
        // Content coordinate visible at view position `p`:
        //   c = (p - offset) / scale
        let content_at = |t: ViewerTransform, p: Point| {
            Point::new((p.x - t.offset.x) / t.scale, (p.y - t.offset.y) / t.scale)
        };

        let t0 = ViewerTransform::new(Vec2::new(-13.0, 21.0), 1.5);
        let anchor = Point::new(120.0, 40.0);
        let before = content_at(t0, anchor);

        let t1 = zoom_to(t0, anchor, rendered_200(t0), 2.75);
        let after = content_at(t1, anchor);

        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn reciprocal_zoom_steps_round_trip() {
        let t0 = ViewerTransform::default();
        let anchor = Point::new(100.0, 100.0);

        let t1 = zoom_by(t0, anchor, rendered_200(t0), ZOOM_STEP_IN);
        let t2 = zoom_by(t1, anchor, rendered_200(t1), ZOOM_STEP_OUT);

        assert!((t2.scale - 1.0).abs() < 1e-12);
        assert!(t2.offset.x.abs() < 1e-9);
        assert!(t2.offset.y.abs() < 1e-9);
    }

    #[test]
    fn round_trip_holds_for_arbitrary_transforms() {
        let t0 = ViewerTransform::new(Vec2::new(33.5, -81.25), 0.8);
        let anchor = Point::new(17.0, 260.0);
        let factor = 1.7;

        let t1 = zoom_by(t0, anchor, rendered_200(t0), factor);
        let t2 = zoom_by(t1, anchor, rendered_200(t1), 1.0 / factor);

        assert!((t2.scale - t0.scale).abs() < 1e-12);
        assert!((t2.offset.x - t0.offset.x).abs() < 1e-9);
        assert!((t2.offset.y - t0.offset.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_at_frame_center_spreads_growth_evenly() {
        let t0 = ViewerTransform::default();
        // Anchor at the center of a 200x200 frame, doubling the scale: the
        // frame grows by 200px per axis and half of that lands before the
        // anchor on each side.
        let t1 = zoom_to(t0, Point::new(100.0, 100.0), Size::new(200.0, 200.0), 2.0);
        assert_eq!(t1.scale, 2.0);
        assert!((t1.offset.x - -100.0).abs() < 1e-9);
        assert!((t1.offset.y - -100.0).abs() < 1e-9);
    }

    #[test]
    fn candidate_scale_is_clamped_before_the_offset_math() {
        let t0 = ViewerTransform::default();
        let anchor = Point::new(100.0, 100.0);

        let floored = zoom_to(t0, anchor, rendered_200(t0), 0.0);
        assert_eq!(floored.scale, MIN_SCALE);

        let ceiled = zoom_to(t0, anchor, rendered_200(t0), 1e12);
        assert_eq!(ceiled.scale, MAX_SCALE);

        // The clamped scale must still honor the anchoring guarantee.
        let expected = zoom_to(t0, anchor, rendered_200(t0), MIN_SCALE);
        assert_eq!(floored, expected);
    }

    #[test]
    fn degenerate_rendered_size_is_skipped() {
        let t0 = ViewerTransform::new(Vec2::new(5.0, 5.0), 2.0);
        let anchor = Point::new(10.0, 10.0);

        assert_eq!(zoom_to(t0, anchor, Size::ZERO, 4.0), t0);
        assert_eq!(zoom_to(t0, anchor, Size::new(-1.0, 50.0), 4.0), t0);
        assert_eq!(
            zoom_to(t0, anchor, Size::new(f64::NAN, 50.0), 4.0),
            t0,
        );
    }

    #[test]
    fn non_positive_factors_are_ignored() {
        let t0 = ViewerTransform::default();
        let rendered = rendered_200(t0);
        assert_eq!(zoom_by(t0, Point::ZERO, rendered, 0.0), t0);
        assert_eq!(zoom_by(t0, Point::ZERO, rendered, -2.0), t0);
        assert_eq!(zoom_by(t0, Point::ZERO, rendered, f64::NAN), t0);
    }
}
