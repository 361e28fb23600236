// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::locks::InteractionLocks;

/// Smallest scale factor a transform will accept.
///
/// Repeated zoom-out would otherwise drive the scale toward zero, at which
/// point the anchored zoom math divides by a vanishing rendered extent.
pub const MIN_SCALE: f64 = 1e-3;

/// Largest scale factor a transform will accept.
pub const MAX_SCALE: f64 = 1e3;

/// Translation offset and uniform scale applied to one rendered page.
///
/// `ViewerTransform` is owned exclusively by one viewer instance. It is reset
/// to the identity on page change unless the viewer's [`InteractionLocks`]
/// say otherwise, and mutated in place by the drag and zoom helpers.
///
/// Invariant: `scale` is strictly positive. Both constructors and every
/// helper in this crate clamp scale writes into [`MIN_SCALE`]`..=`[`MAX_SCALE`],
/// so the invariant cannot be broken through this crate's API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerTransform {
    /// Translation offset in view/device pixels.
    pub offset: Vec2,
    /// Uniform scale factor. Always strictly positive.
    pub scale: f64,
}

impl Default for ViewerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewerTransform {
    /// The identity transform: zero offset, scale `1.0`.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform with the given offset and scale.
    ///
    /// The scale is clamped into [`MIN_SCALE`]`..=`[`MAX_SCALE`]; non-finite
    /// scales fall back to `1.0`.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Self {
        Self {
            offset,
            scale: clamp_scale(scale),
        }
    }

    /// Returns a copy with the scale replaced (and clamped).
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self {
            offset: self.offset,
            scale: clamp_scale(scale),
        }
    }

    /// Resets offset and scale to the identity.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Applies the navigation-time reset, honoring the given locks.
    ///
    /// On a page change the scale returns to `1.0` unless
    /// [`InteractionLocks::LOCK_SCALE`] is set, and the offset returns to zero
    /// unless [`InteractionLocks::LOCK_POSITION`] is set. With both locks
    /// engaged the transform is left untouched, so a reader can flip pages
    /// without losing zoom/pan state.
    pub fn reset_for_navigation(&mut self, locks: InteractionLocks) {
        if !locks.contains(InteractionLocks::LOCK_SCALE) {
            self.scale = 1.0;
        }
        if !locks.contains(InteractionLocks::LOCK_POSITION) {
            self.offset = Vec2::ZERO;
        }
    }
}

/// Clamps a candidate scale into the supported range.
///
/// Non-finite candidates map to `1.0` rather than saturating, since they can
/// only arise from degenerate geometry the caller should have skipped.
pub(crate) fn clamp_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{MAX_SCALE, MIN_SCALE, ViewerTransform};
    use crate::locks::InteractionLocks;

    #[test]
    fn default_is_identity() {
        let t = ViewerTransform::default();
        assert_eq!(t.offset, Vec2::ZERO);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn new_clamps_scale_into_supported_range() {
        let low = ViewerTransform::new(Vec2::ZERO, 0.0);
        assert_eq!(low.scale, MIN_SCALE);

        let high = ViewerTransform::new(Vec2::ZERO, 1e9);
        assert_eq!(high.scale, MAX_SCALE);

        let negative = ViewerTransform::new(Vec2::ZERO, -2.0);
        assert_eq!(negative.scale, MIN_SCALE);

        let nan = ViewerTransform::new(Vec2::ZERO, f64::NAN);
        assert_eq!(nan.scale, 1.0);
    }

    #[test]
    fn navigation_reset_without_locks_restores_identity() {
        let mut t = ViewerTransform::new(Vec2::new(12.0, -7.0), 2.5);
        t.reset_for_navigation(InteractionLocks::empty());
        assert_eq!(t, ViewerTransform::IDENTITY);
    }

    #[test]
    fn scale_lock_preserves_scale_but_not_offset() {
        let mut t = ViewerTransform::new(Vec2::new(12.0, -7.0), 2.5);
        t.reset_for_navigation(InteractionLocks::LOCK_SCALE);
        assert_eq!(t.offset, Vec2::ZERO);
        assert_eq!(t.scale, 2.5);
    }

    #[test]
    fn position_lock_preserves_offset_but_not_scale() {
        let mut t = ViewerTransform::new(Vec2::new(12.0, -7.0), 2.5);
        t.reset_for_navigation(InteractionLocks::LOCK_POSITION);
        assert_eq!(t.offset, Vec2::new(12.0, -7.0));
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn both_locks_leave_transform_untouched() {
        let mut t = ViewerTransform::new(Vec2::new(12.0, -7.0), 2.5);
        t.reset_for_navigation(InteractionLocks::all());
        assert_eq!(t, ViewerTransform::new(Vec2::new(12.0, -7.0), 2.5));
    }
}
