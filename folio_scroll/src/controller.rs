// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::direction::{Axis, ScrollDirection};
use crate::region::ScrollRegion;

/// Amplification applied to pointer movement while dragging the strip.
pub const DRAG_SCROLL_FACTOR: f64 = 5.0;

const SCALE_STEP_IN: f64 = core::f64::consts::SQRT_2;
const SCALE_STEP_OUT: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// One wheel event as seen by the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Signed wheel delta; positive scrolls toward the content end.
    pub delta_y: f64,
    /// Axis-inversion modifier (conventionally shift) held.
    pub invert_axis: bool,
    /// Zoom modifier (ctrl key, or the secondary mouse button held) active.
    pub zoom_modifier: bool,
}

impl WheelInput {
    /// A wheel tick with no modifiers.
    #[must_use]
    pub fn plain(delta_y: f64) -> Self {
        Self {
            delta_y,
            invert_axis: false,
            zoom_modifier: false,
        }
    }

    /// A wheel tick with the zoom modifier held.
    #[must_use]
    pub fn zooming(delta_y: f64) -> Self {
        Self {
            delta_y,
            invert_axis: false,
            zoom_modifier: true,
        }
    }

    /// A wheel tick with the axis-inversion modifier held.
    #[must_use]
    pub fn inverted(delta_y: f64) -> Self {
        Self {
            delta_y,
            invert_axis: true,
            zoom_modifier: false,
        }
    }
}

/// Directional scroll state for a strip viewer.
///
/// The controller owns the reading direction, the clamped scroll region, the
/// container scale, and the drag flag. All four reading directions are
/// reachable from any other; on an actual change the region jumps to the new
/// direction's start edge exactly once.
///
/// Wheel input routes to the axis the current direction reads along, the
/// inversion modifier swaps the axis, and the zoom modifier diverts the wheel
/// into container scaling. Container scaling preserves the normalized scroll
/// fraction (`new_offset = old_fraction * new_extent`) on both axes rather
/// than anchoring to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollModeController {
    direction: ScrollDirection,
    region: ScrollRegion,
    container_scale: f64,
    min_scale: f64,
    max_scale: f64,
    dragging: bool,
}

impl ScrollModeController {
    /// Creates a controller over the given region, reading left-to-right at
    /// container scale `1.0`.
    ///
    /// The container scale is clamped into `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(region: ScrollRegion) -> Self {
        Self {
            direction: ScrollDirection::default(),
            region,
            container_scale: 1.0,
            min_scale: 1e-3,
            max_scale: 1e3,
            dragging: false,
        }
    }

    /// Returns the current reading direction.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Switches the reading direction.
    ///
    /// On an actual change the scroll offset jumps to the new direction's
    /// start edge; re-selecting the current direction leaves the offset
    /// where the reader scrolled it. Returns `true` when the direction
    /// changed.
    pub fn set_direction(&mut self, direction: ScrollDirection) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.region.scroll_to_start_edge(direction);
        true
    }

    /// Returns the scroll region.
    #[must_use]
    pub fn region(&self) -> &ScrollRegion {
        &self.region
    }

    /// Returns the scroll region for direct mutation (measured extents).
    pub fn region_mut(&mut self) -> &mut ScrollRegion {
        &mut self.region
    }

    /// Returns the current container scale.
    #[must_use]
    pub fn container_scale(&self) -> f64 {
        self.container_scale
    }

    /// Sets the minimum and maximum container scale.
    ///
    /// The range is normalized so that `min <= max` and the current scale is
    /// re-clamped into it.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_container_scale(self.container_scale);
    }

    /// Sets the container scale, preserving the normalized scroll fraction.
    ///
    /// The content extent grows or shrinks with the scale ratio and the
    /// offset is repositioned so the same fraction of the content sits
    /// before the viewport on each axis.
    pub fn set_container_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        let ratio = clamped / self.container_scale;
        if (ratio - 1.0).abs() < f64::EPSILON {
            self.container_scale = clamped;
            return;
        }

        let fraction = self.region.scroll_fraction();
        let content = self.region.content();
        self.container_scale = clamped;
        self.region
            .set_content(Size::new(content.width * ratio, content.height * ratio));
        let content = self.region.content();
        self.region.set_scroll(Vec2::new(
            fraction.x * content.width,
            fraction.y * content.height,
        ));
    }

    /// Applies one zoom-in step (`sqrt(2)`) to the container.
    pub fn zoom_in(&mut self) {
        self.set_container_scale(self.container_scale * SCALE_STEP_IN);
    }

    /// Applies one zoom-out step (`1/sqrt(2)`) to the container.
    pub fn zoom_out(&mut self) {
        self.set_container_scale(self.container_scale * SCALE_STEP_OUT);
    }

    /// Routes one wheel event.
    ///
    /// With the zoom modifier active, a negative delta zooms the container in
    /// and a positive delta zooms it out. Otherwise the delta lands on the
    /// reading axis, or the other axis when the inversion modifier is held.
    pub fn handle_wheel(&mut self, input: WheelInput) {
        if input.zoom_modifier {
            if input.delta_y < 0.0 {
                self.zoom_in();
            } else if input.delta_y > 0.0 {
                self.zoom_out();
            }
            return;
        }

        let axis = match (self.direction.axis(), input.invert_axis) {
            (Axis::Horizontal, false) | (Axis::Vertical, true) => Axis::Horizontal,
            (Axis::Vertical, false) | (Axis::Horizontal, true) => Axis::Vertical,
        };
        let delta = match axis {
            Axis::Horizontal => Vec2::new(input.delta_y, 0.0),
            Axis::Vertical => Vec2::new(0.0, input.delta_y),
        };
        self.region.scroll_by(delta);
    }

    /// Starts a drag-to-scroll gesture.
    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    /// Stops the drag gesture; releases may arrive from anywhere in the
    /// document.
    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies pointer movement while dragging.
    ///
    /// The strip follows the pointer: content moves with the hand, so the
    /// offset moves opposite to the movement, amplified by
    /// [`DRAG_SCROLL_FACTOR`]. Movement outside a gesture is ignored.
    pub fn handle_drag_move(&mut self, movement: Vec2) {
        if !self.dragging {
            return;
        }
        self.region.scroll_by(movement * -DRAG_SCROLL_FACTOR);
    }
}

impl Default for ScrollModeController {
    fn default() -> Self {
        Self::new(ScrollRegion::default())
    }
}
