// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer anchor tracking: the screen point a zoom operation pivots around.
//!
//! The tracker converts raw pointer screen coordinates into coordinates
//! relative to the viewer's containing element. It is updated on every
//! pointer-move and wheel event so the anchor is always fresh before a zoom
//! decision is made.
//!
//! Layout timing is not guaranteed by hosting shells: when the container is
//! not yet measurable the host simply skips the update and the anchor keeps
//! its previous value.

use kurbo::Point;

/// Last observed pointer position relative to the viewer's container.
///
/// A fresh tracker has seen no pointer yet; zoom operations taken before the
/// first observation fall back to the container origin via
/// [`AnchorTracker::anchor_or_origin`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorTracker {
    anchor: Option<Point>,
}

impl AnchorTracker {
    /// Records a new anchor from a pointer position and the container origin,
    /// both in screen coordinates.
    ///
    /// Returns the container-relative anchor that was stored.
    pub fn update(&mut self, pointer_screen: Point, container_origin: Point) -> Point {
        let anchor = Point::new(
            pointer_screen.x - container_origin.x,
            pointer_screen.y - container_origin.y,
        );
        self.anchor = Some(anchor);
        anchor
    }

    /// Returns the last observed anchor, if any pointer event has been seen.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns the last observed anchor, or the container origin when no
    /// pointer has been observed yet.
    #[must_use]
    pub fn anchor_or_origin(&self) -> Point {
        self.anchor.unwrap_or(Point::ZERO)
    }

    /// Forgets the stored anchor, as when the viewer unmounts.
    pub fn clear(&mut self) {
        self.anchor = None;
    }
}
