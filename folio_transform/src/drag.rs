// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag panning: accumulate translation offset while a drag gesture is active.
//!
//! ## Usage
//!
//! 1) On a pointer press inside the viewer, call [`PanDrag::press`] with the
//!    pressed button; only the primary button starts a gesture.
//! 2) On each pointer move, call [`PanDrag::drag`] with the movement delta to
//!    get the updated transform; moves outside a gesture return `None`.
//! 3) On *any* pointer release — anywhere in the document, not just inside
//!    the viewer — call [`PanDrag::release`]. Releasing outside the viewer
//!    must still stop the drag, otherwise the gesture flag gets stuck when
//!    the pointer leaves the element before release.

use kurbo::Vec2;

use crate::transform::ViewerTransform;

/// Pointer button identity for gesture routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left). The only button that pans.
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The auxiliary button (usually the wheel/middle button).
    Auxiliary,
}

/// Applies a drag movement to a transform: the offset accumulates the
/// movement directly, the scale is unchanged.
#[must_use]
pub fn drag_by(transform: ViewerTransform, movement: Vec2) -> ViewerTransform {
    ViewerTransform {
        offset: transform.offset + movement,
        scale: transform.scale,
    }
}

/// Tracks whether a pan gesture is active.
///
/// The flag is set by a primary-button press and cleared by any release, so
/// movement from non-primary gestures never reaches the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanDrag {
    active: bool,
}

impl PanDrag {
    /// Handles a pointer press inside the viewer.
    ///
    /// Only [`PointerButton::Primary`] starts a gesture; other buttons leave
    /// the state untouched.
    pub fn press(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.active = true;
        }
    }

    /// Handles a pointer release anywhere in the document.
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Applies a movement delta while the gesture is active.
    ///
    /// Returns the updated transform, or `None` when no gesture is in
    /// progress (the movement is ignored).
    #[must_use]
    pub fn drag(&self, transform: ViewerTransform, movement: Vec2) -> Option<ViewerTransform> {
        self.active.then(|| drag_by(transform, movement))
    }
}
