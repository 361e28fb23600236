// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Transform: pan/zoom transform state for page viewers.
//!
//! This crate provides a small, headless model of the transform applied to a
//! single rendered page: a translation offset plus a uniform scale factor,
//! together with the interaction machinery that mutates it. It focuses on:
//! - Transform state ([`ViewerTransform`]) and the locks that gate its reset
//!   on page navigation ([`InteractionLocks`]).
//! - Pointer anchor tracking ([`AnchorTracker`]): converting raw pointer
//!   screen coordinates into coordinates relative to the viewer's container.
//! - Pointer-anchored zooming ([`zoom_to`] / [`zoom_by`]): changing the scale
//!   so that the content point under the pointer stays visually fixed.
//! - Drag panning ([`PanDrag`]): accumulating translation while a primary
//!   button gesture is active.
//!
//! It does **not** own any widget, image, or rendering backend. Callers are
//! expected to:
//! - Feed pointer/wheel/key events into the anchor tracker, drag state, and
//!   zoom helpers from whatever event loop hosts the viewer.
//! - Read the resulting [`ViewerTransform`] and project it into their own
//!   rendering (for example as a CSS-like `translate(x, y) scale(s)` pair).
//! - Report the current rendered size of the scaled element, since the zoom
//!   math is expressed in terms of the on-screen footprint.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use folio_transform::{AnchorTracker, ViewerTransform, ZOOM_STEP_IN, zoom_to};
//!
//! let mut transform = ViewerTransform::default();
//! let mut anchor = AnchorTracker::default();
//!
//! // Pointer sits at (140, 90) on screen; the viewer's container starts at (40, 40).
//! anchor.update(Point::new(140.0, 90.0), Point::new(40.0, 40.0));
//!
//! // Zoom in one step around that anchor. The page is rendered at 200x200.
//! transform = zoom_to(
//!     transform,
//!     anchor.anchor_or_origin(),
//!     Size::new(200.0, 200.0),
//!     transform.scale * ZOOM_STEP_IN,
//! );
//! assert!(transform.scale > 1.0);
//! ```
//!
//! ## Design notes
//!
//! - All interaction state lives in explicit, owned records so the math is
//!   reproducible and testable without a rendering environment.
//! - The scale factor is always strictly positive: every scale write is
//!   clamped into [`MIN_SCALE`]`..=`[`MAX_SCALE`].
//! - Drag gestures are cancelled by *any* pointer release, not just releases
//!   inside the viewer, so the drag flag cannot get stuck when the pointer
//!   leaves the element before release.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod drag;
mod locks;
mod transform;
mod zoom;

pub use anchor::AnchorTracker;
pub use drag::{PanDrag, PointerButton, drag_by};
pub use locks::InteractionLocks;
pub use transform::{MAX_SCALE, MIN_SCALE, ViewerTransform};
pub use zoom::{ZOOM_STEP_IN, ZOOM_STEP_OUT, zoom_by, zoom_to};
