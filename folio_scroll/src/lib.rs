// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Scroll: reading-direction scroll model for strip viewers.
//!
//! This crate provides a headless model of a scrolling picture strip that can
//! be read in any of four directions. It focuses on:
//! - The reading-direction state machine ([`ScrollDirection`]): four states,
//!   freely switchable, each with a semantically "start" edge the strip jumps
//!   to when the direction changes.
//! - A clamped scroll region ([`ScrollRegion`]): offset, content extent, and
//!   viewport extent per axis.
//! - Wheel routing ([`ScrollModeController`]): wheel deltas land on the axis
//!   the current direction reads along, with a modifier inverting the axis,
//!   and a zoom modifier diverting the wheel into container scaling that
//!   preserves the normalized scroll fraction.
//! - Drag-to-scroll with the conventional amplification factor.
//!
//! It does **not** own item layout or lazy loading. Callers are expected to:
//! - Report measured content and viewport extents into the region.
//! - Feed wheel, key, and pointer events into the controller.
//! - Project the resulting offsets and container scale into their own
//!   scrolling surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use folio_scroll::{ScrollDirection, ScrollModeController, ScrollRegion, WheelInput};
//!
//! let region = ScrollRegion::new(Size::new(5000.0, 800.0), Size::new(1200.0, 800.0));
//! let mut strip = ScrollModeController::new(region);
//!
//! // Right-to-left manga reading starts at the far right edge.
//! strip.set_direction(ScrollDirection::RightToLeft);
//! assert_eq!(strip.region().scroll().x, strip.region().max_scroll().x);
//!
//! // A plain wheel tick scrolls along the horizontal reading axis.
//! strip.handle_wheel(WheelInput::plain(-120.0));
//! ```
//!
//! The persisted form of [`ScrollDirection`] is its two-letter code
//! (`"TB"`, `"BT"`, `"LR"`, `"RL"`); enable the `serde` feature for derives
//! that serialize exactly those codes.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod direction;
mod region;

pub use controller::{DRAG_SCROLL_FACTOR, ScrollModeController, WheelInput};
pub use direction::{Axis, ScrollDirection};
pub use region::ScrollRegion;
