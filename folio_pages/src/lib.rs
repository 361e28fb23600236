// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Pages: page-set cursor and navigation primitives.
//!
//! This crate models the ordered set of pages a viewing session walks
//! through, and the discrete navigation commands that move its single
//! cursor. The core concepts are:
//!
//! - [`PageSet`]: an ordered, session-immutable sequence of page items with
//!   one mutable cursor.
//! - [`SwitchRequest`]: a requested cursor change — a relative delta or an
//!   absolute jump. Requests are produced by input mapping and *resolved* by
//!   the page-set owner, which is the only place boundary behavior lives.
//! - [`BoundaryPolicy`]: what happens when a request runs past the first or
//!   last page — clamp at the edge or wrap around. Either way the resolution
//!   reports the edge crossing so hosts can surface a notification.
//! - [`PageNavigator`]: maps discrete input (arrow keys, wheel ticks, digit
//!   entry plus confirm) into [`SwitchRequest`]s, owning the numeric
//!   go-to-page buffer.
//! - [`NumericInputBuffer`]: a digit accumulator; confirming parses it as a
//!   base-10 page index and always clears it, silently discarding anything
//!   unparseable.
//!
//! Whether a navigation also resets the viewer transform is the viewer's
//! concern (see `folio_transform`); this crate only emits and resolves the
//! cursor movement.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_pages::{BoundaryPolicy, PageItem, PageNavigator, PageSet, SwitchRequest};
//!
//! let mut pages = PageSet::new(
//!     (0..12).map(|i| PageItem::image(format!("file:///comic/{i:03}.png"))),
//! );
//! let mut nav = PageNavigator::default();
//!
//! // Arrow key → next page.
//! let outcome = pages.resolve(nav.next(), BoundaryPolicy::Wrap).unwrap();
//! assert_eq!(outcome.index, 1);
//!
//! // Digits then confirm → absolute jump.
//! nav.digit('0');
//! nav.digit('7');
//! assert_eq!(nav.confirm(), Some(SwitchRequest::Goto(7)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod input;
mod navigate;
mod set;

pub use input::NumericInputBuffer;
pub use navigate::{PageNavigator, SwitchRequest, wheel_tick};
pub use set::{BoundaryPolicy, EdgeCrossing, NavigationOutcome, PageItem, PageKind, PageSet};
