// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Viewer: headless viewer components for a paged picture reader.
//!
//! This crate composes the Folio models into the two reading surfaces of the
//! hosting application:
//!
//! - [`SinglePageViewer`]: one page at a time, with pointer-anchored zoom,
//!   drag panning, lock-gated transform reset, and keyboard/wheel page
//!   navigation.
//! - [`ScrollStripViewer`]: a continuous strip read in any of four
//!   directions, with wheel-to-axis routing, fraction-preserving container
//!   zoom, drag-to-scroll, and a persisted per-directory reading direction.
//!
//! Both components follow the same shape: one explicit, owned state record
//! per instance, mutated synchronously by event handlers, with an explicit
//! [`mount`](SinglePageViewer::mount)/[`unmount`](SinglePageViewer::unmount)
//! lifecycle driven by the hosting shell. Collaborators — the directory
//! store, the notification surface — are passed in as parameters, never
//! looked up ambiently. Handlers return the data the host must act on (a
//! [`SwitchRequest`](folio_pages::SwitchRequest) to resolve against the page
//! set); side effects the host owns stay outside.
//!
//! All mutation happens on the UI thread inside the event handlers; nothing
//! here blocks, suspends, or retries. Persistence writes go through the
//! best-effort helpers of `folio_store` and are never awaited.
//!
//! ## Event flow example
//!
//! ```rust
//! use folio_pages::{BoundaryPolicy, PageItem, PageSet};
//! use folio_scroll::WheelInput;
//! use folio_viewer::SinglePageViewer;
//!
//! let mut pages = PageSet::new([PageItem::image("a.png"), PageItem::image("b.png")]);
//! let mut viewer = SinglePageViewer::new();
//! viewer.mount();
//!
//! // An unmodified wheel tick in single-page mode asks for the next page;
//! // the host resolves it against the page set it owns.
//! if let Some(request) = viewer.on_wheel(WheelInput::plain(120.0), None, None) {
//!     let outcome = pages.resolve(request, BoundaryPolicy::Wrap).unwrap();
//!     assert_eq!(outcome.index, 1);
//! }
//! ```

mod notify;
mod scroll_strip;
mod single_page;

pub use notify::{NotificationSink, announce_edge};
pub use scroll_strip::{ScrollStripViewer, StripKey, direction_for_digit};
pub use single_page::{PageKey, SinglePageViewer};
