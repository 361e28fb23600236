// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::navigate::SwitchRequest;

/// What a page item renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// A still picture.
    #[default]
    Image,
    /// A video clip played in place.
    Video,
}

/// One entry of a page set: a media reference plus its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageItem {
    /// Location of the media, opaque to this crate.
    pub url: String,
    /// How the item renders.
    pub kind: PageKind,
}

impl PageItem {
    /// Creates an image item.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: PageKind::Image,
        }
    }

    /// Creates a video item.
    #[must_use]
    pub fn video(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: PageKind::Video,
        }
    }
}

/// Behavior when a navigation request runs past the first or last page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Stay on the edge page.
    Clamp,
    /// Continue from the opposite edge.
    #[default]
    Wrap,
}

/// Which edge a resolved navigation ran into, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeCrossing {
    /// The request ran past the last page and continued from the first.
    WrappedToStart,
    /// The request ran past the first page and continued from the last.
    WrappedToEnd,
    /// The request ran past the first page and stayed on it.
    ClampedAtStart,
    /// The request ran past the last page and stayed on it.
    ClampedAtEnd,
}

/// Result of resolving a [`SwitchRequest`] against a page set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// The cursor position after resolution.
    pub index: usize,
    /// The edge the request ran into, when it did. Hosts typically surface
    /// a notification for wrap crossings.
    pub edge: Option<EdgeCrossing>,
}

/// Ordered sequence of page items with a single mutable cursor.
///
/// The sequence is immutable for the lifetime of a viewing session; the
/// cursor is the only thing that moves. Boundary behavior lives here, in
/// [`PageSet::resolve`] — navigation sources only emit requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSet {
    items: Vec<PageItem>,
    current: usize,
}

impl PageSet {
    /// Creates a page set with the cursor on the first page.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = PageItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            current: 0,
        }
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the set has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the item under the cursor, or `None` for an empty set.
    #[must_use]
    pub fn current(&self) -> Option<&PageItem> {
        self.items.get(self.current)
    }

    /// Returns the item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PageItem> {
        self.items.get(index)
    }

    /// Returns all items in reading order.
    #[must_use]
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// Resolves a navigation request against this set and moves the cursor.
    ///
    /// Out-of-range targets are adjusted per `policy` and the edge crossing
    /// is reported in the outcome. Resolving against an empty set does
    /// nothing and returns `None`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Targets are normalized into 0..len before any cast back to usize"
    )]
    pub fn resolve(
        &mut self,
        request: SwitchRequest,
        policy: BoundaryPolicy,
    ) -> Option<NavigationOutcome> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as i64;

        let target = match request {
            SwitchRequest::Delta(delta) => (self.current as i64).saturating_add(delta),
            SwitchRequest::Goto(index) => i64::try_from(index).unwrap_or(i64::MAX),
        };

        let (index, edge) = if (0..len).contains(&target) {
            (target as usize, None)
        } else {
            let past_end = target >= len;
            match policy {
                BoundaryPolicy::Clamp => {
                    if past_end {
                        ((len - 1) as usize, Some(EdgeCrossing::ClampedAtEnd))
                    } else {
                        (0, Some(EdgeCrossing::ClampedAtStart))
                    }
                }
                BoundaryPolicy::Wrap => {
                    let wrapped = target.rem_euclid(len) as usize;
                    let edge = if past_end {
                        EdgeCrossing::WrappedToStart
                    } else {
                        EdgeCrossing::WrappedToEnd
                    };
                    (wrapped, Some(edge))
                }
            }
        };

        self.current = index;
        Some(NavigationOutcome { index, edge })
    }
}
