// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::direction::ScrollDirection;

/// Scroll offset plus content and viewport extents of a scrolling strip.
///
/// Offsets live in `[0, max_scroll]` per axis, where `max_scroll` is the
/// content extent minus the viewport extent (never negative). All mutators
/// re-clamp, so a region never scrolls past its content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    scroll: Vec2,
    content: Size,
    viewport: Size,
}

impl ScrollRegion {
    /// Creates a region at scroll offset zero.
    ///
    /// Negative extents are treated as zero.
    #[must_use]
    pub fn new(content: Size, viewport: Size) -> Self {
        Self {
            scroll: Vec2::ZERO,
            content: sanitize(content),
            viewport: sanitize(viewport),
        }
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Returns the content extent.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Returns the viewport extent.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the maximal scroll offset per axis.
    #[must_use]
    pub fn max_scroll(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }

    /// Sets the scroll offset, clamped into `[0, max_scroll]` per axis.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        let max = self.max_scroll();
        self.scroll = Vec2::new(scroll.x.clamp(0.0, max.x), scroll.y.clamp(0.0, max.y));
    }

    /// Adjusts the scroll offset by a delta, clamped.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.set_scroll(self.scroll + delta);
    }

    /// Replaces the content extent, re-clamping the offset.
    pub fn set_content(&mut self, content: Size) {
        self.content = sanitize(content);
        self.set_scroll(self.scroll);
    }

    /// Replaces the viewport extent, re-clamping the offset.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = sanitize(viewport);
        self.set_scroll(self.scroll);
    }

    /// Returns the scroll offset as a fraction of the content extent per
    /// axis, `0.0` where the content has no extent.
    #[must_use]
    pub fn scroll_fraction(&self) -> Vec2 {
        let frac = |offset: f64, extent: f64| if extent > 0.0 { offset / extent } else { 0.0 };
        Vec2::new(
            frac(self.scroll.x, self.content.width),
            frac(self.scroll.y, self.content.height),
        )
    }

    /// Jumps to the semantically "start" edge of the given reading direction.
    ///
    /// Right-to-left starts at the maximal horizontal offset and left-to-right
    /// at zero; bottom-to-top starts at the maximal vertical offset and
    /// top-to-bottom at zero. Only the axis the direction reads along moves.
    pub fn scroll_to_start_edge(&mut self, direction: ScrollDirection) {
        let max = self.max_scroll();
        match direction {
            ScrollDirection::LeftToRight => self.scroll.x = 0.0,
            ScrollDirection::RightToLeft => self.scroll.x = max.x,
            ScrollDirection::TopToBottom => self.scroll.y = 0.0,
            ScrollDirection::BottomToTop => self.scroll.y = max.y,
        }
    }
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new(Size::ZERO, Size::ZERO)
    }
}

fn sanitize(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}
