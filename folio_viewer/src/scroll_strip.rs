// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_scroll::{ScrollDirection, ScrollModeController, ScrollRegion, WheelInput};
use folio_store::{DirectoryStore, persist_direction};
use folio_transform::PointerButton;
use kurbo::Vec2;

use crate::notify::NotificationSink;

/// Discrete key commands understood by the scroll-strip viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StripKey {
    /// Switch the reading direction.
    Read(ScrollDirection),
    /// Zoom the strip container in one step.
    ZoomIn,
    /// Zoom the strip container out one step.
    ZoomOut,
}

/// Maps the numpad-style direction keys to reading directions.
///
/// `2` reads downward, `8` upward, `4` leftward (right-to-left), `6`
/// rightward — the digits mirror the arrows of a numeric keypad.
#[must_use]
pub fn direction_for_digit(ch: char) -> Option<ScrollDirection> {
    match ch {
        '2' => Some(ScrollDirection::TopToBottom),
        '8' => Some(ScrollDirection::BottomToTop),
        '4' => Some(ScrollDirection::RightToLeft),
        '6' => Some(ScrollDirection::LeftToRight),
        _ => None,
    }
}

/// Headless scrolling-strip reading surface.
///
/// The viewer owns the directional scroll state for one directory's strip.
/// The reading direction is a per-directory preference: it is restored from
/// the directory store on mount and written back, best-effort, whenever the
/// reader picks a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollStripViewer {
    directory_url: String,
    controller: ScrollModeController,
}

impl ScrollStripViewer {
    /// Creates a strip viewer for the directory identified by `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, region: ScrollRegion) -> Self {
        Self {
            directory_url: url.into(),
            controller: ScrollModeController::new(region),
        }
    }

    /// Returns the directory this strip reads from.
    #[must_use]
    pub fn directory_url(&self) -> &str {
        &self.directory_url
    }

    /// Returns the current reading direction.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.controller.direction()
    }

    /// Returns the scroll controller for projection.
    #[must_use]
    pub fn controller(&self) -> &ScrollModeController {
        &self.controller
    }

    /// Returns the scroll controller for direct mutation (measured extents).
    pub fn controller_mut(&mut self) -> &mut ScrollModeController {
        &mut self.controller
    }

    /// Restores the persisted reading direction for this directory.
    ///
    /// Directories without a stored preference read left-to-right. A store
    /// read failure is logged and falls back to the default; mounting never
    /// fails.
    pub fn mount<S: DirectoryStore + ?Sized>(&mut self, store: &S) {
        let direction = match store.find_one(&self.directory_url) {
            Ok(record) => record
                .and_then(|r| r.scroll_mode_direction)
                .unwrap_or_default(),
            Err(err) => {
                log::warn!(
                    "failed to restore reading direction for {}: {err}",
                    self.directory_url
                );
                ScrollDirection::default()
            }
        };
        self.controller.set_direction(direction);
    }

    /// Ends any in-flight gesture before the strip goes away.
    pub fn unmount(&mut self) {
        self.controller.stop_drag();
    }

    /// Handles a discrete key command.
    ///
    /// Direction picks persist to the store (best-effort) and surface the
    /// new reading order through the notification sink.
    pub fn on_key<S, N>(&mut self, key: StripKey, store: &mut S, sink: &N)
    where
        S: DirectoryStore + ?Sized,
        N: NotificationSink + ?Sized,
    {
        match key {
            StripKey::Read(direction) => {
                self.controller.set_direction(direction);
                persist_direction(store, &self.directory_url, direction);
                sink.hint_text(&["reading direction", direction.code()]);
            }
            StripKey::ZoomIn => self.controller.zoom_in(),
            StripKey::ZoomOut => self.controller.zoom_out(),
        }
    }

    /// Routes a wheel event into scrolling or container zoom.
    pub fn on_wheel(&mut self, input: WheelInput) {
        self.controller.handle_wheel(input);
    }

    /// Handles a pointer press inside the strip.
    pub fn on_pointer_down(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.controller.start_drag();
        }
    }

    /// Handles a pointer release anywhere in the document.
    pub fn on_pointer_up(&mut self) {
        self.controller.stop_drag();
    }

    /// Applies pointer movement to the drag-to-scroll gesture.
    pub fn on_pointer_move(&mut self, movement: Vec2) {
        self.controller.handle_drag_move(movement);
    }
}
