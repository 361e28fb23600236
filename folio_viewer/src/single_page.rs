// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_pages::{PageNavigator, SwitchRequest};
use folio_scroll::WheelInput;
use folio_transform::{
    AnchorTracker, InteractionLocks, PanDrag, PointerButton, ViewerTransform, ZOOM_STEP_IN,
    ZOOM_STEP_OUT, zoom_by,
};
use kurbo::{Point, Size, Vec2};

use crate::notify::NotificationSink;

/// Discrete key commands understood by the single-page viewer.
///
/// Hosts map raw key events onto these; the viewer does not know about
/// keyboard layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// A digit keystroke feeding the go-to-page entry.
    Digit(char),
    /// Flip to the previous page.
    PreviousPage,
    /// Flip to the next page.
    NextPage,
    /// Confirm the pending go-to-page entry.
    Confirm,
    /// Zoom in one step around the last pointer position.
    ZoomIn,
    /// Zoom out one step around the last pointer position.
    ZoomOut,
    /// Toggle keeping the scale across page changes.
    ToggleScaleLock,
    /// Toggle keeping the pan offset across page changes.
    TogglePositionLock,
}

/// Headless single-page reading surface.
///
/// The viewer owns every piece of interaction state for one mounted page
/// view: the pan/zoom transform, the pointer anchor, the drag gesture, the
/// reset locks, and the numeric go-to-page entry. Event handlers mutate that
/// state synchronously and hand back any [`SwitchRequest`] the host must
/// resolve against its page set.
///
/// The host remains responsible for geometry: it reports the rendered size
/// of the scaled page via [`SinglePageViewer::set_rendered_size`] (zoom
/// steps are skipped while no size is known) and passes the container origin
/// with pointer events when the container is measurable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SinglePageViewer {
    transform: ViewerTransform,
    anchor: AnchorTracker,
    drag: PanDrag,
    locks: InteractionLocks,
    nav: PageNavigator,
    rendered: Option<Size>,
}

impl SinglePageViewer {
    /// Creates an unmounted viewer with identity state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the viewer state for a fresh mount.
    ///
    /// Transform and anchor live per mount: both come up as if no page had
    /// ever been shown. Locks also reset — they are a per-session toggle the
    /// reader re-engages deliberately.
    pub fn mount(&mut self) {
        *self = Self::default();
    }

    /// Disposes the per-mount state.
    ///
    /// The host must also detach its document-level pointer-up listener;
    /// the viewer only drops what it owns.
    pub fn unmount(&mut self) {
        *self = Self::default();
    }

    /// Returns the current pan/zoom transform for projection.
    #[must_use]
    pub fn transform(&self) -> ViewerTransform {
        self.transform
    }

    /// Returns the current reset locks.
    #[must_use]
    pub fn locks(&self) -> InteractionLocks {
        self.locks
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns the digits pending in the go-to-page entry.
    #[must_use]
    pub fn pending_digits(&self) -> &str {
        self.nav.pending_digits()
    }

    /// Reports the rendered (on-screen) size of the scaled page, or `None`
    /// while layout has not produced one.
    pub fn set_rendered_size(&mut self, rendered: Option<Size>) {
        self.rendered = rendered;
    }

    /// Handles a pointer press inside the viewer.
    pub fn on_pointer_down(&mut self, button: PointerButton) {
        self.drag.press(button);
    }

    /// Handles a pointer release anywhere in the document.
    ///
    /// Wired at the document level so releasing outside the viewer still
    /// ends the gesture.
    pub fn on_pointer_up(&mut self) {
        self.drag.release();
    }

    /// Handles pointer movement.
    ///
    /// The anchor refreshes whenever the container is measurable; the
    /// transform pans only while a drag gesture is active.
    pub fn on_pointer_move(
        &mut self,
        pointer_screen: Point,
        movement: Vec2,
        container_origin: Option<Point>,
    ) {
        if let Some(origin) = container_origin {
            self.anchor.update(pointer_screen, origin);
        }
        if let Some(dragged) = self.drag.drag(self.transform, movement) {
            self.transform = dragged;
        }
    }

    /// Handles a wheel event.
    ///
    /// With the zoom modifier held the wheel zooms around the pointer
    /// anchor. Without it, a tick flips the page: the transform resets as
    /// the locks allow and the switch request is returned for the host to
    /// resolve.
    pub fn on_wheel(
        &mut self,
        input: WheelInput,
        pointer_screen: Option<Point>,
        container_origin: Option<Point>,
    ) -> Option<SwitchRequest> {
        if let (Some(screen), Some(origin)) = (pointer_screen, container_origin) {
            self.anchor.update(screen, origin);
        }

        if input.zoom_modifier {
            if input.delta_y < 0.0 {
                self.zoom_step(ZOOM_STEP_IN);
            } else if input.delta_y > 0.0 {
                self.zoom_step(ZOOM_STEP_OUT);
            }
            return None;
        }

        let request = self.nav.wheel(input.delta_y);
        if request.is_some() {
            self.transform.reset_for_navigation(self.locks);
        }
        request
    }

    /// Handles a discrete key command.
    ///
    /// Returns the switch request the command produced, if any. Lock
    /// toggles report their new state through the notification sink.
    pub fn on_key<N: NotificationSink + ?Sized>(
        &mut self,
        key: PageKey,
        sink: &N,
    ) -> Option<SwitchRequest> {
        match key {
            PageKey::Digit(ch) => {
                self.nav.digit(ch);
                None
            }
            PageKey::NextPage => {
                self.transform.reset_for_navigation(self.locks);
                Some(self.nav.next())
            }
            PageKey::PreviousPage => {
                self.transform.reset_for_navigation(self.locks);
                Some(self.nav.previous())
            }
            PageKey::Confirm => {
                let request = self.nav.confirm();
                if request.is_some() {
                    self.transform.reset_for_navigation(self.locks);
                }
                request
            }
            PageKey::ZoomIn => {
                self.zoom_step(ZOOM_STEP_IN);
                None
            }
            PageKey::ZoomOut => {
                self.zoom_step(ZOOM_STEP_OUT);
                None
            }
            PageKey::ToggleScaleLock => {
                self.locks.toggle(InteractionLocks::LOCK_SCALE);
                let on = self.locks.contains(InteractionLocks::LOCK_SCALE);
                sink.hint_text(&["scale lock", if on { "on" } else { "off" }]);
                None
            }
            PageKey::TogglePositionLock => {
                self.locks.toggle(InteractionLocks::LOCK_POSITION);
                let on = self.locks.contains(InteractionLocks::LOCK_POSITION);
                sink.hint_text(&["position lock", if on { "on" } else { "off" }]);
                None
            }
        }
    }

    /// Applies one zoom step around the last observed pointer position.
    ///
    /// Skipped while no rendered size is known; layout timing is not
    /// guaranteed and an unmeasured page must not move.
    fn zoom_step(&mut self, factor: f64) {
        if let Some(rendered) = self.rendered {
            self.transform = zoom_by(self.transform, self.anchor.anchor_or_origin(), rendered, factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_pages::SwitchRequest;
    use folio_scroll::WheelInput;
    use folio_transform::{PointerButton, ViewerTransform};
    use kurbo::{Point, Size, Vec2};

    use super::{PageKey, SinglePageViewer};
    use crate::notify::NotificationSink;

    #[derive(Default)]
    struct RecordingSink {
        hints: RefCell<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        fn open_notification(&self, message: &str, _detail: Option<&str>) {
            self.hints.borrow_mut().push(message.to_owned());
        }

        fn hint_text(&self, segments: &[&str]) {
            self.hints.borrow_mut().push(segments.join(" "));
        }
    }

    fn mounted() -> SinglePageViewer {
        let mut viewer = SinglePageViewer::new();
        viewer.mount();
        viewer.set_rendered_size(Some(Size::new(200.0, 200.0)));
        viewer
    }

    #[test]
    fn plain_wheel_up_requests_the_previous_page_and_resets() {
        let mut viewer = mounted();

        // Pan and zoom away from identity first.
        viewer.on_pointer_down(PointerButton::Primary);
        viewer.on_pointer_move(Point::new(50.0, 50.0), Vec2::new(30.0, 40.0), Some(Point::ZERO));
        viewer.on_pointer_up();
        assert_ne!(viewer.transform(), ViewerTransform::IDENTITY);

        let request = viewer.on_wheel(WheelInput::plain(-120.0), None, None);
        assert_eq!(request, Some(SwitchRequest::Delta(-1)));
        assert_eq!(viewer.transform(), ViewerTransform::IDENTITY);
    }

    #[test]
    fn zoom_modifier_zooms_instead_of_flipping() {
        let mut viewer = mounted();
        let request = viewer.on_wheel(
            WheelInput::zooming(-120.0),
            Some(Point::new(100.0, 100.0)),
            Some(Point::ZERO),
        );
        assert_eq!(request, None);
        assert!((viewer.transform().scale - core::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn zoom_is_skipped_while_the_page_is_unmeasured() {
        let mut viewer = mounted();
        viewer.set_rendered_size(None);
        let sink = RecordingSink::default();
        viewer.on_key(PageKey::ZoomIn, &sink);
        assert_eq!(viewer.transform(), ViewerTransform::IDENTITY);
    }

    #[test]
    fn digits_and_confirm_produce_a_goto_and_reset() {
        let mut viewer = mounted();
        let sink = RecordingSink::default();

        for ch in ['0', '1', '2'] {
            assert_eq!(viewer.on_key(PageKey::Digit(ch), &sink), None);
        }
        assert_eq!(viewer.pending_digits(), "012");

        let request = viewer.on_key(PageKey::Confirm, &sink);
        assert_eq!(request, Some(SwitchRequest::Goto(12)));
        assert_eq!(viewer.pending_digits(), "");

        // An empty confirm navigates nowhere.
        assert_eq!(viewer.on_key(PageKey::Confirm, &sink), None);
    }

    #[test]
    fn locks_gate_the_navigation_reset() {
        let mut viewer = mounted();
        let sink = RecordingSink::default();

        // Zoom and pan away from identity.
        viewer.on_key(PageKey::ZoomIn, &sink);
        viewer.on_pointer_down(PointerButton::Primary);
        viewer.on_pointer_move(Point::ZERO, Vec2::new(11.0, -3.0), None);
        viewer.on_pointer_up();
        let moved = viewer.transform();

        viewer.on_key(PageKey::ToggleScaleLock, &sink);
        viewer.on_key(PageKey::TogglePositionLock, &sink);
        assert_eq!(viewer.on_key(PageKey::NextPage, &sink), Some(SwitchRequest::Delta(1)));
        // Both locks held: flipping pages keeps the view.
        assert_eq!(viewer.transform(), moved);

        viewer.on_key(PageKey::TogglePositionLock, &sink);
        viewer.on_key(PageKey::NextPage, &sink);
        // Scale survives, position resets.
        assert_eq!(viewer.transform().scale, moved.scale);
        assert_eq!(viewer.transform().offset, Vec2::ZERO);
    }

    #[test]
    fn lock_toggles_surface_their_state() {
        let mut viewer = mounted();
        let sink = RecordingSink::default();
        viewer.on_key(PageKey::ToggleScaleLock, &sink);
        viewer.on_key(PageKey::ToggleScaleLock, &sink);
        assert_eq!(
            *sink.hints.borrow(),
            vec!["scale lock on".to_owned(), "scale lock off".to_owned()]
        );
    }

    #[test]
    fn drag_only_pans_between_press_and_release() {
        let mut viewer = mounted();

        viewer.on_pointer_move(Point::ZERO, Vec2::new(5.0, 5.0), None);
        assert_eq!(viewer.transform().offset, Vec2::ZERO);

        viewer.on_pointer_down(PointerButton::Secondary);
        viewer.on_pointer_move(Point::ZERO, Vec2::new(5.0, 5.0), None);
        assert_eq!(viewer.transform().offset, Vec2::ZERO);

        viewer.on_pointer_down(PointerButton::Primary);
        viewer.on_pointer_move(Point::ZERO, Vec2::new(5.0, 5.0), None);
        assert_eq!(viewer.transform().offset, Vec2::new(5.0, 5.0));

        // Release may land outside the viewer.
        viewer.on_pointer_up();
        viewer.on_pointer_move(Point::ZERO, Vec2::new(5.0, 5.0), None);
        assert_eq!(viewer.transform().offset, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn unmount_drops_all_per_mount_state() {
        let mut viewer = mounted();
        let sink = RecordingSink::default();
        viewer.on_key(PageKey::Digit('7'), &sink);
        viewer.on_key(PageKey::ZoomIn, &sink);
        viewer.unmount();

        assert_eq!(viewer.transform(), ViewerTransform::IDENTITY);
        assert_eq!(viewer.pending_digits(), "");
        assert!(!viewer.is_dragging());
    }
}
