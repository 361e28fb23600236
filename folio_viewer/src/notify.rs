// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_pages::EdgeCrossing;

/// Toast/hint surface provided by the hosting shell.
///
/// Both calls are fire-and-forget: nothing is returned and the viewer never
/// waits on, or reacts to, their delivery.
pub trait NotificationSink {
    /// Raises a user-visible notification with an optional detail line.
    fn open_notification(&self, message: &str, detail: Option<&str>);

    /// Shows a segmented hint (typically a key legend or state readout).
    fn hint_text(&self, segments: &[&str]);
}

/// Surfaces a page-boundary crossing as a notification.
///
/// Hosts call this after resolving a switch request whose outcome reports an
/// edge; in-range navigations stay silent.
pub fn announce_edge<N: NotificationSink + ?Sized>(sink: &N, edge: EdgeCrossing) {
    let message = match edge {
        EdgeCrossing::WrappedToStart => "Reached the last page, continuing from the first",
        EdgeCrossing::WrappedToEnd => "Reached the first page, continuing from the last",
        EdgeCrossing::ClampedAtEnd => "Already on the last page",
        EdgeCrossing::ClampedAtStart => "Already on the first page",
    };
    sink.open_notification(message, None);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio_pages::EdgeCrossing;

    use super::{NotificationSink, announce_edge};

    #[derive(Default)]
    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        fn open_notification(&self, message: &str, _detail: Option<&str>) {
            self.messages.borrow_mut().push(message.to_owned());
        }

        fn hint_text(&self, segments: &[&str]) {
            self.messages.borrow_mut().push(segments.join(" "));
        }
    }

    #[test]
    fn every_edge_produces_one_notification() {
        let sink = RecordingSink::default();
        for edge in [
            EdgeCrossing::WrappedToStart,
            EdgeCrossing::WrappedToEnd,
            EdgeCrossing::ClampedAtStart,
            EdgeCrossing::ClampedAtEnd,
        ] {
            announce_edge(&sink, edge);
        }
        assert_eq!(sink.messages.borrow().len(), 4);
    }
}
