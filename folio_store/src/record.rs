// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_scroll::ScrollDirection;
use serde::{Deserialize, Serialize};

/// Persisted preferences for one imported directory.
///
/// One record exists per imported directory, keyed and upserted by `url`.
/// The reading direction is absent until the user picks one, and serializes
/// as its two-letter code (`"TB"`, `"BT"`, `"LR"`, `"RL"`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// Location of the imported directory; the record key.
    pub url: String,
    /// Reading direction the user chose for this directory, if any.
    #[serde(
        rename = "scrollModeDirection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_mode_direction: Option<ScrollDirection>,
}

impl DirectoryRecord {
    /// Creates a record with no stored preferences.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scroll_mode_direction: None,
        }
    }

    /// Returns a copy with the reading direction set.
    #[must_use]
    pub fn with_direction(mut self, direction: ScrollDirection) -> Self {
        self.scroll_mode_direction = Some(direction);
        self
    }
}
