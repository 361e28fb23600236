// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::record::DirectoryRecord;
use crate::store::{DirectoryStore, StoreError};

/// Map-backed [`DirectoryStore`] for tests and ephemeral sessions.
///
/// Nothing is written to disk; every operation succeeds.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectoryStore {
    records: HashMap<String, DirectoryRecord>,
}

impl MemoryDirectoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn find_all(&self) -> Result<Vec<DirectoryRecord>, StoreError> {
        Ok(self.records.values().cloned().collect())
    }

    fn find_one(&self, url: &str) -> Result<Option<DirectoryRecord>, StoreError> {
        Ok(self.records.get(url).cloned())
    }

    fn upsert(&mut self, record: DirectoryRecord) -> Result<(), StoreError> {
        self.records.insert(record.url.clone(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use folio_scroll::ScrollDirection;

    use super::MemoryDirectoryStore;
    use crate::record::DirectoryRecord;
    use crate::store::DirectoryStore;

    #[test]
    fn find_one_returns_exactly_the_upserted_record() {
        let mut store = MemoryDirectoryStore::new();
        assert!(store.is_empty());

        let record =
            DirectoryRecord::new("file:///comics/alpha").with_direction(ScrollDirection::BottomToTop);
        store.upsert(record.clone()).unwrap();

        assert_eq!(store.find_one("file:///comics/alpha").unwrap(), Some(record));
        assert_eq!(store.find_one("file:///comics/other").unwrap(), None);
    }

    #[test]
    fn upsert_replaces_by_url() {
        let mut store = MemoryDirectoryStore::new();
        store
            .upsert(DirectoryRecord::new("u").with_direction(ScrollDirection::TopToBottom))
            .unwrap();
        store
            .upsert(DirectoryRecord::new("u").with_direction(ScrollDirection::RightToLeft))
            .unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.find_one("u").unwrap().unwrap();
        assert_eq!(stored.scroll_mode_direction, Some(ScrollDirection::RightToLeft));
    }
}
