// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_scroll::ScrollDirection;
use thiserror::Error;

use crate::record::DirectoryRecord;

/// Failure reported by a store backend.
///
/// Store errors never reach viewer state; the fire-and-forget helpers in
/// this module downgrade them to warnings.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not complete the operation.
    #[error("store backend failure: {0}")]
    Backend(String),
    /// A stored record could not be decoded.
    #[error("record for {url} is malformed: {reason}")]
    Malformed {
        /// Key of the offending record.
        url: String,
        /// Backend-supplied description of the problem.
        reason: String,
    },
}

/// A local embedded document store of directory preference records.
///
/// Implementations map directory URLs to [`DirectoryRecord`]s with
/// last-write-wins semantics. The viewer only ever issues the three
/// operations below; store lifecycle (opening, compaction, migration) is
/// entirely the host's concern.
pub trait DirectoryStore {
    /// Returns every stored record.
    fn find_all(&self) -> Result<Vec<DirectoryRecord>, StoreError>;

    /// Returns the record for `url`, if one exists.
    fn find_one(&self, url: &str) -> Result<Option<DirectoryRecord>, StoreError>;

    /// Inserts or replaces the record keyed by its `url`.
    fn upsert(&mut self, record: DirectoryRecord) -> Result<(), StoreError>;
}

/// Records an imported directory, best-effort.
///
/// An existing record is left untouched so a previously chosen reading
/// direction survives re-import. Failures are logged and swallowed; the
/// accepted data loss is that the directory must be imported again next
/// session.
pub fn remember_directory<S: DirectoryStore + ?Sized>(store: &mut S, url: &str) {
    match store.find_one(url) {
        Ok(Some(_)) => {}
        Ok(None) => {
            if let Err(err) = store.upsert(DirectoryRecord::new(url)) {
                log::warn!("failed to remember directory {url}: {err}");
            }
        }
        Err(err) => {
            log::warn!("failed to look up directory {url}: {err}");
        }
    }
}

/// Persists the reading direction chosen for a directory, best-effort.
///
/// Other fields of an existing record are preserved. Failures are logged
/// and swallowed, never retried; the accepted data loss is the most recent
/// preference change.
pub fn persist_direction<S: DirectoryStore + ?Sized>(
    store: &mut S,
    url: &str,
    direction: ScrollDirection,
) {
    let record = match store.find_one(url) {
        Ok(Some(existing)) => existing.with_direction(direction),
        Ok(None) => DirectoryRecord::new(url).with_direction(direction),
        Err(err) => {
            log::warn!("failed to look up directory {url}: {err}");
            DirectoryRecord::new(url).with_direction(direction)
        }
    };
    if let Err(err) = store.upsert(record) {
        log::warn!("failed to persist reading direction for {url}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use folio_scroll::ScrollDirection;

    use super::{DirectoryStore, StoreError, persist_direction, remember_directory};
    use crate::memory::MemoryDirectoryStore;
    use crate::record::DirectoryRecord;

    /// A store whose writes always fail.
    struct BrokenStore;

    impl DirectoryStore for BrokenStore {
        fn find_all(&self) -> Result<Vec<DirectoryRecord>, StoreError> {
            Err(StoreError::Backend("disk gone".into()))
        }

        fn find_one(&self, _url: &str) -> Result<Option<DirectoryRecord>, StoreError> {
            Err(StoreError::Backend("disk gone".into()))
        }

        fn upsert(&mut self, _record: DirectoryRecord) -> Result<(), StoreError> {
            Err(StoreError::Backend("disk gone".into()))
        }
    }

    #[test]
    fn remember_directory_inserts_once() {
        let mut store = MemoryDirectoryStore::default();
        remember_directory(&mut store, "file:///comics/alpha");
        remember_directory(&mut store, "file:///comics/alpha");
        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn remember_directory_preserves_an_existing_direction() {
        let mut store = MemoryDirectoryStore::default();
        persist_direction(&mut store, "file:///comics/alpha", ScrollDirection::RightToLeft);
        remember_directory(&mut store, "file:///comics/alpha");

        let record = store.find_one("file:///comics/alpha").unwrap().unwrap();
        assert_eq!(
            record.scroll_mode_direction,
            Some(ScrollDirection::RightToLeft)
        );
    }

    #[test]
    fn persist_direction_upserts_by_url() {
        let mut store = MemoryDirectoryStore::default();
        persist_direction(&mut store, "file:///comics/alpha", ScrollDirection::TopToBottom);
        persist_direction(&mut store, "file:///comics/alpha", ScrollDirection::BottomToTop);

        // Last write wins; still one record.
        assert_eq!(store.find_all().unwrap().len(), 1);
        let record = store.find_one("file:///comics/alpha").unwrap().unwrap();
        assert_eq!(
            record.scroll_mode_direction,
            Some(ScrollDirection::BottomToTop)
        );
    }

    #[test]
    fn failed_writes_are_swallowed() {
        let mut store = BrokenStore;
        // Neither call may panic or surface the error.
        remember_directory(&mut store, "file:///comics/alpha");
        persist_direction(&mut store, "file:///comics/alpha", ScrollDirection::LeftToRight);
    }
}
