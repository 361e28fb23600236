// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Store: directory preference records and the store interface that
//! persists them.
//!
//! A viewer session keeps one small record per imported directory: the
//! directory's URL and, optionally, the reading direction the user chose for
//! it. The record is upserted by URL into a local embedded document store —
//! a store this crate deliberately does not implement. Hosts provide the
//! backend behind the [`DirectoryStore`] trait; this crate supplies:
//!
//! - [`DirectoryRecord`]: the persisted shape, with `serde` derives matching
//!   the conventional layout (`url` plus an optional two-letter
//!   `scrollModeDirection` code).
//! - [`DirectoryStore`]: find-all, find-one-by-url, upsert-by-url.
//! - Fire-and-forget helpers ([`remember_directory`], [`persist_direction`])
//!   that apply the write conventions of the viewer: preference writes are
//!   best-effort, never awaited by visible state, never retried, and
//!   downgraded to a `log::warn!` when they fail.
//! - [`MemoryDirectoryStore`]: a map-backed store for tests and ephemeral
//!   sessions.
//!
//! The accepted failure mode is losing the most recent preference change;
//! nothing in the viewing path ever blocks on the store.

mod memory;
mod record;
mod store;

pub use memory::MemoryDirectoryStore;
pub use record::DirectoryRecord;
pub use store::{DirectoryStore, StoreError, persist_direction, remember_directory};
