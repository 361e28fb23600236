// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::node::TreeNode;

/// How much of a directory a [`DirectoryProvider::load_dir`] call enumerates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Number of directory levels to enumerate below the target.
    pub level: usize,
    /// Key suffix to append to generated child keys, disambiguating
    /// duplicate imports of the same directory.
    pub key_suffix: Option<String>,
}

impl LoadOptions {
    /// The options the tree model uses when expanding a node: one level,
    /// suffix derived by the provider from the node key itself.
    #[must_use]
    pub fn one_level() -> Self {
        Self {
            level: 1,
            key_suffix: None,
        }
    }
}

/// Failure reported while enumerating a directory.
#[derive(Error, Debug)]
pub enum LoadDirError {
    /// The directory could not be read.
    #[error("failed to enumerate {path}: {reason}")]
    Unreadable {
        /// The directory that failed to enumerate.
        path: String,
        /// Provider-supplied description of the failure.
        reason: String,
    },
    /// The key did not resolve to a directory.
    #[error("{path} is not a directory")]
    NotADirectory {
        /// The offending path.
        path: String,
    },
}

/// File-enumeration collaborator behind the directory tree.
///
/// The tree model never touches the file system; providers own path syntax,
/// key construction, and enumeration. The provider is also the side that
/// emits [`DirectoryOpened`](crate::DirectoryOpened) signals back into the
/// model once an import completes.
pub trait DirectoryProvider {
    /// Begins importing a directory; the resulting tree arrives later as a
    /// [`DirectoryOpened`](crate::DirectoryOpened) signal.
    ///
    /// `is_auto_import` distinguishes session-restore imports (already
    /// persisted) from fresh user imports.
    fn open_dir_by_import(&mut self, path: &str, is_auto_import: bool);

    /// Enumerates one or more levels below the directory identified by
    /// `key`, returning the loaded subtree.
    fn load_dir(&mut self, key: &str, options: &LoadOptions) -> Result<TreeNode, LoadDirError>;

    /// Derives the directory URL from a node key.
    ///
    /// The default treats keys as plain URLs; providers that pack a suffix
    /// into their keys override this.
    fn key_url(&self, key: &str) -> String {
        key.to_owned()
    }
}
