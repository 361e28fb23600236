// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_store::{DirectoryStore, remember_directory};
use thiserror::Error;

use crate::node::TreeNode;
use crate::provider::{DirectoryProvider, LoadDirError, LoadOptions};

/// Inbound signal that a directory import finished.
///
/// Delivered by the host's messaging layer once the provider has opened a
/// directory, whether from a fresh user import or a session-restore
/// auto-import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryOpened {
    /// `true` when this import replays a persisted directory.
    pub auto_import: bool,
    /// The root node of the opened directory.
    pub tree: TreeNode,
}

/// Failure while expanding a tree node.
#[derive(Error, Debug)]
pub enum TreeError {
    /// No node with the given key exists in the tree.
    #[error("no tree node with key {key}")]
    UnknownKey {
        /// The key that did not resolve.
        key: String,
    },
    /// The provider failed to enumerate the directory.
    #[error(transparent)]
    Load(#[from] LoadDirError),
}

/// Outcome of [`DirectoryTreeModel::load_children`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildLoad {
    /// A level was fetched from the provider and grafted in place.
    Grafted,
    /// The node's children were already loaded; nothing was fetched.
    AlreadyLoaded,
}

/// Ordered collection of imported directory roots with lazy child loading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryTreeModel {
    roots: Vec<TreeNode>,
    last_selected: Option<String>,
}

impl DirectoryTreeModel {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the imported roots in import order.
    #[must_use]
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Returns the key of the most recently selected node, if any.
    #[must_use]
    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    /// Appends the root delivered by a "directory opened" signal.
    ///
    /// Fresh user imports are remembered in the store so the next session
    /// auto-imports them; replayed imports are already persisted and are
    /// not written again. The write is best-effort.
    pub fn handle_directory_opened<S, P>(
        &mut self,
        signal: DirectoryOpened,
        store: &mut S,
        provider: &P,
    ) where
        S: DirectoryStore + ?Sized,
        P: DirectoryProvider + ?Sized,
    {
        if !signal.auto_import {
            let url = provider.key_url(&signal.tree.key);
            remember_directory(store, &url);
        }
        self.roots.push(signal.tree);
    }

    /// Loads one level of children for the node with the given key.
    ///
    /// Nodes whose children are already present resolve immediately without
    /// touching the provider, so repeated expansion is idempotent.
    pub fn load_children<P>(&mut self, key: &str, provider: &mut P) -> Result<ChildLoad, TreeError>
    where
        P: DirectoryProvider + ?Sized,
    {
        let node = self
            .find_mut(key)
            .ok_or_else(|| TreeError::UnknownKey { key: key.to_owned() })?;
        if node.is_loaded() {
            return Ok(ChildLoad::AlreadyLoaded);
        }

        let loaded = provider.load_dir(key, &LoadOptions::one_level())?;
        // Re-resolve: the borrow on `node` cannot live across the provider
        // call, which may mutate the provider but never the tree.
        if let Some(node) = self.find_mut(key) {
            node.children = Some(loaded.children.unwrap_or_default());
        }
        Ok(ChildLoad::Grafted)
    }

    /// Records a selection and returns the directory URL to load from.
    pub fn select<P>(&mut self, key: &str, provider: &P) -> String
    where
        P: DirectoryProvider + ?Sized,
    {
        self.last_selected = Some(key.to_owned());
        provider.key_url(key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut TreeNode> {
        self.roots.iter_mut().find_map(|root| root.find_mut(key))
    }
}

/// Replays every persisted directory through the provider on startup.
///
/// Each stored record triggers `open_dir_by_import(url, true)`; the opened
/// trees come back asynchronously as [`DirectoryOpened`] signals. A store
/// read failure is logged and leaves the session empty rather than failing
/// startup.
pub fn auto_import_all<S, P>(store: &S, provider: &mut P)
where
    S: DirectoryStore + ?Sized,
    P: DirectoryProvider + ?Sized,
{
    let records = match store.find_all() {
        Ok(records) => records,
        Err(err) => {
            log::warn!("failed to enumerate persisted directories: {err}");
            return;
        }
    };
    for record in records {
        provider.open_dir_by_import(&record.url, true);
    }
}
