// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// User toggles that suppress the automatic transform reset on page
    /// navigation.
    ///
    /// Locks are flipped by explicit user commands and consulted by
    /// [`ViewerTransform::reset_for_navigation`](crate::ViewerTransform::reset_for_navigation).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InteractionLocks: u8 {
        /// Keep the current scale across page changes.
        const LOCK_SCALE    = 0b0000_0001;
        /// Keep the current translation offset across page changes.
        const LOCK_POSITION = 0b0000_0010;
    }
}
