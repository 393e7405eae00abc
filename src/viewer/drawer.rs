// SPDX-License-Identifier: MPL-2.0
//! Thumbnail drawer state management
//!
//! Tracks whether the slide-out thumbnail strip is open and which page is
//! selected. The drawer knows nothing about viewports; resetting the newly
//! selected page's viewport is the caller's job.

use crate::catalog::PageCatalog;
use crate::domain::page::PageId;
use crate::error::{Error, Result};

/// Drawer visibility and page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    /// Whether the thumbnail drawer is shown.
    pub is_open: bool,

    /// Display position of the selected page in the catalog.
    pub current_page_index: usize,
}

/// Manages the thumbnail drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerController {
    state: DrawerState,
}

impl DrawerController {
    /// Creates a closed drawer with the first page selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn current_page_index(&self) -> usize {
        self.state.current_page_index
    }

    /// Flips the drawer open/closed and returns the new visibility.
    pub fn toggle_drawer(&mut self) -> bool {
        self.state.is_open = !self.state.is_open;
        self.state.is_open
    }

    /// Selects the page with the given id and returns its catalog index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPage`] if the catalog has no such page; the
    /// drawer state is left untouched.
    pub fn select_page(&mut self, catalog: &PageCatalog, id: PageId) -> Result<usize> {
        let index = catalog
            .index_of(id)
            .ok_or(Error::InvalidPage { id: id.value() })?;
        self.state.current_page_index = index;
        Ok(index)
    }
}
