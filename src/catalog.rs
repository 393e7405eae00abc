// SPDX-License-Identifier: MPL-2.0
//! Static, ordered page collection.
//!
//! The catalog is built once at startup from the configured page list and
//! never changes afterwards. Page ids must be unique; they need not be dense
//! or sorted, so every lookup goes through [`PageCatalog::index_of`].

use crate::config::{REFERENCE_IMAGE_PREFIX, REFERENCE_PAGE_COUNT};
use crate::domain::page::{Page, PageId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One `[[pages]]` entry of a settings or catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub id: u32,
    pub image: String,
}

impl PageEntry {
    #[must_use]
    pub fn new(id: u32, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
        }
    }
}

/// Standalone catalog file layout (`--catalog <file>`).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    pages: Vec<PageEntry>,
}

/// Ordered, read-only page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Vec<Page>,
}

impl PageCatalog {
    /// Builds a catalog from pages in display order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] for an empty list and
    /// [`Error::DuplicatePage`] if two pages share an id.
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen.insert(page.id()) {
                return Err(Error::DuplicatePage {
                    id: page.id().value(),
                });
            }
        }

        Ok(Self { pages })
    }

    /// Builds a catalog from configuration entries.
    ///
    /// # Errors
    ///
    /// Same as [`PageCatalog::new`].
    pub fn from_entries(entries: impl IntoIterator<Item = PageEntry>) -> Result<Self> {
        Self::new(
            entries
                .into_iter()
                .map(|entry| Page::new(entry.id, entry.image))
                .collect(),
        )
    }

    /// Returns the built-in reference catalog: pages `1..=6` named
    /// `magazine-page-<id>`.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            pages: (1..=REFERENCE_PAGE_COUNT)
                .map(|id| Page::new(id, format!("{REFERENCE_IMAGE_PREFIX}{id}")))
                .collect(),
        }
    }

    /// Loads a standalone catalog file containing `[[pages]]` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// describes an invalid catalog.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        Self::from_entries(file.pages)
    }

    /// Returns the number of pages. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the page at the given display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Returns the first page in display order.
    #[must_use]
    pub fn first(&self) -> &Page {
        // Construction rejects empty lists.
        &self.pages[0]
    }

    /// Returns the display position of the page with the given id.
    #[must_use]
    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    /// Returns the page with the given id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.index_of(id).map(|index| &self.pages[index])
    }

    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.index_of(id).is_some()
    }

    /// Iterates pages in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}
