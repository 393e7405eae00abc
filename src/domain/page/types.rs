// SPDX-License-Identifier: MPL-2.0
//! Page identity and image references.

use std::fmt;

/// Prefix prepended to an image reference to derive its thumbnail reference.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Stable page identifier.
///
/// Identifiers are unique within a catalog. Reference data numbers pages
/// densely from 1, but nothing relies on that: lookups go through the
/// catalog, never through arithmetic on the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u32);

impl PageId {
    /// Creates a page identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single magazine page. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    image_ref: String,
}

impl Page {
    /// Creates a page from its identifier and image reference.
    #[must_use]
    pub fn new(id: u32, image_ref: impl Into<String>) -> Self {
        Self {
            id: PageId::new(id),
            image_ref: image_ref.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Returns the full-size image reference.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Returns the thumbnail reference shown in the drawer (`thumb-<image>`).
    #[must_use]
    pub fn thumbnail_ref(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_ref)
    }
}
