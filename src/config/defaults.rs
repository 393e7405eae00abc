// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module holds the defaults for the settings file and the CLI.
//! Scale bounds are not configurable and live with the viewport types in
//! `domain::viewport::scale_bounds`.
//!
//! # Categories
//!
//! - **History**: Gesture history buffer bounds
//! - **Catalog**: Built-in reference page list
//! - **Logging**: Default tracing filter

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of gesture records kept in the history buffer.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Minimum gesture history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 16;

/// Maximum gesture history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Number of pages in the built-in reference catalog.
pub const REFERENCE_PAGE_COUNT: u32 = 6;

/// Image name prefix of the built-in reference catalog.
pub const REFERENCE_IMAGE_PREFIX: &str = "magazine-page-";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither `RUST_LOG` nor the settings file set one.
pub const DEFAULT_LOG_FILTER: &str = "magazine_lens=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // History validation
    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(MAX_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);

    // Catalog validation
    assert!(REFERENCE_PAGE_COUNT > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_defaults_are_valid() {
        assert_eq!(DEFAULT_HISTORY_CAPACITY, 256);
        assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
        assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
    }
}
