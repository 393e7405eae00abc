// SPDX-License-Identifier: MPL-2.0
//! Page domain types.

mod types;

pub use types::{Page, PageId, THUMBNAIL_PREFIX};
