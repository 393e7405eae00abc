// SPDX-License-Identifier: MPL-2.0
//! Viewport domain types.
//!
//! This module contains the value objects the gesture core manipulates,
//! independent of any presentation framework.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{scale_bounds, Offset, ZoomDirection, ZoomScale};
