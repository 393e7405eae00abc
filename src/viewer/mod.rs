// SPDX-License-Identifier: MPL-2.0
//! Viewer state management modules
//!
//! This module contains the gesture core: the per-page viewport transform,
//! the thumbnail drawer, the arbiter that routes raw input into them, and
//! the session that owns all of it. Presentation code reads snapshots and
//! forwards events; it never mutates state directly.

pub mod arbiter;
pub mod drawer;
pub mod readout;
pub mod session;
pub mod transform;

// Re-export commonly used types for convenience
pub use arbiter::{Effect, GestureArbiter, GestureEvent, GestureKind};
pub use drawer::{DrawerController, DrawerState};
pub use readout::Readout;
pub use session::{ViewerSession, ViewerSnapshot};
pub use transform::{Transition, ViewportState, ViewportTransform};
