// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the gesture
//! core can be exercised without any presentation framework.
//!
//! # Modules
//!
//! - [`page`]: Page types ([`PageId`](page::PageId), [`Page`](page::Page))
//! - [`viewport`]: Viewport value objects ([`ZoomScale`](viewport::ZoomScale),
//!   [`Offset`](viewport::Offset), [`ZoomDirection`](viewport::ZoomDirection))

pub mod page;
pub mod viewport;
