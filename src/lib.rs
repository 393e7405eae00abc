// SPDX-License-Identifier: MPL-2.0
//! `magazine_lens` is the gesture core of a paginated magazine viewer.
//!
//! It reconciles double-tap, drag, pinch and button input into one
//! consistent scale/offset transform per page, and tracks the thumbnail
//! drawer and page selection. Rendering is left to the presentation layer,
//! which forwards raw events into a [`viewer::ViewerSession`] and renders
//! from its [`viewer::ViewerSnapshot`].

#![doc(html_root_url = "https://docs.rs/magazine_lens/0.1.0")]

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod script;
pub mod viewer;

#[cfg(test)]
mod test_utils;
