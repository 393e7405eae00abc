// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! The gesture core itself never fails: every numeric input is normalized.
//! The only runtime rejection is a page selection naming an id the catalog
//! does not contain. The remaining variants come from loading settings,
//! catalogs and event scripts.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A thumbnail selection referenced a page id absent from the catalog.
    #[error("Invalid page: no page with id {id}")]
    InvalidPage { id: u32 },

    /// Two catalog entries share the same page id.
    #[error("Duplicate page id {id} in catalog")]
    DuplicatePage { id: u32 },

    /// A catalog must contain at least one page.
    #[error("Catalog contains no pages")]
    EmptyCatalog,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// An event script line could not be parsed.
    #[error("Script Error (line {line}): {message}")]
    Script { line: usize, message: String },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
