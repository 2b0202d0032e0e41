// SPDX-License-Identifier: MPL-2.0
//! Crate error type.
//!
//! Navigation itself never fails: out-of-range and redundant requests are
//! silently ignored by [`crate::deck::Deck`]. Errors only come from the
//! ambient edges of the crate, i.e. reading options files and asking the host
//! document to resolve a selector.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The host document refused the selector used to discover slides.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Error::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
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
