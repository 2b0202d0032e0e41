// SPDX-License-Identifier: MPL-2.0
//! Deck construction options, with optional persistence to a TOML file.
//!
//! # Examples
//!
//! ```no_run
//! use slide_deck::config::{self, DeckOptions};
//! use std::path::Path;
//!
//! let options = DeckOptions::with_selector("section.slide");
//! config::save_to_path(&options, Path::new("./deck.toml")).expect("Failed to save options");
//!
//! let loaded = config::load_from_path(Path::new("./deck.toml")).expect("Failed to load options");
//! assert_eq!(loaded.effective_selector(), "section.slide");
//! ```

pub mod defaults;

pub use defaults::DEFAULT_SELECTOR;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    /// Selector used to discover slides in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl DeckOptions {
    #[must_use]
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
        }
    }

    /// Returns the configured selector, or [`DEFAULT_SELECTOR`] when it is
    /// missing or empty.
    #[must_use]
    pub fn effective_selector(&self) -> &str {
        match self.selector.as_deref() {
            Some(selector) if !selector.is_empty() => selector,
            _ => DEFAULT_SELECTOR,
        }
    }

    /// Parses options from TOML text. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if the text is not valid TOML
    /// or `selector` is not a string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Loads options from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_from_path(path: &Path) -> Result<DeckOptions> {
    let content = fs::read_to_string(path)?;
    DeckOptions::from_toml_str(&content)
}

/// Saves options to a TOML file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(options: &DeckOptions, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(options)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_options_use_default_selector() {
        let options = DeckOptions::default();
        assert_eq!(options.selector, None);
        assert_eq!(options.effective_selector(), "article.slide");
    }

    #[test]
    fn empty_selector_falls_back_to_default() {
        let options = DeckOptions::with_selector("");
        assert_eq!(options.effective_selector(), DEFAULT_SELECTOR);
    }

    #[test]
    fn explicit_selector_wins() {
        let options = DeckOptions::with_selector("section.page");
        assert_eq!(options.effective_selector(), "section.page");
    }

    #[test]
    fn save_and_load_round_trip_preserves_selector() {
        let options = DeckOptions::with_selector("div.slide");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("deck.toml");

        save_to_path(&options, &path).expect("failed to save options");
        let loaded = load_from_path(&path).expect("failed to load options");

        assert_eq!(loaded, options);
    }

    #[test]
    fn from_toml_str_ignores_unknown_keys() {
        let options = DeckOptions::from_toml_str("selector = \"li\"\ntheme = \"dark\"\n")
            .expect("should parse");
        assert_eq!(options.effective_selector(), "li");
    }

    #[test]
    fn from_toml_str_accepts_empty_document() {
        let options = DeckOptions::from_toml_str("").expect("empty toml is valid");
        assert_eq!(options, DeckOptions::default());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = DeckOptions::from_toml_str("not = valid = toml").expect_err("should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&temp_dir.path().join("absent.toml")).expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn unset_selector_is_not_serialized() {
        let content = toml::to_string_pretty(&DeckOptions::default()).expect("serialize");
        assert!(!content.contains("selector"));
    }
}
