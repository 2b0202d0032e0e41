// SPDX-License-Identifier: MPL-2.0
//! Host collaborators consumed by the deck.
//!
//! The deck never reaches for global state. The document it queries, the
//! slide handles it toggles and the location it writes are all injected
//! through the traits below, so a browser binding and the in-memory
//! [`memory`] host are interchangeable.

pub mod memory;
pub mod selector;

pub use memory::{MemoryDocument, MemoryElement, MemoryLocation};

use crate::error::Result;

/// Inline display state of a slide element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Display {
    /// No inline display style has been written yet.
    #[default]
    Unset,
    /// Visible (`display: block`).
    Block,
    /// Hidden (`display: none`).
    None,
}

impl Display {
    /// Returns the CSS value for this state; `Unset` maps to the empty string.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Unset => "",
            Display::Block => "block",
            Display::None => "none",
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Display::Block
    }
}

/// A document able to resolve a selector into element handles.
pub trait Document {
    type Element: SlideElement;

    /// Returns every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the selector.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>>;
}

/// A non-owning handle to one slide element.
pub trait SlideElement {
    fn set_display(&mut self, display: Display);

    fn display(&self) -> Display;
}

/// The host's current location.
pub trait Location {
    /// Navigates the host to `href` (the deck only ever writes fragments).
    fn assign(&mut self, href: &str);

    fn href(&self) -> String;
}

impl<L: Location + ?Sized> Location for &mut L {
    fn assign(&mut self, href: &str) {
        (**self).assign(href);
    }

    fn href(&self) -> String {
        (**self).href()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_maps_to_css_values() {
        assert_eq!(Display::Block.as_css(), "block");
        assert_eq!(Display::None.as_css(), "none");
        assert_eq!(Display::Unset.as_css(), "");
    }

    #[test]
    fn only_block_is_visible() {
        assert!(Display::Block.is_visible());
        assert!(!Display::None.is_visible());
        assert!(!Display::Unset.is_visible());
    }

    #[test]
    fn borrowed_location_writes_through() {
        fn write_fragment<L: Location>(mut location: L) {
            location.assign("#3");
        }

        let mut location = MemoryLocation::new();
        write_fragment(&mut location);
        assert_eq!(location.href(), "#3");
    }
}
