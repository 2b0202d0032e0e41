// SPDX-License-Identifier: MPL-2.0
//! In-memory host: a flat document of elements and a location value.
//!
//! Element and location handles are shared (`Rc<RefCell<_>>`): cloning a
//! handle yields another view on the same state, the way a DOM node reference
//! does. This lets a caller keep observing the elements and location a
//! [`crate::deck::Deck`] writes to.

use super::selector::SelectorList;
use super::{Display, Document, Location, SlideElement};
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: Display,
}

/// Shared handle to one element of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    inner: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    /// Creates a detached element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag: tag.to_ascii_lowercase(),
                ..ElementData::default()
            })),
        }
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.inner.borrow_mut().classes.push(class.to_string());
        self
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.inner.borrow_mut().id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.iter().any(|c| c == class)
    }

    /// Returns whether both handles point at the same element.
    #[must_use]
    pub fn same_element(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn matches(&self, selector: &SelectorList) -> bool {
        let data = self.inner.borrow();
        selector.matches(&data.tag, data.id.as_deref(), &data.classes)
    }
}

impl SlideElement for MemoryElement {
    fn set_display(&mut self, display: Display) {
        self.inner.borrow_mut().display = display;
    }

    fn display(&self) -> Display {
        self.inner.borrow().display
    }
}

/// Ordered collection of elements answering selector queries.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` at the end of the document and returns a handle to it.
    pub fn push(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    /// Appends `count` `<article class="slide">` elements.
    pub fn push_slides(&mut self, count: usize) -> Vec<MemoryElement> {
        (0..count)
            .map(|_| self.push(MemoryElement::new("article").with_class("slide")))
            .collect()
    }

    #[must_use]
    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<MemoryElement>> {
        let selector = SelectorList::parse(selector)?;
        Ok(self
            .elements
            .iter()
            .filter(|element| element.matches(&selector))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
struct LocationData {
    href: String,
    history: Vec<String>,
}

/// Shared handle to a location value. Every assignment is kept in
/// [`MemoryLocation::history`], like entries pushed on a browser history.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<LocationData>>,
}

impl MemoryLocation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every value assigned so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.clone()
    }

    /// Forgets every recorded assignment, keeping the current `href`.
    pub fn clear_history(&self) {
        self.inner.borrow_mut().history.clear();
    }
}

impl Location for MemoryLocation {
    fn assign(&mut self, href: &str) {
        let mut data = self.inner.borrow_mut();
        data.href = href.to_string();
        data.history.push(href.to_string());
    }

    fn href(&self) -> String {
        self.inner.borrow().href.clone()
    }
}
