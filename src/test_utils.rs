// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests.

use crate::config::DeckOptions;
use crate::deck::{Deck, SlideChange};
use crate::host::{MemoryDocument, MemoryElement, MemoryLocation, SlideElement};
use std::cell::RefCell;
use std::rc::Rc;

pub type MemoryDeck = Deck<MemoryElement, MemoryLocation>;

/// Builds a deck over `count` default slides and returns handles on the
/// slides and the location it writes to.
pub fn deck_with_slides(count: usize) -> (MemoryDeck, Vec<MemoryElement>, MemoryLocation) {
    let mut document = MemoryDocument::new();
    let slides = document.push_slides(count);
    let location = MemoryLocation::new();
    let deck = Deck::new(&document, location.clone(), &DeckOptions::default())
        .expect("default selector is valid");
    (deck, slides, location)
}

/// Subscribes to `"slide"` and collects every change.
pub fn record_changes(deck: &mut MemoryDeck) -> Rc<RefCell<Vec<SlideChange>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    deck.on("slide", move |change| sink.borrow_mut().push(*change));
    changes
}

/// Positions of the slides currently displayed as `block`.
pub fn visible_indices(slides: &[MemoryElement]) -> Vec<usize> {
    slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| slide.display().is_visible())
        .map(|(index, _)| index)
        .collect()
}
