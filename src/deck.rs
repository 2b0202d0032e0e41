// SPDX-License-Identifier: MPL-2.0
//! The slide deck navigator.
//!
//! A [`Deck`] captures the slides matching a selector once, at construction,
//! then shows exactly one of them at a time. Every successful navigation
//! writes `#<index>` to the injected [`Location`], re-renders the display
//! state of every slide and emits a `"slide"` event carrying a
//! [`SlideChange`].
//!
//! Navigation never fails: requests for the current index or an index outside
//! `0..len` are ignored without any signal to the caller.
//!
//! ```
//! use slide_deck::config::DeckOptions;
//! use slide_deck::deck::Deck;
//! use slide_deck::host::{Location, MemoryDocument, MemoryLocation};
//!
//! let mut document = MemoryDocument::new();
//! document.push_slides(3);
//! let location = MemoryLocation::new();
//!
//! let mut deck = Deck::new(&document, location.clone(), &DeckOptions::default())
//!     .expect("default selector is valid");
//! deck.on("slide", |change| println!("{} -> {}", change.past, change.current));
//!
//! deck.next().next().next();
//! assert_eq!(deck.current(), 2);
//! assert_eq!(location.href(), "#2");
//! ```

use crate::config::defaults::{FRAGMENT_PREFIX, SLIDE_EVENT};
use crate::config::DeckOptions;
use crate::emitter::{Emitter, ListenerId};
use crate::error::Result;
use crate::host::{Display, Document, Location, SlideElement};
use tracing::{debug, trace, warn};

/// Payload of the `"slide"` event: the new index, then the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideChange {
    pub current: usize,
    pub past: usize,
}

/// Navigation state snapshot for rendering controls.
///
/// Navigation does not wrap around, so `has_next` is the negation of
/// `at_last` on a non-empty deck.
// Allow excessive bools: read-only snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    pub has_next: bool,
    pub has_previous: bool,
    pub at_first: bool,
    pub at_last: bool,
    pub current_index: usize,
    /// Previously shown slide, `None` until the first navigation.
    pub past_index: Option<usize>,
    pub total_count: usize,
}

#[derive(Debug)]
pub struct Deck<E, L>
where
    E: SlideElement,
    L: Location,
{
    slides: Vec<E>,
    selector: String,
    current: usize,
    past: Option<usize>,
    location: L,
    emitter: Emitter<SlideChange>,
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

impl<E, L> Deck<E, L>
where
    E: SlideElement,
    L: Location,
{
    /// Discovers the slides of `document` using the effective selector of
    /// `options`. No slide is shown or hidden, and finding no slide at all is
    /// accepted: every navigation is then a no-op.
    ///
    /// # Errors
    ///
    /// Returns the document's error if it rejects the selector.
    pub fn new<D>(document: &D, location: L, options: &DeckOptions) -> Result<Self>
    where
        D: Document<Element = E>,
    {
        let selector = options.effective_selector().to_string();
        let slides = document.query_selector_all(&selector)?;

        if slides.is_empty() {
            warn!(%selector, "no slides matched, navigation is disabled");
        } else {
            debug!(%selector, count = slides.len(), "slides discovered");
        }

        Ok(Self {
            slides,
            selector,
            current: 0,
            past: None,
            location,
            emitter: Emitter::new(),
        })
    }

    /// Shows the first slide.
    pub fn first(&mut self) -> &mut Self {
        self.nth(0)
    }

    /// Shows the last slide.
    pub fn last(&mut self) -> &mut Self {
        self.nth(signed(self.slides.len()) - 1)
    }

    /// Shows the slide after the current one.
    pub fn next(&mut self) -> &mut Self {
        self.nth(signed(self.current).saturating_add(1))
    }

    /// Shows the slide before the current one.
    pub fn prev(&mut self) -> &mut Self {
        self.nth(signed(self.current).saturating_sub(1))
    }

    /// Shows slide `i`.
    ///
    /// Ignored when `i` is the current index or outside `0..len`. Otherwise
    /// updates `past` and `current`, writes the location, re-renders every
    /// slide and emits `"slide"` before returning.
    pub fn nth(&mut self, i: isize) -> &mut Self {
        let Ok(target) = usize::try_from(i) else {
            trace!(index = i, "ignoring navigation before the first slide");
            return self;
        };
        if target == self.current {
            trace!(index = target, "ignoring navigation to the current slide");
            return self;
        }
        if target >= self.slides.len() {
            trace!(
                index = target,
                count = self.slides.len(),
                "ignoring navigation past the last slide"
            );
            return self;
        }

        let change = SlideChange {
            current: target,
            past: self.current,
        };
        self.past = Some(change.past);
        self.current = change.current;
        self.goto(target);
        self.show(target);

        debug!(current = change.current, past = change.past, "slide changed");
        self.emitter.emit(SLIDE_EVENT, &change);
        self
    }

    /// Writes `#<i>` to the location.
    pub fn goto(&mut self, i: usize) -> &mut Self {
        self.location.assign(&format!("{FRAGMENT_PREFIX}{i}"));
        self
    }

    /// Makes slide `i` visible and hides every other slide.
    pub fn show(&mut self, i: usize) -> &mut Self {
        for (k, slide) in self.slides.iter_mut().enumerate() {
            slide.set_display(if k == i { Display::Block } else { Display::None });
        }
        self
    }

    /// Subscribes `handler` to `event`. The deck emits only `"slide"`.
    pub fn on<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&SlideChange) + 'static,
    {
        self.emitter.on(event, handler)
    }

    /// Subscribes `handler` to the next emission of `event` only.
    pub fn once<F>(&mut self, event: &str, handler: F) -> ListenerId
    where
        F: FnMut(&SlideChange) + 'static,
    {
        self.emitter.once(event, handler)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Emits `event` to the deck's listeners, returning how many ran.
    pub fn emit(&mut self, event: &str, change: &SlideChange) -> usize {
        self.emitter.emit(event, change)
    }

    #[must_use]
    pub fn emitter(&self) -> &Emitter<SlideChange> {
        &self.emitter
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn past(&self) -> Option<usize> {
        self.past
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn slides(&self) -> &[E] {
        &self.slides
    }

    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        let total_count = self.slides.len();
        let has_slides = total_count > 0;
        NavigationInfo {
            has_next: self.current + 1 < total_count,
            has_previous: has_slides && self.current > 0,
            at_first: has_slides && self.current == 0,
            at_last: has_slides && self.current + 1 == total_count,
            current_index: self.current,
            past_index: self.past,
            total_count,
        }
    }
}
