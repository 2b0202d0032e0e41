// SPDX-License-Identifier: MPL-2.0
//! Property tests for the deck's navigation invariants.

use proptest::prelude::*;
use slide_deck::host::{Location, MemoryDocument, MemoryElement, MemoryLocation, SlideElement};
use slide_deck::{Deck, DeckOptions, SlideChange};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Step {
    First,
    Last,
    Next,
    Prev,
    Nth(isize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::First),
        Just(Step::Last),
        Just(Step::Next),
        Just(Step::Prev),
        (-3isize..12).prop_map(Step::Nth),
    ]
}

type MemoryDeck = Deck<MemoryElement, MemoryLocation>;

fn build(count: usize) -> (MemoryDeck, Vec<MemoryElement>, MemoryLocation) {
    let mut document = MemoryDocument::new();
    let slides = document.push_slides(count);
    let location = MemoryLocation::new();
    let deck = Deck::new(&document, location.clone(), &DeckOptions::default())
        .expect("default selector is valid");
    (deck, slides, location)
}

fn target(step: Step, current: usize, count: usize) -> isize {
    let current = current as isize;
    match step {
        Step::First => 0,
        Step::Last => count as isize - 1,
        Step::Next => current + 1,
        Step::Prev => current - 1,
        Step::Nth(i) => i,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_step_is_either_a_full_navigation_or_a_silent_no_op(
        count in 0usize..8,
        steps in prop::collection::vec(step_strategy(), 0..40),
    ) {
        let (mut deck, slides, location) = build(count);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        deck.on("slide", move |change| sink.borrow_mut().push(*change));

        for step in steps {
            let before_current = deck.current();
            let before_past = deck.past();
            let before_events = events.borrow().len();
            let before_href = location.href();
            let i = target(step, before_current, count);

            match step {
                Step::First => { deck.first(); }
                Step::Last => { deck.last(); }
                Step::Next => { deck.next(); }
                Step::Prev => { deck.prev(); }
                Step::Nth(i) => { deck.nth(i); }
            }

            let valid = i >= 0 && (i as usize) < count && i as usize != before_current;
            if valid {
                let i = i as usize;
                prop_assert_eq!(deck.current(), i);
                prop_assert_eq!(deck.past(), Some(before_current));
                prop_assert_eq!(location.href(), format!("#{i}"));
                prop_assert_eq!(events.borrow().len(), before_events + 1);
                prop_assert_eq!(
                    events.borrow().last().copied(),
                    Some(SlideChange { current: i, past: before_current })
                );
                for (k, slide) in slides.iter().enumerate() {
                    prop_assert_eq!(slide.display().is_visible(), k == i);
                }
            } else {
                prop_assert_eq!(deck.current(), before_current);
                prop_assert_eq!(deck.past(), before_past);
                prop_assert_eq!(events.borrow().len(), before_events);
                prop_assert_eq!(location.href(), before_href);
            }

            if deck.past().is_some() {
                prop_assert!(deck.current() < count);
            }
        }
    }
}
