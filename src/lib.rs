// SPDX-License-Identifier: MPL-2.0
//! `slide_deck` is a minimal slide-deck controller for presentations.
//!
//! A [`deck::Deck`] discovers slides once through a host [`host::Document`],
//! keeps exactly one of them visible, writes the visible index to the host
//! [`host::Location`] fragment and emits a `"slide"` event on every change.
//! The host is injected; [`host::memory`] provides an in-memory one.

#![doc(html_root_url = "https://docs.rs/slide_deck/0.3.0")]

pub mod config;
pub mod deck;
pub mod emitter;
pub mod error;
pub mod host;

#[cfg(test)]
mod test_utils;

pub use config::DeckOptions;
pub use deck::{Deck, NavigationInfo, SlideChange};
pub use emitter::{Emitter, ListenerId};
pub use error::{Error, Result};
