// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for deck configuration.
//!
//! This module is the single source of truth for defaults used when the
//! caller leaves an option unset.

// ==========================================================================
// Slide Discovery Defaults
// ==========================================================================

/// Selector used to discover slides when none (or an empty one) is configured.
pub const DEFAULT_SELECTOR: &str = "article.slide";

/// Prefix written in front of the slide index when syncing the location.
pub const FRAGMENT_PREFIX: &str = "#";

/// Name of the event emitted after every successful navigation.
pub const SLIDE_EVENT: &str = "slide";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_SELECTOR.is_empty());
    assert!(!SLIDE_EVENT.is_empty());
};
