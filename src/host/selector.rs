// SPDX-License-Identifier: MPL-2.0
//! Compound selector parsing and matching for the in-memory host.
//!
//! Supported grammar (a strict subset of CSS):
//!
//! ```text
//! list     := compound ( "," compound )*
//! compound := ( "*" | tag )? ( "." ident | "#" ident )*
//! ```
//!
//! A compound must name at least one of tag, universal, class or id.
//! Combinators, attribute selectors and pseudo-classes are rejected.

use crate::error::{Error, Result};
use std::iter::Peekable;
use std::str::Chars;

/// One compound selector such as `article.slide` or `#intro`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    /// Tag name, lowercase. `None` matches any tag.
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

impl Compound {
    /// Returns whether an element with the given attributes matches.
    #[must_use]
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self.ids.iter().all(|expected| id == Some(expected.as_str())) {
            return false;
        }
        self.classes
            .iter()
            .all(|expected| classes.iter().any(|class| class == expected))
    }
}

/// A comma-separated list of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    compounds: Vec<Compound>,
}

impl SelectorList {
    /// Parses a selector list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] for empty selectors and any syntax
    /// outside the supported subset.
    pub fn parse(selector: &str) -> Result<Self> {
        let compounds = selector
            .split(',')
            .map(|part| parse_compound(selector, part.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { compounds })
    }

    #[must_use]
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Returns whether any compound of the list matches.
    #[must_use]
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        self.compounds
            .iter()
            .any(|compound| compound.matches(tag, id, classes))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// CSS identifiers cannot start with a digit, nor be a hyphen alone or followed by a digit.
fn is_valid_ident_start(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => false,
        Some('-') => chars.next().is_some_and(|c| !c.is_ascii_digit()),
        Some(_) => true,
        None => false,
    }
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn parse_compound(full: &str, part: &str) -> Result<Compound> {
    if part.is_empty() {
        return Err(Error::invalid_selector(full, "empty selector"));
    }

    let mut compound = Compound::default();
    let mut universal = false;
    let mut chars = part.chars().peekable();

    match chars.peek() {
        Some('*') => {
            universal = true;
            chars.next();
        }
        Some(&c) if c.is_alphabetic() => {
            compound.tag = Some(read_ident(&mut chars).to_ascii_lowercase());
        }
        _ => {}
    }

    while let Some(c) = chars.next() {
        match c {
            '.' | '#' => {
                let ident = read_ident(&mut chars);
                if ident.is_empty() {
                    return Err(Error::invalid_selector(
                        full,
                        format!("expected a name after '{c}'"),
                    ));
                }
                if !is_valid_ident_start(&ident) {
                    return Err(Error::invalid_selector(
                        full,
                        format!("'{ident}' is not a valid name"),
                    ));
                }
                if c == '.' {
                    compound.classes.push(ident);
                } else {
                    compound.ids.push(ident);
                }
            }
            '*' => {
                return Err(Error::invalid_selector(
                    full,
                    "'*' is only allowed at the start of a compound",
                ));
            }
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(Error::invalid_selector(full, "combinators are not supported"));
            }
            '[' => {
                return Err(Error::invalid_selector(
                    full,
                    "attribute selectors are not supported",
                ));
            }
            ':' => {
                return Err(Error::invalid_selector(full, "pseudo-classes are not supported"));
            }
            other => {
                return Err(Error::invalid_selector(
                    full,
                    format!("unexpected character '{other}'"),
                ));
            }
        }
    }

    if !universal
        && compound.tag.is_none()
        && compound.ids.is_empty()
        && compound.classes.is_empty()
    {
        return Err(Error::invalid_selector(full, "empty selector"));
    }
    Ok(compound)
}
