// src/core/html.rs
//! Parsed-page handle and the label → value locator every field extractor uses.
//!
//! The wiki marks each stat with a link to its rules page (`/wiki/Armor_Class_(5e_SRD)`,
//! `/wiki/Hit_Points_(5e_SRD)`, ...). The value is not inside that link but next to it,
//! so a field is found by matching the link's href and then walking a short, fixed path
//! through the DOM. Text nodes count as siblings: in
//!
//! ```text
//! <b><a href="/wiki/Armor_Class_(5e_SRD)">Armor Class</a></b> 13 (natural armour)<br>
//! ```
//!
//! the value is the text node right after `<b>`, i.e. `[Parent, NextSibling]`.
//! If the site's markup drifts, only the paths here and in `specs::creature` change.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Field};

static LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// One parsed creature page. Read-only once built.
pub struct CreatureDocument {
    html: Html,
}

impl CreatureDocument {
    pub fn parse(source: &str) -> Self {
        Self { html: Html::parse_document(source) }
    }

    /// First element matching `sel` in document order.
    pub fn first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(sel).next()
    }

    /// First `<a href>` whose href matches `re`.
    pub fn first_link(&self, re: &Regex) -> Option<ElementRef<'_>> {
        self.html
            .select(&LINKS)
            .find(|a| a.value().attr("href").is_some_and(|h| re.is_match(h)))
    }
}

/// One step of a locator path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hop {
    Parent,
    /// Next node at the same level, text nodes included.
    NextSibling,
}

/// Label inside a bold run: the value is the node after the `<b>`.
pub const LABEL_VALUE: &[Hop] = &[Hop::Parent, Hop::NextSibling];

/// Label in a header cell: the value is the next `<tr>` (skipping the
/// whitespace text node between the rows).
pub const ROW_BELOW: &[Hop] = &[Hop::Parent, Hop::Parent, Hop::NextSibling, Hop::NextSibling];

/// Where a field lives: which link labels it and how to get from that link to its value.
#[derive(Clone, Debug)]
pub struct Anchor {
    field: Field,
    href: Regex,
    path: &'static [Hop],
}

impl Anchor {
    pub fn new(field: Field, href_pattern: &str, path: &'static [Hop]) -> Result<Self, regex::Error> {
        Ok(Self { field, href: Regex::new(href_pattern)?, path })
    }
}

/// Find the first link matching `anchor`, follow its path, and return the landing
/// node's text with surrounding whitespace trimmed (inner whitespace is kept).
pub fn locate(doc: &CreatureDocument, anchor: &Anchor) -> Result<String, ExtractError> {
    let not_found = || ExtractError::FieldNotFound { field: anchor.field };

    let link = doc.first_link(&anchor.href).ok_or_else(not_found)?;

    let mut node = *link;
    for hop in anchor.path {
        node = match hop {
            Hop::Parent      => node.parent(),
            Hop::NextSibling => node.next_sibling(),
        }
        .ok_or_else(not_found)?;
    }

    let text = match node.value().as_text() {
        Some(t) => t.to_string(),
        None => ElementRef::wrap(node)
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default(),
    };

    Ok(text.trim().to_string())
}
