// src/specs/mod.rs
//! # Page scrapers
//!
//! Page-specific scraping rules for the wiki. Each module encodes
//! *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: no fetching, no caching, no export formatting.
//! - `creature` – one extractor per field-group of a creature stat block, each
//!   split into a text parser (`parse_*`) and a document extractor (`extract_*`).
//! - `index` – creature page discovery on the `5e_Monsters` index.
//!
//! ## Conventions & invariants
//! - Document navigation goes through `core::html::locate`; a new page layout
//!   means new anchors/paths, not new walking code.
//! - Every extractor fails on its own with an `ExtractError`; none of them
//!   fills in defaults for a field it could not read.
//! - Everything here is testable **offline** against saved pages (`tests/fixtures`).
pub mod creature;
pub mod index;
