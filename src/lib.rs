// src/lib.rs
//! Scrape dandwiki 5e creature pages into a flat monster table.
//!
//! ```text
//! scrape::collect_creatures → specs::index (links) → core::net (pages)
//!                           → assemble (specs::creature extractors) → Dataset
//! file::write_export        → csv / json
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod assemble;
pub mod config;
pub mod core;
pub mod csv;
pub mod dataset;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use assemble::{assemble, Assembly, ExtractOptions, FailurePolicy};
pub use crate::core::html::CreatureDocument;
pub use dataset::Dataset;
pub use error::{ExtractError, Field, ScrapeError};
pub use record::CreatureRecord;
pub use specs::creature::SpeedMode;
