// src/assemble.rs
//! Record assembly: run every field extractor on one document and collect the
//! results into a [`CreatureRecord`].
//!
//! Extractors run independently. A failure leaves only its own group unset and is
//! reported in [`Assembly::failures`]; what happens to the creature then is the
//! caller's [`FailurePolicy`].

use crate::core::html::CreatureDocument;
use crate::error::ExtractError;
use crate::record::CreatureRecord;
use crate::specs::creature::{self, SpeedMode};

/// Knobs for the extractors themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub speed_mode: SpeedMode,
}

/// What to do with a creature whose page did not fully extract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failures and leave the creature out of the dataset.
    #[default]
    Skip,
    /// Keep the record; failed groups stay empty.
    Partial,
    /// Stop the run on the first failure.
    Abort,
}

#[derive(Debug)]
pub struct Assembly {
    pub record: CreatureRecord,
    pub failures: Vec<ExtractError>,
}

impl Assembly {
    pub fn is_complete(&self) -> bool { self.failures.is_empty() }
}

fn keep<T>(res: Result<T, ExtractError>, failures: &mut Vec<ExtractError>) -> Option<T> {
    res.map_err(|e| failures.push(e)).ok()
}

/// Run every extractor once on `doc` under the caller-supplied `monster_id`.
pub fn assemble(doc: &CreatureDocument, monster_id: u32, opts: &ExtractOptions) -> Assembly {
    let mut failures = Vec::new();

    let record = CreatureRecord {
        monster_name: keep(creature::extract_name(doc), &mut failures),
        descriptors: keep(creature::extract_descriptors(doc), &mut failures),
        armor: keep(creature::extract_armor_class(doc), &mut failures),
        vitality: keep(creature::extract_hit_points(doc), &mut failures),
        speeds: keep(creature::extract_speeds(doc, opts.speed_mode), &mut failures),
        abilities: keep(creature::extract_abilities(doc), &mut failures),
        ..CreatureRecord::new(monster_id)
    };

    Assembly { record, failures }
}

/// Parse `html` and assemble it.
pub fn assemble_page(html: &str, monster_id: u32, opts: &ExtractOptions) -> Assembly {
    assemble(&CreatureDocument::parse(html), monster_id, opts)
}
