// src/dataset.rs
//
// The crawl's output table: creature records in insertion order, keyed by
// monster_id. Append-only; owned by whoever runs the crawl and passed along
// explicitly (there is no global table).

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::record::CreatureRecord;

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<CreatureRecord>,
    ids: HashSet<u32>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    /// Append one record. Ids must be unique.
    pub fn push(&mut self, record: CreatureRecord) -> Result<(), DatasetError> {
        if !self.ids.insert(record.monster_id) {
            return Err(DatasetError::DuplicateId(record.monster_id));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn records(&self) -> &[CreatureRecord] { &self.records }

    pub fn get(&self, monster_id: u32) -> Option<&CreatureRecord> {
        if !self.ids.contains(&monster_id) { return None; }
        self.records.iter().find(|r| r.monster_id == monster_id)
    }

    pub fn headers() -> Vec<String> {
        CreatureRecord::COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    /// Rendered rows for delimited export.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(CreatureRecord::to_row).collect()
    }
}
