// src/error.rs
//! Error taxonomy for extraction, fetching and the crawl as a whole.

use std::fmt;

use thiserror::Error;

/// Which field-group of a creature page an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Descriptors,
    ArmorClass,
    HitPoints,
    Speed,
    Abilities,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name        => "name",
            Field::Descriptors => "size/type/alignment",
            Field::ArmorClass  => "armor class",
            Field::HitPoints   => "hit points",
            Field::Speed       => "speed",
            Field::Abilities   => "ability scores",
        };
        f.write_str(label)
    }
}

/// Failure of a single field extractor on one document.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The label/anchor for the field is not in the document (structural drift).
    #[error("{field}: anchor not found in document")]
    FieldNotFound { field: Field },

    #[error("size/type/alignment: expected three space-separated words, got {text:?}")]
    MalformedDescriptor { text: String },

    #[error("hit points: malformed hit dice expression {text:?}")]
    MalformedHitDiceExpression { text: String },

    #[error("ability scores: expected six scores, found {found} in {text:?}")]
    MalformedAbilityBlock { found: usize, text: String },

    #[error("{field}: not a number: {token:?}")]
    InvalidNumber { field: Field, token: String },
}

impl ExtractError {
    pub fn field(&self) -> Field {
        match self {
            ExtractError::FieldNotFound { field }
            | ExtractError::InvalidNumber { field, .. } => *field,
            ExtractError::MalformedDescriptor { .. } => Field::Descriptors,
            ExtractError::MalformedHitDiceExpression { .. } => Field::HitPoints,
            ExtractError::MalformedAbilityBlock { .. } => Field::Abilities,
        }
    }
}

/// Fetch-layer failures. A `Status` error is the "response not ok" signal:
/// the page body is never handed to the extractors.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("no page for {0}")]
    Missing(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("monster_id {0} is already in the dataset")]
    DuplicateId(u32),
}

/// Anything that can end a crawl or an export.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error("creature {monster_id} ({url}) did not extract")]
    Extract {
        monster_id: u32,
        url: String,
        #[source]
        source: ExtractError,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("monster ids from {first_id} cannot cover {count} creatures")]
    IdRange { first_id: u32, count: usize },

    #[error("{0}")]
    Path(String),
}
