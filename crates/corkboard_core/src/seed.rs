//! Mapping of seed-collaborator records into a `SeedTasks` payload.
//!
//! The collaborator supplies `{title, body}` records; fetching them is the
//! caller's business. Nothing reaches the board until the caller issues the
//! `SeedTasks` command with the mapped entries, so an abandoned fetch
//! applies nothing.

use crate::command::SeedEntry;
use serde::Deserialize;

/// Titles longer than this are cut before they reach the board.
pub const SEED_TITLE_MAX_CHARS: usize = 50;

/// One record as supplied by the seed-data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRecord {
    pub title: String,
    pub body: String,
}

/// Maps collaborator records to `SeedTasks` entries: the title is truncated
/// to [`SEED_TITLE_MAX_CHARS`] characters and `body` becomes the task
/// description. Entry order is preserved.
pub fn to_seed_entries(records: &[SeedRecord]) -> Vec<SeedEntry> {
    records
        .iter()
        .map(|record| SeedEntry {
            title: record.title.chars().take(SEED_TITLE_MAX_CHARS).collect(),
            description: record.body.clone(),
        })
        .collect()
}
