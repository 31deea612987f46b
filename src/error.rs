use thiserror::Error;

use crate::league::LeagueKey;
use crate::record::StatTable;
use crate::season::SeasonCode;

/// Everything the comparison engine can fail with.
///
/// All variants are recoverable at the shell: the prompt loop reports the
/// message and re-prompts or returns to the menu. "Not found" (no matching
/// row at all) and "missing field" (a row exists but lacks a column) are
/// deliberately distinct conditions.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no player matching '{name}' in {league} {season}")]
    PlayerNotFound {
        name: String,
        league: LeagueKey,
        season: SeasonCode,
    },

    #[error("{table} record has no '{path}' field")]
    MissingField { table: StatTable, path: String },

    #[error("{player} has no playing time recorded this season")]
    NoPlayingTime { player: String },

    #[error("named sub-counts exceed the total by {excess}")]
    PartitionInconsistency { excess: i64 },

    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}
