//! Provider rows and the closed stat-family/table enums.

use std::collections::HashMap;
use std::fmt;

use crate::error::EngineError;
use crate::league::LeagueKey;
use crate::season::SeasonCode;

/// Provider-side table names, one fetch per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTable {
    Standard,
    Shooting,
    Passing,
    PassingTypes,
    GoalShotCreation,
    Possession,
}

impl StatTable {
    pub fn as_str(self) -> &'static str {
        match self {
            StatTable::Standard => "standard",
            StatTable::Shooting => "shooting",
            StatTable::Passing => "passing",
            StatTable::PassingTypes => "passing_types",
            StatTable::GoalShotCreation => "goal_shot_creation",
            StatTable::Possession => "possession",
        }
    }
}

impl fmt::Display for StatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The eight comparison families offered on the menu. Dispatch over this
/// enum is exhaustive; adding a family is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFamily {
    Standard,
    Shooting,
    FinalBall,
    GoalShotCreation,
    Playmaking,
    Possession,
    PassTypes,
    PassingDistance,
}

impl StatFamily {
    pub const ALL: [StatFamily; 8] = [
        StatFamily::Standard,
        StatFamily::Shooting,
        StatFamily::FinalBall,
        StatFamily::GoalShotCreation,
        StatFamily::Playmaking,
        StatFamily::Possession,
        StatFamily::PassTypes,
        StatFamily::PassingDistance,
    ];

    pub fn menu_label(self) -> &'static str {
        match self {
            StatFamily::Standard => "Standard",
            StatFamily::Shooting => "Shooting",
            StatFamily::FinalBall => "Final Ball",
            StatFamily::GoalShotCreation => "Goal and Shot Creation",
            StatFamily::Playmaking => "Playmaking",
            StatFamily::Possession => "Possession",
            StatFamily::PassTypes => "Pass Types",
            StatFamily::PassingDistance => "Passing Distance",
        }
    }

    /// Chart title suffix.
    pub fn title(self) -> &'static str {
        match self {
            StatFamily::Standard => "Standard Stats (Per 90)",
            StatFamily::Shooting => "Shooting Comparison",
            StatFamily::FinalBall => "Final Ball Comparison (Per 90)",
            StatFamily::GoalShotCreation => "SCA and GCA Comparison (Per 90)",
            StatFamily::Playmaking => "Playmaking Comparison (Per 90)",
            StatFamily::Possession => "Total Touches",
            StatFamily::PassTypes => "Pass Types",
            StatFamily::PassingDistance => "Pass Distance Comparison",
        }
    }
}

/// One season-level row from the stats provider: identity plus numeric
/// fields, some under a two-level (group, field) hierarchy and some
/// unleveled. The engine only reads these.
#[derive(Debug, Clone, Default)]
pub struct PlayerStatRecord {
    pub player: String,
    pub team: String,
    /// Raw season key as the provider sent it; display always goes through
    /// the canonical [`SeasonCode`] instead.
    pub season: String,
    grouped: HashMap<String, HashMap<String, f64>>,
    flat: HashMap<String, f64>,
}

impl PlayerStatRecord {
    pub fn new(player: impl Into<String>, team: impl Into<String>, season: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
            season: season.into(),
            grouped: HashMap::new(),
            flat: HashMap::new(),
        }
    }

    pub fn insert_grouped(&mut self, group: &str, field: &str, value: f64) {
        self.grouped
            .entry(group.to_string())
            .or_default()
            .insert(field.to_string(), value);
    }

    pub fn insert_flat(&mut self, field: &str, value: f64) {
        self.flat.insert(field.to_string(), value);
    }

    pub fn grouped(&self, group: &str, field: &str) -> Option<f64> {
        self.grouped.get(group)?.get(field).copied()
    }

    pub fn flat(&self, field: &str) -> Option<f64> {
        self.flat.get(field).copied()
    }
}

/// Where a metric lives inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Grouped(&'static str, &'static str),
    Flat(&'static str),
}

impl FieldPath {
    pub fn read(self, record: &PlayerStatRecord) -> Option<f64> {
        match self {
            FieldPath::Grouped(group, field) => record.grouped(group, field),
            FieldPath::Flat(field) => record.flat(field),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Grouped(group, field) => write!(f, "{group}.{field}"),
            FieldPath::Flat(field) => f.write_str(field),
        }
    }
}

/// Search a fetched collection for a player by case-insensitive substring.
/// First match wins; ties are the caller's problem to disambiguate with a
/// longer name.
pub fn find_player<'a>(records: &'a [PlayerStatRecord], name: &str) -> Option<&'a PlayerStatRecord> {
    let needle = name.trim().to_lowercase();
    records
        .iter()
        .find(|record| record.player.to_lowercase().contains(&needle))
}

/// External statistics source. One season table per call; the engine never
/// caches or mutates what comes back.
pub trait StatProvider {
    fn fetch_season_stats(
        &self,
        league: LeagueKey,
        season: SeasonCode,
        table: StatTable,
    ) -> Result<Vec<PlayerStatRecord>, EngineError>;
}
