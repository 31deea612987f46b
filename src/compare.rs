//! Comparison orchestration: one fetch-extract-derive pipeline per family.
//!
//! Stateless by construction; a `compare` call with identical inputs and
//! provider data returns identical output.

use crate::error::EngineError;
use crate::league::LeagueKey;
use crate::metrics::{self, MetricSpec};
use crate::normalize::normalize_pair;
use crate::partition::{self, CategoricalPartition};
use crate::record::{
    FieldPath, PlayerStatRecord, StatFamily, StatProvider, StatTable, find_player,
};
use crate::season::SeasonCode;

/// One side of a comparison request.
#[derive(Debug, Clone)]
pub struct PlayerQuery {
    /// Name fragment, matched case-insensitively against provider rows.
    pub name: String,
    pub league: LeagueKey,
    pub season: SeasonCode,
}

/// Display metadata shared by every chart kind.
#[derive(Debug, Clone)]
pub struct PlayerCard {
    pub name: String,
    pub team: String,
    pub season: SeasonCode,
    /// 90-minute equivalents, when the family uses a per-90 divisor.
    pub nineties: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct RadarSide {
    pub card: PlayerCard,
    /// Per-90 (or rate) values, for on-chart annotation.
    pub raw: Vec<f64>,
    /// Jointly scaled values in [0, 1/1.1].
    pub scaled: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct PartitionSide {
    pub card: PlayerCard,
    pub partition: CategoricalPartition,
}

/// Completed/attempted per-90 pair for one pass-distance bucket.
#[derive(Debug, Clone, Copy)]
pub struct DistanceBucket {
    pub completed: f64,
    pub attempted: f64,
    /// Completion percentage, whole points. Zero attempts is zero percent.
    pub pct: f64,
}

#[derive(Debug, Clone)]
pub struct DistanceSide {
    pub card: PlayerCard,
    pub buckets: Vec<DistanceBucket>,
}

/// What the rendering collaborator consumes. Radar families carry jointly
/// scaled vectors; partition families carry absolute wedge counts; distance
/// carries paired completed/attempted rates. No normalization is applied
/// outside the radar arm.
#[derive(Debug, Clone)]
pub enum Comparison {
    Radar {
        family: StatFamily,
        labels: Vec<&'static str>,
        p1: RadarSide,
        p2: RadarSide,
    },
    Partitions {
        family: StatFamily,
        p1: PartitionSide,
        p2: PartitionSide,
    },
    Distance {
        family: StatFamily,
        labels: Vec<&'static str>,
        p1: DistanceSide,
        p2: DistanceSide,
    },
}

pub const DISTANCE_LABELS: [&str; 4] = [
    "Progressive",
    "Short (5-15yds)",
    "Medium (15-30yds)",
    "Long (>30yds)",
];

/// Run one comparison.
pub fn compare(
    provider: &dyn StatProvider,
    family: StatFamily,
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    match family {
        StatFamily::Standard => radar(
            provider,
            family,
            StatTable::Standard,
            metrics::STANDARD_NINETIES,
            &metrics::STANDARD,
            q1,
            q2,
        ),
        StatFamily::Shooting => radar(
            provider,
            family,
            StatTable::Shooting,
            metrics::FLAT_NINETIES,
            &metrics::SHOOTING,
            q1,
            q2,
        ),
        StatFamily::FinalBall => radar(
            provider,
            family,
            StatTable::Passing,
            metrics::FLAT_NINETIES,
            &metrics::FINAL_BALL,
            q1,
            q2,
        ),
        StatFamily::GoalShotCreation => radar(
            provider,
            family,
            StatTable::GoalShotCreation,
            metrics::FLAT_NINETIES,
            &metrics::GOAL_SHOT_CREATION,
            q1,
            q2,
        ),
        StatFamily::Playmaking => playmaking(provider, q1, q2),
        StatFamily::Possession => possession(provider, q1, q2),
        StatFamily::PassTypes => pass_types(provider, q1, q2),
        StatFamily::PassingDistance => passing_distance(provider, q1, q2),
    }
}

fn fetch_one(
    provider: &dyn StatProvider,
    query: &PlayerQuery,
    table: StatTable,
) -> Result<PlayerStatRecord, EngineError> {
    let records = provider.fetch_season_stats(query.league, query.season, table)?;
    find_player(&records, &query.name)
        .cloned()
        .ok_or_else(|| EngineError::PlayerNotFound {
            name: query.name.clone(),
            league: query.league,
            season: query.season,
        })
}

fn card(record: &PlayerStatRecord, query: &PlayerQuery, nineties: Option<f64>) -> PlayerCard {
    PlayerCard {
        name: record.player.clone(),
        team: record.team.clone(),
        season: query.season,
        nineties,
    }
}

fn radar(
    provider: &dyn StatProvider,
    family: StatFamily,
    table: StatTable,
    nineties_path: FieldPath,
    specs: &[MetricSpec],
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    let r1 = fetch_one(provider, q1, table)?;
    let r2 = fetch_one(provider, q2, table)?;

    let (c1, d1) = radar_side(&r1, q1, table, nineties_path, specs)?;
    let (c2, d2) = radar_side(&r2, q2, table, nineties_path, specs)?;
    let (s1, s2) = normalize_pair(&d1, &d2);

    Ok(Comparison::Radar {
        family,
        labels: specs.iter().map(|spec| spec.label).collect(),
        p1: RadarSide {
            card: c1,
            raw: d1,
            scaled: s1,
        },
        p2: RadarSide {
            card: c2,
            raw: d2,
            scaled: s2,
        },
    })
}

fn radar_side(
    record: &PlayerStatRecord,
    query: &PlayerQuery,
    table: StatTable,
    nineties_path: FieldPath,
    specs: &[MetricSpec],
) -> Result<(PlayerCard, Vec<f64>), EngineError> {
    let nineties = metrics::read_field(record, table, nineties_path)?;
    let raw = metrics::extract(record, table, specs)?;
    let derived = metrics::derive_per90(&raw, nineties, &record.player)?;
    Ok((card(record, query, Some(nineties)), derived))
}

fn playmaking(
    provider: &dyn StatProvider,
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    let (c1, d1) = playmaking_side(provider, q1)?;
    let (c2, d2) = playmaking_side(provider, q2)?;
    let (s1, s2) = normalize_pair(&d1, &d2);

    let labels = metrics::PLAYMAKING_PASSING
        .iter()
        .chain(metrics::PLAYMAKING_POSSESSION.iter())
        .map(|spec| spec.label)
        .collect();

    Ok(Comparison::Radar {
        family: StatFamily::Playmaking,
        labels,
        p1: RadarSide {
            card: c1,
            raw: d1,
            scaled: s1,
        },
        p2: RadarSide {
            card: c2,
            raw: d2,
            scaled: s2,
        },
    })
}

fn playmaking_side(
    provider: &dyn StatProvider,
    query: &PlayerQuery,
) -> Result<(PlayerCard, Vec<f64>), EngineError> {
    let passing = fetch_one(provider, query, StatTable::Passing)?;
    let possession = fetch_one(provider, query, StatTable::Possession)?;

    let nineties = metrics::read_field(&passing, StatTable::Passing, metrics::FLAT_NINETIES)?;
    let mut raw = metrics::extract(&passing, StatTable::Passing, &metrics::PLAYMAKING_PASSING)?;
    raw.extend(metrics::extract(
        &possession,
        StatTable::Possession,
        &metrics::PLAYMAKING_POSSESSION,
    )?);
    let derived = metrics::derive_per90(&raw, nineties, &passing.player)?;
    Ok((card(&passing, query, Some(nineties)), derived))
}

fn possession(
    provider: &dyn StatProvider,
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    Ok(Comparison::Partitions {
        family: StatFamily::Possession,
        p1: possession_side(provider, q1)?,
        p2: possession_side(provider, q2)?,
    })
}

fn possession_side(
    provider: &dyn StatProvider,
    query: &PlayerQuery,
) -> Result<PartitionSide, EngineError> {
    let record = fetch_one(provider, query, StatTable::Possession)?;
    let mut named = Vec::with_capacity(metrics::TOUCH_ZONES.len());
    for (label, path) in metrics::TOUCH_ZONES {
        named.push((label, metrics::read_field(&record, StatTable::Possession, path)?));
    }
    // Every zone is named; no synthetic bucket to carve out.
    let partition = partition::from_named(&named);
    Ok(PartitionSide {
        card: card(&record, query, None),
        partition,
    })
}

fn pass_types(
    provider: &dyn StatProvider,
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    Ok(Comparison::Partitions {
        family: StatFamily::PassTypes,
        p1: pass_types_side(provider, q1)?,
        p2: pass_types_side(provider, q2)?,
    })
}

fn pass_types_side(
    provider: &dyn StatProvider,
    query: &PlayerQuery,
) -> Result<PartitionSide, EngineError> {
    let record = fetch_one(provider, query, StatTable::PassingTypes)?;
    let live = metrics::read_field(&record, StatTable::PassingTypes, metrics::PASS_TYPE_LIVE)?;
    let mut named = Vec::with_capacity(metrics::PASS_TYPE_SPLITS.len());
    for (label, path) in metrics::PASS_TYPE_SPLITS {
        named.push((label, metrics::read_field(&record, StatTable::PassingTypes, path)?));
    }
    // The named splits are subsets of the live-ball total; the remainder is
    // the open-play wedge.
    let partition = partition::decompose("Live", live, &named)?;
    Ok(PartitionSide {
        card: card(&record, query, None),
        partition,
    })
}

fn passing_distance(
    provider: &dyn StatProvider,
    q1: &PlayerQuery,
    q2: &PlayerQuery,
) -> Result<Comparison, EngineError> {
    Ok(Comparison::Distance {
        family: StatFamily::PassingDistance,
        labels: DISTANCE_LABELS.to_vec(),
        p1: distance_side(provider, q1)?,
        p2: distance_side(provider, q2)?,
    })
}

fn distance_side(
    provider: &dyn StatProvider,
    query: &PlayerQuery,
) -> Result<DistanceSide, EngineError> {
    let table = StatTable::Passing;
    let record = fetch_one(provider, query, table)?;
    let nineties = metrics::read_field(&record, table, metrics::FLAT_NINETIES)?;
    if nineties <= 0.0 {
        return Err(EngineError::NoPlayingTime {
            player: record.player.clone(),
        });
    }

    let mut buckets = Vec::with_capacity(DISTANCE_LABELS.len());
    // The progressive bucket is measured against all attempted passes.
    let progressive = metrics::read_field(&record, table, metrics::PROGRESSIVE_PASSES)?;
    let attempted_total = metrics::read_field(&record, table, metrics::TOTAL_ATTEMPTED)?;
    buckets.push(bucket(progressive, attempted_total, nineties));

    for group in metrics::DISTANCE_GROUPS {
        let completed = metrics::read_field(&record, table, FieldPath::Grouped(group, "Cmp"))?;
        let attempted = metrics::read_field(&record, table, FieldPath::Grouped(group, "Att"))?;
        buckets.push(bucket(completed, attempted, nineties));
    }

    Ok(DistanceSide {
        card: card(&record, query, Some(nineties)),
        buckets,
    })
}

fn bucket(completed: f64, attempted: f64, nineties: f64) -> DistanceBucket {
    let completed = metrics::round2(completed / nineties);
    let attempted = metrics::round2(attempted / nineties);
    let pct = if attempted > 0.0 {
        (completed / attempted * 100.0).round()
    } else {
        0.0
    };
    DistanceBucket {
        completed,
        attempted,
        pct,
    }
}
