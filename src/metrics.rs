//! Field-path tables per stat family and the raw to per-90 derivation.
//!
//! Each radar family reads a fixed, ordered list of columns out of its
//! provider table. The order is the axis order on screen, so it never
//! changes between the two players of a comparison.

use crate::error::EngineError;
use crate::record::FieldPath::{self, Flat, Grouped};
use crate::record::{PlayerStatRecord, StatTable};

/// How a metric is derived from its raw field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Counting stat, divided by the player's 90s.
    PerNinety,
    /// Already a rate or percentage; taken as-is.
    Rate,
}

/// One column of a family's metric table.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub label: &'static str,
    pub path: FieldPath,
    pub kind: MetricKind,
}

const fn per90(label: &'static str, path: FieldPath) -> MetricSpec {
    MetricSpec {
        label,
        path,
        kind: MetricKind::PerNinety,
    }
}

const fn rate(label: &'static str, path: FieldPath) -> MetricSpec {
    MetricSpec {
        label,
        path,
        kind: MetricKind::Rate,
    }
}

pub const STANDARD: [MetricSpec; 6] = [
    per90("Goals", Grouped("Performance", "Gls")),
    per90("xG", Grouped("Expected", "xG")),
    per90("Assists", Grouped("Performance", "Ast")),
    per90("xAG", Grouped("Expected", "xAG")),
    per90("Progressive Carries", Grouped("Progression", "PrgC")),
    per90("Progressive Passes", Grouped("Progression", "PrgP")),
];

/// The standard table keeps 90s under its playing-time group; every other
/// table exposes it unleveled.
pub const STANDARD_NINETIES: FieldPath = Grouped("Playing Time", "90s");
pub const FLAT_NINETIES: FieldPath = Flat("90s");

pub const SHOOTING: [MetricSpec; 5] = [
    per90("Goals (p90)", Grouped("Standard", "Gls")),
    per90("xG (p90)", Grouped("Expected", "xG")),
    per90("Shots (p90)", Grouped("Standard", "Sh")),
    per90("Shots on Target (p90)", Grouped("Standard", "SoT")),
    rate("Goals per Shot", Grouped("Standard", "G/Sh")),
];

pub const FINAL_BALL: [MetricSpec; 6] = [
    per90("Assists", Flat("Ast")),
    per90("xAG", Flat("xAG")),
    per90("xA", Flat("xA")),
    per90("Key Passes", Flat("KP")),
    per90("Passes into Penalty Area", Flat("PPA")),
    per90("Crosses into Penalty Area", Flat("CrsPA")),
];

pub const GOAL_SHOT_CREATION: [MetricSpec; 6] = [
    per90("SCA (Live)", Grouped("SCA Types", "PassLive")),
    per90("SCA (Dead)", Grouped("SCA Types", "PassDead")),
    per90("SCA (Take-Ons)", Grouped("SCA Types", "TO")),
    per90("GCA (Live)", Grouped("GCA Types", "PassLive")),
    per90("GCA (Dead)", Grouped("GCA Types", "PassDead")),
    per90("GCA (Take-Ons)", Grouped("GCA Types", "TO")),
];

// Playmaking spans two tables: passes from `passing`, ball carrying from
// `possession`. The 90s divisor comes from the passing record.
pub const PLAYMAKING_PASSING: [MetricSpec; 6] = [
    per90("Total Passes", Grouped("Total", "Cmp")),
    rate("Pass Accuracy (%)", Grouped("Total", "Cmp%")),
    per90("Key Passes", Flat("KP")),
    per90("Progressive Passes", Flat("PrgP")),
    per90("Passes into Final Third", Flat("1/3")),
    per90("Passes into Penalty Area", Flat("PPA")),
];

pub const PLAYMAKING_POSSESSION: [MetricSpec; 5] = [
    per90("Progressive Carries", Grouped("Carries", "PrgC")),
    per90("Carries into Final Third", Grouped("Carries", "1/3")),
    per90("Carries into Penalty Area", Grouped("Carries", "CPA")),
    per90("Take Ons", Grouped("Take-Ons", "Succ")),
    rate("Take Ons %", Grouped("Take-Ons", "Succ%")),
];

/// Pitch zones of the possession touch breakdown, in pie order.
pub const TOUCH_ZONES: [(&str, FieldPath); 5] = [
    ("Def Pen", Grouped("Touches", "Def Pen")),
    ("Def 3rd", Grouped("Touches", "Def 3rd")),
    ("Mid 3rd", Grouped("Touches", "Mid 3rd")),
    ("Att 3rd", Grouped("Touches", "Att 3rd")),
    ("Att Pen", Grouped("Touches", "Att Pen")),
];

/// The live-ball total and the named splits carved out of it.
pub const PASS_TYPE_LIVE: FieldPath = Grouped("Pass Types", "Live");
pub const PASS_TYPE_SPLITS: [(&str, FieldPath); 3] = [
    ("Through Balls", Grouped("Pass Types", "TB")),
    ("Crosses", Grouped("Pass Types", "Crs")),
    ("Switches", Grouped("Pass Types", "Sw")),
];

pub const PROGRESSIVE_PASSES: FieldPath = Flat("PrgP");
pub const TOTAL_ATTEMPTED: FieldPath = Grouped("Total", "Att");
/// Distance groups of the passing table, each with Cmp and Att columns.
pub const DISTANCE_GROUPS: [&str; 3] = ["Short", "Medium", "Long"];

/// A metric read out of a record, before per-90 derivation.
#[derive(Debug, Clone, Copy)]
pub struct RawMetric {
    pub label: &'static str,
    pub value: f64,
    pub kind: MetricKind,
}

/// Read one field, failing with the table and path of whatever is missing.
/// A found record with an absent column means "no data for this category",
/// which callers surface differently from "player not found".
pub fn read_field(
    record: &PlayerStatRecord,
    table: StatTable,
    path: FieldPath,
) -> Result<f64, EngineError> {
    path.read(record).ok_or_else(|| EngineError::MissingField {
        table,
        path: path.to_string(),
    })
}

/// Pull a family's ordered metric columns out of a record.
pub fn extract(
    record: &PlayerStatRecord,
    table: StatTable,
    specs: &[MetricSpec],
) -> Result<Vec<RawMetric>, EngineError> {
    specs
        .iter()
        .map(|spec| {
            let value = read_field(record, table, spec.path)?;
            Ok(RawMetric {
                label: spec.label,
                value,
                kind: spec.kind,
            })
        })
        .collect()
}

/// Half-up rounding at 2 decimals, the precision every derived value carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert one counting stat into a per-90 rate. A non-positive divisor has
/// no meaningful rate, so the caller gets `None` rather than an infinity.
pub fn to_per90(value: f64, nineties: f64) -> Option<f64> {
    if nineties > 0.0 {
        Some(round2(value / nineties))
    } else {
        None
    }
}

/// Apply the per-90 divisor across an extracted vector. Rate-kind metrics
/// pass through untouched (still rounded to the common precision).
pub fn derive_per90(
    raw: &[RawMetric],
    nineties: f64,
    player: &str,
) -> Result<Vec<f64>, EngineError> {
    let mut out = Vec::with_capacity(raw.len());
    for metric in raw {
        let value = match metric.kind {
            MetricKind::PerNinety => {
                to_per90(metric.value, nineties).ok_or_else(|| EngineError::NoPlayingTime {
                    player: player.to_string(),
                })?
            }
            MetricKind::Rate => round2(metric.value),
        };
        out.push(value);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_record() -> PlayerStatRecord {
        let mut record = PlayerStatRecord::new("Test Player", "Test FC", "1718");
        record.insert_grouped("Performance", "Gls", 10.0);
        record.insert_grouped("Expected", "xG", 8.4);
        record.insert_grouped("Performance", "Ast", 5.0);
        record.insert_grouped("Expected", "xAG", 4.2);
        record.insert_grouped("Progression", "PrgC", 60.0);
        record.insert_grouped("Progression", "PrgP", 120.0);
        record.insert_grouped("Playing Time", "90s", 20.0);
        record
    }

    #[test]
    fn to_per90_rounds_to_two_decimals() {
        assert_eq!(to_per90(10.0, 20.0), Some(0.5));
        assert_eq!(to_per90(7.0, 3.0), Some(2.33));
        assert_eq!(to_per90(1.0, 0.0), None);
        assert_eq!(to_per90(1.0, -1.0), None);
    }

    #[test]
    fn extract_preserves_column_order() {
        let record = standard_record();
        let raw = extract(&record, StatTable::Standard, &STANDARD).unwrap();
        let labels: Vec<&str> = raw.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            [
                "Goals",
                "xG",
                "Assists",
                "xAG",
                "Progressive Carries",
                "Progressive Passes"
            ]
        );
        assert_eq!(raw[0].value, 10.0);
    }

    #[test]
    fn extract_names_the_missing_column() {
        let mut record = PlayerStatRecord::new("Test Player", "Test FC", "1718");
        record.insert_grouped("Performance", "Gls", 10.0);
        let err = extract(&record, StatTable::Standard, &STANDARD).unwrap_err();
        assert!(err.to_string().contains("Expected.xG"));
        assert!(err.to_string().contains("standard"));
    }

    #[test]
    fn rates_skip_the_divisor() {
        let raw = [
            RawMetric {
                label: "Shots (p90)",
                value: 40.0,
                kind: MetricKind::PerNinety,
            },
            RawMetric {
                label: "Goals per Shot",
                value: 0.125,
                kind: MetricKind::Rate,
            },
        ];
        let derived = derive_per90(&raw, 20.0, "Test Player").unwrap();
        assert_eq!(derived, vec![2.0, 0.13]);
    }

    #[test]
    fn zero_minutes_is_a_named_error() {
        let raw = [RawMetric {
            label: "Goals",
            value: 1.0,
            kind: MetricKind::PerNinety,
        }];
        let err = derive_per90(&raw, 0.0, "Benchwarmer").unwrap_err();
        assert!(matches!(err, EngineError::NoPlayingTime { .. }));
        assert!(err.to_string().contains("Benchwarmer"));
    }
}
