//! Integer partitions for pie-style display.
//!
//! Counts are truncated to integers before any summation so the wedges of a
//! partition always add back up to the stated total exactly.

use crate::error::EngineError;

/// One wedge: label plus an exact integer count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionEntry {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoricalPartition {
    pub entries: Vec<PartitionEntry>,
}

impl CategoricalPartition {
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

/// Build a partition whose wedges are all explicitly named, in the given
/// order. Used when the source data enumerates every bucket itself.
pub fn from_named(named: &[(&str, f64)]) -> CategoricalPartition {
    CategoricalPartition {
        entries: named
            .iter()
            .map(|(label, count)| PartitionEntry {
                label: (*label).to_string(),
                count: *count as i64,
            })
            .collect(),
    }
}

/// Split a known total into a leading residual bucket plus the named
/// sub-counts, in order. Named counts exceeding the total are a
/// data-consistency violation from the source, reported instead of emitting
/// a negative wedge.
pub fn decompose(
    residual_label: &str,
    total: f64,
    named: &[(&str, f64)],
) -> Result<CategoricalPartition, EngineError> {
    let total = total as i64;
    let counts: Vec<i64> = named.iter().map(|(_, count)| *count as i64).collect();
    let named_sum: i64 = counts.iter().sum();
    let residual = total - named_sum;
    if residual < 0 {
        return Err(EngineError::PartitionInconsistency { excess: -residual });
    }

    let mut entries = Vec::with_capacity(named.len() + 1);
    entries.push(PartitionEntry {
        label: residual_label.to_string(),
        count: residual,
    });
    for ((label, _), count) in named.iter().zip(counts) {
        entries.push(PartitionEntry {
            label: (*label).to_string(),
            count,
        });
    }
    Ok(CategoricalPartition { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_leads_and_total_is_exact() {
        let named = [("Through Balls", 20.0), ("Crosses", 60.0), ("Switches", 15.0)];
        let partition = decompose("Live", 500.0, &named).unwrap();
        assert_eq!(partition.entries[0].label, "Live");
        assert_eq!(partition.entries[0].count, 405);
        assert_eq!(partition.entries.len(), 4);
        assert_eq!(partition.total(), 500);
    }

    #[test]
    fn fractional_counts_truncate_before_summation() {
        let named = [("A", 10.9), ("B", 4.2)];
        let partition = decompose("Rest", 20.7, &named).unwrap();
        assert_eq!(partition.entries[0].count, 6);
        assert_eq!(partition.total(), 20);
    }

    #[test]
    fn overrun_is_reported_not_negative() {
        let named = [("A", 40.0), ("B", 20.0)];
        let err = decompose("Rest", 50.0, &named).unwrap_err();
        assert!(matches!(
            err,
            EngineError::PartitionInconsistency { excess: 10 }
        ));
    }

    #[test]
    fn named_partition_keeps_input_order_and_counts() {
        let named = [
            ("Def Pen", 10.0),
            ("Def 3rd", 20.0),
            ("Mid 3rd", 40.0),
            ("Att 3rd", 25.0),
            ("Att Pen", 5.0),
        ];
        let partition = from_named(&named);
        let labels: Vec<&str> = partition.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Def Pen", "Def 3rd", "Mid 3rd", "Att 3rd", "Att Pen"]);
        assert_eq!(partition.total(), 100);
    }
}
