//! Joint scaling of two per-90 vectors for radar display.

use crate::metrics::round2;

/// Damping divisor applied after the joint max: the larger value lands at
/// 1/1.1 of the outer ring, leaving headroom for the on-chart labels.
pub const DAMPING: f64 = 1.1;

/// Scale two equal-length vectors against their per-category joint maximum,
/// then damp and round. Every output lies in [0, 0.91]. A joint maximum of
/// zero maps both sides to zero; there is no division in that branch.
pub fn normalize_pair(v1: &[f64], v2: &[f64]) -> (Vec<f64>, Vec<f64>) {
    debug_assert_eq!(v1.len(), v2.len());
    let mut n1 = Vec::with_capacity(v1.len());
    let mut n2 = Vec::with_capacity(v2.len());
    for (&a, &b) in v1.iter().zip(v2) {
        let max = a.max(b);
        if max == 0.0 {
            n1.push(0.0);
            n2.push(0.0);
        } else {
            n1.push(round2(a / max / DAMPING));
            n2.push(round2(b / max / DAMPING));
        }
    }
    (n1, n2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_sits_at_the_damped_ceiling() {
        let (n1, n2) = normalize_pair(&[0.5, 2.0], &[0.25, 4.0]);
        assert_eq!(n1, vec![0.91, 0.45]);
        assert_eq!(n2, vec![0.45, 0.91]);
    }

    #[test]
    fn equal_positive_values_tie_at_the_ceiling() {
        let (n1, n2) = normalize_pair(&[0.5], &[0.5]);
        assert_eq!(n1, vec![0.91]);
        assert_eq!(n2, vec![0.91]);
    }

    #[test]
    fn joint_zero_maps_to_zero_not_nan() {
        let (n1, n2) = normalize_pair(&[0.0, 1.0], &[0.0, 0.5]);
        assert_eq!(n1[0], 0.0);
        assert_eq!(n2[0], 0.0);
    }

    #[test]
    fn outputs_stay_inside_the_headroom_band() {
        let v1 = [0.0, 0.01, 3.7, 91.2, 0.33];
        let v2 = [0.0, 4.5, 3.7, 0.0, 0.32];
        let (n1, n2) = normalize_pair(&v1, &v2);
        for value in n1.iter().chain(&n2) {
            assert!((0.0..=0.91).contains(value), "out of band: {value}");
        }
    }
}
