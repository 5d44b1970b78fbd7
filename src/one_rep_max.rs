//! Estimated one-rep max (e1RM) via the Brzycki formula.

/// Rep count at which the Brzycki denominator reaches zero.
pub const BRZYCKI_REP_LIMIT: u32 = 37;

/// Brzycki: `weight × 36 / (37 − reps)`.
///
/// Deliberately unguarded: 37 reps gives infinity and anything above gives a
/// negative number. Filter with [`is_in_formula_domain`] before comparing.
pub fn estimate(weight: f64, reps: u32) -> f64 {
    weight * (36.0 / (37.0 - f64::from(reps)))
}

/// Rep counts for which the estimate is finite, positive and monotonic.
pub fn is_in_formula_domain(reps: u32) -> bool {
    reps > 0 && reps < BRZYCKI_REP_LIMIT
}

/// The estimate for a set, or `None` when weight or reps are missing or out
/// of the formula's domain.
pub fn estimate_checked(weight: Option<f64>, reps: Option<u32>) -> Option<f64> {
    match (weight, reps) {
        (Some(weight), Some(reps)) if is_in_formula_domain(reps) => Some(estimate(weight, reps)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_is_the_weight() {
        assert_eq!(estimate(225.0, 1), 225.0);
    }

    #[test]
    fn test_known_values() {
        assert!((estimate(185.0, 10) - 246.67).abs() < 0.1);
        assert!((estimate(185.0, 8) - 229.66).abs() < 0.1);
        // 100 × 36 / 32
        assert_eq!(estimate(100.0, 5), 112.5);
    }

    #[test]
    fn test_formula_boundary() {
        assert!(estimate(100.0, 37).is_infinite());
        assert!(estimate(100.0, 38) < 0.0);
    }

    #[test]
    fn test_domain() {
        assert!(!is_in_formula_domain(0));
        assert!(is_in_formula_domain(1));
        assert!(is_in_formula_domain(36));
        assert!(!is_in_formula_domain(37));
        assert!(!is_in_formula_domain(50));
    }

    #[test]
    fn test_estimate_checked_skips_out_of_domain() {
        assert_eq!(estimate_checked(Some(100.0), Some(37)), None);
        assert_eq!(estimate_checked(Some(100.0), Some(0)), None);
        assert_eq!(estimate_checked(None, Some(5)), None);
        assert_eq!(estimate_checked(Some(100.0), None), None);
        assert_eq!(estimate_checked(Some(100.0), Some(5)), Some(112.5));
    }
}
