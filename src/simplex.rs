//! Probability-vector helpers.
//!
//! Small deterministic utilities shared by the samplers, the loops and the tests:
//! validation, normalization, arg-max and the Beta complement pair.

use crate::{SimError, SimResult};

/// Tolerance used when checking that a vector sums to one.
pub const SIMPLEX_TOL: f64 = 1e-9;

/// Total-mass drift accepted by [`check_probabilities`].
pub const DRAW_TOL: f64 = 1e-6;

/// `true` if `p` is non-empty and lies on the probability simplex within `tol`.
pub fn is_distribution(p: &[f64], tol: f64) -> bool {
    !p.is_empty() && logp::validate_simplex(p, tol).is_ok()
}

/// Check a probability vector before it is used for a categorical draw.
///
/// Accepts small floating-point drift in the total (up to [`DRAW_TOL`]), which
/// is what concatenated or sliced Dirichlet draws accumulate in practice.
pub fn check_probabilities(p: &[f64]) -> SimResult<()> {
    if p.is_empty() {
        return Err(SimError::InvalidProbabilities {
            reason: "empty vector".to_string(),
        });
    }
    logp::validate_simplex(p, DRAW_TOL)?;
    Ok(())
}

/// Scale non-negative weights in place so they sum to one.
///
/// Weights are divided by the largest one before summing, so the total stays
/// finite even when individual weights are near `f64::MAX`; infinite weights
/// share the mass equally. Returns `false` and leaves `p` untouched when there
/// is no positive mass to scale.
pub fn normalize_in_place(p: &mut [f64]) -> bool {
    let peak = p.iter().copied().fold(0.0_f64, f64::max);
    if !(peak > 0.0) {
        return false;
    }
    for x in p.iter_mut() {
        *x = match (peak.is_finite(), x.is_infinite()) {
            (true, _) => *x / peak,
            (false, true) => 1.0,
            (false, false) => 0.0,
        };
    }
    let total: f64 = p.iter().sum();
    for x in p.iter_mut() {
        *x /= total;
    }
    true
}

/// Index of the largest entry (first one wins on ties). `None` for an empty slice.
pub fn argmax<T: PartialOrd + Copy>(xs: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &x) in xs.iter().enumerate() {
        if best.map_or(true, |(_, b)| x > b) {
            best = Some((i, x));
        }
    }
    best.map(|(i, _)| i)
}

/// Pair a Beta draw with its complement: `[p, 1 - p]`.
///
/// `p` is clamped into `[0, 1]` first so the pair is always a distribution.
pub fn complement_pair(p: f64) -> [f64; 2] {
    let p = if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.5 };
    [p, 1.0 - p]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0u32, 1, 1]), Some(1));
        assert_eq!(argmax(&[3.0, 1.0, 3.0]), Some(0));
        assert_eq!(argmax::<f64>(&[]), None);
    }

    #[test]
    fn one_hot_argmax_is_the_hot_index() {
        assert_eq!(argmax(&[0u32, 0, 0, 1, 0]), Some(3));
    }

    #[test]
    fn check_rejects_malformed_vectors() {
        assert!(check_probabilities(&[]).is_err());
        assert!(check_probabilities(&[0.5, f64::NAN]).is_err());
        assert!(check_probabilities(&[1.5, -0.5]).is_err());
        assert!(check_probabilities(&[0.2, 0.2]).is_err());
        assert!(check_probabilities(&[0.25, 0.75]).is_ok());
    }

    #[test]
    fn check_reports_the_simplex_violation() {
        assert!(matches!(
            check_probabilities(&[0.2, 0.2]),
            Err(SimError::Simplex(_))
        ));
        assert!(check_probabilities(&[0.25, 0.75 + 1e-8]).is_ok());
        assert!(!is_distribution(&[0.25, 0.75 + 1e-8], SIMPLEX_TOL));
    }

    #[test]
    fn normalize_without_mass_leaves_input_alone() {
        let mut p = vec![0.0, 0.0, 0.0];
        assert!(!normalize_in_place(&mut p));
        assert_eq!(p, vec![0.0; 3]);
        assert!(!normalize_in_place(&mut [0.0_f64; 0]));
    }

    #[test]
    fn normalize_handles_huge_weights() {
        let mut p = vec![f64::MAX, f64::MAX, 0.0];
        assert!(normalize_in_place(&mut p));
        assert_eq!(p, vec![0.5, 0.5, 0.0]);

        let mut p = vec![f64::INFINITY, 3.0, f64::INFINITY];
        assert!(normalize_in_place(&mut p));
        assert_eq!(p, vec![0.5, 0.0, 0.5]);
    }

    #[test]
    fn complement_pair_sums_to_one() {
        let [p, q] = complement_pair(0.3);
        assert!((p + q - 1.0).abs() < 1e-12);
        assert_eq!(complement_pair(7.0), [1.0, 0.0]);
    }

    proptest! {
        #[test]
        fn normalize_yields_a_distribution(
            xs in proptest::collection::vec(0.0f64..1.0e300f64, 1..32),
        ) {
            let mut p = xs.clone();
            p[0] += 1.0;
            prop_assert!(normalize_in_place(&mut p));
            prop_assert!(is_distribution(&p, SIMPLEX_TOL), "p={:?}", p);
        }

        #[test]
        fn argmax_is_in_bounds(xs in proptest::collection::vec(any::<u32>(), 1..64)) {
            let i = argmax(&xs).unwrap();
            prop_assert!(i < xs.len());
            prop_assert!(xs.iter().all(|&x| x <= xs[i]));
        }
    }
}
