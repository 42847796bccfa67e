//! Random sampling collaborator.
//!
//! The loops never touch an RNG directly: they ask a [`Sampler`] for Dirichlet,
//! Beta and one-hot multinomial draws. [`RandSampler`] is the `rand` /
//! `rand_distr` implementation.
//!
//! Notes:
//! - [`RandSampler`] is **seedable** so runs can be reproduced in tests.
//! - Default construction uses a fixed seed (deterministic by default).
//!   [`RandSampler::from_entropy`] gives the unseeded behaviour instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Gamma};

use crate::simplex::{argmax, check_probabilities, normalize_in_place};
use crate::{SimError, SimResult};

/// Source of the three draws a sampling loop needs.
pub trait Sampler {
    /// One probability vector from `Dirichlet(alpha)`.
    ///
    /// The result has `alpha.len()` non-negative entries summing to 1.
    fn dirichlet(&mut self, alpha: &[f64]) -> SimResult<Vec<f64>>;

    /// One scalar in `[0, 1]` from `Beta(a, b)`.
    fn beta(&mut self, a: f64, b: f64) -> SimResult<f64>;

    /// One one-hot vector from `Multinomial(1, probs)`.
    fn multinomial_one_hot(&mut self, probs: &[f64]) -> SimResult<Vec<u32>>;

    /// Categorical draw: arg-max of a one-hot multinomial draw.
    fn categorical(&mut self, probs: &[f64]) -> SimResult<usize> {
        let one_hot = self.multinomial_one_hot(probs)?;
        argmax(&one_hot).ok_or_else(|| SimError::InvalidProbabilities {
            reason: "multinomial draw returned no categories".to_string(),
        })
    }
}

/// Seedable sampler backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct RandSampler {
    rng: StdRng,
}

impl RandSampler {
    /// Create a sampler with a deterministic fixed seed (0).
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a sampler with a fixed seed (reproducible).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the operating system (not reproducible).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Pick an index with probability proportional to `weights` (inverse CDF).
    ///
    /// Robust to small floating-point error: if the CDF undershoots the drawn
    /// value, the last index is returned.
    fn sample_index(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let r: f64 = self.rng.random::<f64>() * total;
        let mut cdf = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            cdf += w;
            if r < cdf {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}

impl Default for RandSampler {
    fn default() -> Self {
        Self::new()
    }
}

fn check_positive(what: &'static str, params: &[f64]) -> SimResult<()> {
    if params.is_empty() {
        return Err(SimError::EmptyParameters { what });
    }
    for (index, &value) in params.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(SimError::InvalidParameter { what, index, value });
        }
    }
    Ok(())
}

impl Sampler for RandSampler {
    fn dirichlet(&mut self, alpha: &[f64]) -> SimResult<Vec<f64>> {
        check_positive("dirichlet", alpha)?;

        // Normalized independent Gamma(alpha_i, 1) draws.
        let mut xs = Vec::with_capacity(alpha.len());
        for &a in alpha {
            let g = Gamma::new(a, 1.0).map_err(|e| SimError::distribution("gamma", e))?;
            xs.push(g.sample(&mut self.rng));
        }
        if normalize_in_place(&mut xs) {
            return Ok(xs);
        }

        // Every Gamma draw underflowed (tiny concentrations): the Dirichlet is
        // then concentrated on a vertex chosen with probability ~ alpha.
        let k = self.sample_index(alpha);
        let mut one_hot = vec![0.0; alpha.len()];
        one_hot[k] = 1.0;
        Ok(one_hot)
    }

    fn beta(&mut self, a: f64, b: f64) -> SimResult<f64> {
        let dist = Beta::new(a, b).map_err(|e| SimError::distribution("beta", e))?;
        Ok(dist.sample(&mut self.rng))
    }

    fn multinomial_one_hot(&mut self, probs: &[f64]) -> SimResult<Vec<u32>> {
        check_probabilities(probs)?;
        let k = self.sample_index(probs);
        let mut one_hot = vec![0u32; probs.len()];
        one_hot[k] = 1;
        Ok(one_hot)
    }
}
