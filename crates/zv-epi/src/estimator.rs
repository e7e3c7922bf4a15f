//! Zoonotic Estimator: Bayesian posterior of animal origin.
//!
//! ```text
//! f(E) = 1 - exp(-E)
//!
//!                  f · Pois(k; λ_zoo) · prior
//! P = ─────────────────────────────────────────────────────────
//!     f · Pois(k; λ_zoo) · prior + (1 - f) · Pois(k; λ_hum) · (1 - prior)
//! ```
//!
//! `E` is the animal hazard recorded at episode onset and `k` the episode's
//! secondary-case count.  A zero denominator yields 0.

use zv_core::SimConfig;

/// Poisson probability mass `λ^k e^{-λ} / k!`, computed in log space.
///
/// `λ <= 0` is the degenerate distribution concentrated at 0.
pub fn poisson_pmf(k: u32, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    let ln_k_factorial: f64 = (2..=k).map(|i| (i as f64).ln()).sum();
    (k as f64 * lambda.ln() - lambda - ln_k_factorial).exp()
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoonoticEstimator {
    pub prior:           f64,
    pub lambda_zoonotic: f64,
    pub lambda_human:    f64,
}

impl Default for ZoonoticEstimator {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl ZoonoticEstimator {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            prior:           config.prior_zoonotic,
            lambda_zoonotic: config.lambda_zoonotic,
            lambda_human:    config.lambda_human,
        }
    }

    /// Posterior probability that an episode with onset animal hazard
    /// `animal_hazard` and `secondary_cases` secondary cases is zoonotic.
    ///
    /// Negative hazard is treated as 0.  Always in `[0, 1]`.
    pub fn posterior(&self, animal_hazard: f64, secondary_cases: u32) -> f64 {
        let f = 1.0 - (-animal_hazard.max(0.0)).exp();
        let zoonotic = f * poisson_pmf(secondary_cases, self.lambda_zoonotic) * self.prior;
        let human = (1.0 - f) * poisson_pmf(secondary_cases, self.lambda_human) * (1.0 - self.prior);
        let denominator = zoonotic + human;
        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }
        (zoonotic / denominator).clamp(0.0, 1.0)
    }
}
