//! Shared local-search configuration.

use crate::error::{Error, Result};

/// When a run counts as converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Convergence {
    /// After the acceptance decision, stop if `|proposed - current| < epsilon`.
    ///
    /// `current` is the value after a possible acceptance, so an accepted
    /// move always stops the run, and a rejected proposal whose value is
    /// within epsilon of the current one stops it as well.
    #[default]
    Proposal,

    /// Stop only when an accepted move changes the value by less than epsilon.
    Improvement,
}

/// What happens to proposals that leave the search box.
///
/// Only the initial sample is drawn inside the bounds. Perturbation moves
/// can step outside unless a policy other than `Ignore` is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BoundPolicy {
    /// Evaluate proposals wherever they land.
    #[default]
    Ignore,
    /// Project proposals onto the box before evaluating them.
    Clamp,
    /// Discard out-of-box proposals without evaluating them. The iteration
    /// still counts and annealing still cools.
    Reject,
}

/// Configuration common to every local-search optimizer.
///
/// # Examples
///
/// ```
/// use u_localsearch::{Convergence, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_iterations(5000)
///     .with_step_size(0.25)
///     .with_convergence(Convergence::Improvement)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!((config.step() - 0.25).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of iterations. 0 returns the initial sample only.
    pub iterations: usize,

    /// Convergence tolerance, and the default perturbation magnitude.
    pub epsilon: f64,

    /// Perturbation half-width. `None` uses `epsilon`.
    pub step_size: Option<f64>,

    pub convergence: Convergence,

    pub bound_policy: BoundPolicy,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            step_size: None,
            convergence: Convergence::default(),
            bound_policy: BoundPolicy::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = Some(step);
        self
    }

    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn with_bound_policy(mut self, policy: BoundPolicy) -> Self {
        self.bound_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective perturbation half-width.
    pub fn step(&self) -> f64 {
        self.step_size.unwrap_or(self.epsilon)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::invalid(
                "epsilon",
                format!("must be positive and finite, got {}", self.epsilon),
            ));
        }
        if let Some(step) = self.step_size {
            if !(step.is_finite() && step > 0.0) {
                return Err(Error::invalid(
                    "step_size",
                    format!("must be positive and finite, got {step}"),
                ));
            }
        }
        Ok(())
    }
}
