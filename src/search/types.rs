//! Strategy traits and run results for the local-search loop.

use crate::path::Path;
use crate::space::Bounds;
use rand::Rng;
use std::fmt;

/// Generates a candidate from the current point.
pub trait Proposal {
    fn propose<R: Rng>(&mut self, current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64>;
}

/// Decides whether a candidate replaces the current point.
///
/// Besides the accept/reject decision, an acceptance rule may carry state
/// that evolves once per iteration (a temperature) and may end the run on
/// its own.
pub trait Acceptance {
    /// Returns `true` if a candidate with `next_value` should replace the
    /// current point with `current_value`. Lower is better.
    fn accept<R: Rng>(&mut self, current_value: f64, next_value: f64, rng: &mut R) -> bool;

    /// Called once at the end of every iteration, accepted or not.
    fn end_iteration(&mut self) {}

    /// Whether the rule's own state ends the run (e.g. temperature floor).
    fn exhausted(&self, _epsilon: f64) -> bool {
        false
    }

    /// Current temperature, for rules that have one.
    fn temperature(&self) -> Option<f64> {
        None
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The iteration budget was used up.
    IterationLimit,
    /// The convergence check fired.
    Converged,
    /// The annealing temperature dropped below epsilon.
    TemperatureFloor,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::IterationLimit => "iteration limit",
            StopReason::Converged => "converged",
            StopReason::TemperatureFloor => "temperature floor",
        };
        f.write_str(s)
    }
}

/// Result of a local-search run.
///
/// `solution` and `value` are the final current state, which is always
/// the last entry of `path`. For simulated annealing that is not
/// necessarily the lowest value ever visited.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Final candidate vector.
    pub solution: Vec<f64>,

    /// Objective value of `solution`.
    pub value: f64,

    /// Every accepted state, starting with the initial sample.
    pub path: Path,

    /// Iterations executed.
    pub iterations: usize,

    /// Objective evaluations, including the initial sample.
    pub evaluations: usize,

    /// Accepted moves (`path.len() - 1`).
    pub accepted_moves: usize,

    pub stop_reason: StopReason,

    /// Initial temperature followed by the temperature after each
    /// iteration. Empty for rules without a temperature.
    pub temperature_history: Vec<f64>,
}

impl SearchResult {
    /// Splits into `(final_vector, final_value, path)`.
    pub fn into_parts(self) -> (Vec<f64>, f64, Path) {
        (self.solution, self.value, self.path)
    }
}
