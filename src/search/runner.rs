//! Generic local-search execution loop.
//!
//! # Algorithm
//!
//! 1. Sample `x` uniformly inside the bounds, record it as the first path entry
//! 2. Repeat up to `iterations` times:
//!    a. **Propose** `x'` from `x` (proposal strategy)
//!    b. Apply the bound policy, evaluate `f(x')`
//!    c. **Accept or not** (acceptance strategy); on acceptance `x = x'`
//!    and `x'` is appended to the path
//!    d. End-of-iteration update of the acceptance rule (cooling)
//!    e. Stop if the rule is exhausted or the convergence check fires
//! 3. Return the final state and the path

use super::config::{BoundPolicy, Convergence, SearchConfig};
use super::types::{Acceptance, Proposal, SearchResult, StopReason};
use crate::error::Result;
use crate::objective::Objective;
use crate::path::Path;
use crate::rng::seeded_or_random;
use crate::space::Bounds;
use rand::Rng;
use tracing::{debug, trace};

/// Runs a local search built from a proposal and an acceptance strategy.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs with a generator seeded from `config.seed`.
    pub fn run<O, P, A>(
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        proposal: &mut P,
        acceptance: &mut A,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        P: Proposal,
        A: Acceptance,
    {
        let mut rng = seeded_or_random(config.seed);
        Self::run_with_rng(objective, bounds, config, proposal, acceptance, &mut rng)
    }

    /// Runs with a caller-supplied generator. `config.seed` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::rng::create_rng;
    /// use u_localsearch::search::{LocalSearchRunner, StrictImprovement, UniformResample};
    /// use u_localsearch::{sphere, Bounds, SearchConfig};
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = SearchConfig::default().with_iterations(100);
    /// let mut rng = create_rng(42);
    /// let result = LocalSearchRunner::run_with_rng(
    ///     &sphere,
    ///     &bounds,
    ///     &config,
    ///     &mut UniformResample,
    ///     &mut StrictImprovement,
    ///     &mut rng,
    /// )
    /// .unwrap();
    /// assert_eq!(result.path.last().1, result.value);
    /// ```
    pub fn run_with_rng<O, P, A, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        proposal: &mut P,
        acceptance: &mut A,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        P: Proposal,
        A: Acceptance,
        R: Rng,
    {
        config.validate()?;
        let epsilon = config.epsilon;

        let mut current = bounds.sample(rng);
        let mut current_value = objective.evaluate(&current);
        let mut path = Path::new(current.clone(), current_value);

        let mut temperature_history = Vec::new();
        if let Some(t) = acceptance.temperature() {
            temperature_history.push(t);
        }

        let mut iterations = 0usize;
        let mut evaluations = 1usize;
        let mut stop_reason = StopReason::IterationLimit;

        debug!(
            "Starting local search: {} dimensions, {} iterations, initial value {}",
            bounds.dim(),
            config.iterations,
            current_value
        );

        while iterations < config.iterations {
            iterations += 1;

            let mut candidate = proposal.propose(&current, bounds, rng);
            let admissible = match config.bound_policy {
                BoundPolicy::Ignore => true,
                BoundPolicy::Clamp => {
                    bounds.clamp(&mut candidate);
                    true
                }
                BoundPolicy::Reject => bounds.contains(&candidate),
            };

            let mut converged = false;
            if admissible {
                let next_value = objective.evaluate(&candidate);
                evaluations += 1;

                let previous_value = current_value;
                let accepted = acceptance.accept(current_value, next_value, rng);
                if accepted {
                    trace!(
                        "Accepted move at iteration {}: {} -> {}",
                        iterations,
                        previous_value,
                        next_value
                    );
                    path.push(candidate.clone(), next_value);
                    current = candidate;
                    current_value = next_value;
                }

                converged = match config.convergence {
                    Convergence::Proposal => (next_value - current_value).abs() < epsilon,
                    Convergence::Improvement => {
                        accepted && (previous_value - next_value).abs() < epsilon
                    }
                };
            }

            acceptance.end_iteration();
            if let Some(t) = acceptance.temperature() {
                temperature_history.push(t);
            }

            if acceptance.exhausted(epsilon) {
                stop_reason = StopReason::TemperatureFloor;
                break;
            }
            if converged {
                stop_reason = StopReason::Converged;
                break;
            }
        }

        debug!(
            "Local search stopped ({}) after {} iterations: value {}, {} accepted moves",
            stop_reason,
            iterations,
            current_value,
            path.len() - 1
        );

        Ok(SearchResult {
            accepted_moves: path.len() - 1,
            solution: current,
            value: current_value,
            path,
            iterations,
            evaluations,
            stop_reason,
            temperature_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::objective::sphere;
    use crate::rng::create_rng;
    use crate::search::strategy::{
        Metropolis, SingleCoordinatePerturb, StrictImprovement, UniformResample,
    };

    fn square_box() -> Bounds {
        Bounds::uniform(2, -5.0, 5.0).unwrap()
    }

    #[test]
    fn test_zero_iterations_returns_initial_sample() {
        let config = SearchConfig::default().with_iterations(0).with_seed(42);
        let result = LocalSearchRunner::run(
            &sphere,
            &square_box(),
            &config,
            &mut UniformResample,
            &mut StrictImprovement,
        )
        .unwrap();

        assert_eq!(result.path.len(), 1);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.evaluations, 1);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
        assert!(square_box().contains(&result.solution));
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let config = SearchConfig::default().with_epsilon(0.0);
        let err = LocalSearchRunner::run(
            &sphere,
            &square_box(),
            &config,
            &mut UniformResample,
            &mut StrictImprovement,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "epsilon", .. }));
    }

    #[test]
    fn test_proposal_convergence_stops_on_first_acceptance() {
        let config = SearchConfig::default().with_step_size(0.5).with_seed(7);
        let result = LocalSearchRunner::run(
            &sphere,
            &square_box(),
            &config,
            &mut SingleCoordinatePerturb { step: 0.5 },
            &mut StrictImprovement,
        )
        .unwrap();

        assert!(result.path.len() <= 2);
        if result.path.len() == 2 {
            assert_eq!(result.stop_reason, StopReason::Converged);
        }
    }

    #[test]
    fn test_rejected_proposal_within_epsilon_stops_run() {
        // A flat objective: every proposal is rejected and lands within epsilon.
        let flat = |_: &[f64]| 1.0;
        let config = SearchConfig::default().with_seed(3);
        let result = LocalSearchRunner::run(
            &flat,
            &square_box(),
            &config,
            &mut UniformResample,
            &mut StrictImprovement,
        )
        .unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.path.len(), 1);
        assert_eq!(result.stop_reason, StopReason::Converged);
    }

    #[test]
    fn test_improvement_convergence_ignores_rejections() {
        let flat = |_: &[f64]| 1.0;
        let config = SearchConfig::default()
            .with_iterations(50)
            .with_convergence(Convergence::Improvement)
            .with_seed(3);
        let result = LocalSearchRunner::run(
            &flat,
            &square_box(),
            &config,
            &mut UniformResample,
            &mut StrictImprovement,
        )
        .unwrap();

        assert_eq!(result.iterations, 50);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_reject_policy_skips_evaluation() {
        // Start pinned at the upper limit; half of all steps leave the box.
        let bounds = Bounds::new(vec![(1.0, 1.0)]).unwrap();
        let config = SearchConfig::default()
            .with_iterations(100)
            .with_step_size(0.5)
            .with_convergence(Convergence::Improvement)
            .with_bound_policy(BoundPolicy::Reject)
            .with_seed(11);
        let result = LocalSearchRunner::run(
            &|x: &[f64]| -x[0],
            &bounds,
            &config,
            &mut SingleCoordinatePerturb { step: 0.5 },
            &mut StrictImprovement,
        )
        .unwrap();

        assert_eq!(result.iterations, 100);
        assert!(result.evaluations < 101);
        assert_eq!(result.path.len(), 1);
    }

    #[test]
    fn test_temperature_history_recorded() {
        let config = SearchConfig::default()
            .with_iterations(10)
            .with_step_size(0.5)
            .with_convergence(Convergence::Improvement)
            .with_seed(5);
        let mut rng = create_rng(5);
        let result = LocalSearchRunner::run_with_rng(
            &sphere,
            &square_box(),
            &config,
            &mut SingleCoordinatePerturb { step: 0.5 },
            &mut Metropolis::new(100.0, 0.5),
            &mut rng,
        )
        .unwrap();

        assert_eq!(result.temperature_history.len(), result.iterations + 1);
        assert!((result.temperature_history[0] - 100.0).abs() < 1e-12);
        for w in result.temperature_history.windows(2) {
            assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let config = SearchConfig::default()
            .with_step_size(0.3)
            .with_convergence(Convergence::Improvement);
        let run = || {
            let mut rng = create_rng(99);
            LocalSearchRunner::run_with_rng(
                &sphere,
                &square_box(),
                &config,
                &mut SingleCoordinatePerturb { step: 0.3 },
                &mut StrictImprovement,
                &mut rng,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }
}
