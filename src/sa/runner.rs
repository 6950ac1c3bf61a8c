//! SA execution.

use super::config::AnnealingConfig;
use crate::error::Result;
use crate::objective::Objective;
use crate::path::Path;
use crate::rng::seeded_or_random;
use crate::search::{
    LocalSearchRunner, Metropolis, SearchConfig, SearchResult, SingleCoordinatePerturb,
};
use crate::space::Bounds;
use rand::Rng;

/// Single-coordinate perturbation with Metropolis acceptance.
pub struct SimulatedAnnealing;

impl SimulatedAnnealing {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<O>(
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        annealing: &AnnealingConfig,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = seeded_or_random(config.seed);
        Self::run_with_rng(objective, bounds, config, annealing, &mut rng)
    }

    /// Runs SA with a caller-supplied generator.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        annealing: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        annealing.validate()?;

        let mut proposal = SingleCoordinatePerturb { step: config.step() };
        let mut acceptance =
            Metropolis::new(annealing.initial_temperature, annealing.cooling_rate);
        LocalSearchRunner::run_with_rng(
            objective,
            bounds,
            config,
            &mut proposal,
            &mut acceptance,
            rng,
        )
    }
}

/// `simulated_annealing(objective, bounds, iterations, temp, cooling_rate, epsilon) -> (best, value, path)`.
///
/// # Examples
///
/// ```
/// use u_localsearch::rng::create_rng;
/// use u_localsearch::{simulated_annealing, sphere, Bounds};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let (_, value, path) =
///     simulated_annealing(&sphere, &bounds, 1000, 1000.0, 0.95, 1e-6, &mut create_rng(3)).unwrap();
/// assert_eq!(path.last().1, value);
/// ```
pub fn simulated_annealing<O, R>(
    objective: &O,
    bounds: &Bounds,
    iterations: usize,
    temp: f64,
    cooling_rate: f64,
    epsilon: f64,
    rng: &mut R,
) -> Result<(Vec<f64>, f64, Path)>
where
    O: Objective + ?Sized,
    R: Rng,
{
    let config = SearchConfig::default()
        .with_iterations(iterations)
        .with_epsilon(epsilon);
    let annealing = AnnealingConfig {
        initial_temperature: temp,
        cooling_rate,
    };
    SimulatedAnnealing::run_with_rng(objective, bounds, &config, &annealing, rng)
        .map(SearchResult::into_parts)
}
