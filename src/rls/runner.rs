//! Random local search execution.

use crate::error::Result;
use crate::objective::Objective;
use crate::path::Path;
use crate::rng::seeded_or_random;
use crate::search::{
    LocalSearchRunner, SearchConfig, SearchResult, StrictImprovement, UniformResample,
};
use crate::space::Bounds;
use rand::Rng;

/// Uniform resampling with strict-improvement acceptance.
pub struct RandomLocalSearch;

impl RandomLocalSearch {
    /// Runs random local search with a generator seeded from `config.seed`.
    pub fn run<O>(objective: &O, bounds: &Bounds, config: &SearchConfig) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = seeded_or_random(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs random local search with a caller-supplied generator.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        LocalSearchRunner::run_with_rng(
            objective,
            bounds,
            config,
            &mut UniformResample,
            &mut StrictImprovement,
            rng,
        )
    }
}

/// `random_local_search(objective, bounds, iterations, epsilon) -> (best, value, path)`.
pub fn random_local_search<O, R>(
    objective: &O,
    bounds: &Bounds,
    iterations: usize,
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
    RandomLocalSearch::run_with_rng(objective, bounds, &config, rng).map(SearchResult::into_parts)
}
