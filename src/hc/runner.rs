//! Hill climbing execution.

use crate::error::Result;
use crate::objective::Objective;
use crate::path::Path;
use crate::rng::seeded_or_random;
use crate::search::{
    LocalSearchRunner, SearchConfig, SearchResult, SingleCoordinatePerturb, StrictImprovement,
};
use crate::space::Bounds;
use rand::Rng;

/// Single-coordinate greedy descent.
pub struct HillClimbing;

impl HillClimbing {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    pub fn run<O>(objective: &O, bounds: &Bounds, config: &SearchConfig) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = seeded_or_random(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs hill climbing with a caller-supplied generator.
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
        let mut proposal = SingleCoordinatePerturb { step: config.step() };
        LocalSearchRunner::run_with_rng(
            objective,
            bounds,
            config,
            &mut proposal,
            &mut StrictImprovement,
            rng,
        )
    }
}

/// `hill_climbing(objective, bounds, iterations, epsilon) -> (best, value, path)`.
///
/// Uses the classic defaults: perturbation half-width and convergence
/// tolerance are both `epsilon`, and bounds only constrain the initial
/// sample.
///
/// # Examples
///
/// ```
/// use u_localsearch::rng::create_rng;
/// use u_localsearch::{hill_climbing, sphere, Bounds};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let (best, value, path) = hill_climbing(&sphere, &bounds, 1000, 1e-6, &mut create_rng(1)).unwrap();
/// assert_eq!(best.len(), 2);
/// assert_eq!(path.last().1, value);
/// ```
pub fn hill_climbing<O, R>(
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
    HillClimbing::run_with_rng(objective, bounds, &config, rng).map(SearchResult::into_parts)
}
