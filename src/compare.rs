//! Side-by-side runs of all three optimizers on one problem.

use crate::error::Result;
use crate::hc::HillClimbing;
use crate::objective::Objective;
use crate::rls::RandomLocalSearch;
use crate::rng::create_rng;
use crate::sa::{AnnealingConfig, SimulatedAnnealing};
use crate::search::{SearchConfig, SearchResult};
use crate::space::Bounds;
use std::fmt;

/// The optimizers this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    HillClimbing,
    RandomLocalSearch,
    SimulatedAnnealing,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::HillClimbing,
        Algorithm::RandomLocalSearch,
        Algorithm::SimulatedAnnealing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::HillClimbing => "Hill Climbing",
            Algorithm::RandomLocalSearch => "Random Local Search",
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
        }
    }

    /// Runs this optimizer with its own generator built from `seed`.
    pub fn run<O>(
        self,
        objective: &O,
        bounds: &Bounds,
        config: &SearchConfig,
        annealing: &AnnealingConfig,
        seed: u64,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = create_rng(seed);
        match self {
            Algorithm::HillClimbing => {
                HillClimbing::run_with_rng(objective, bounds, config, &mut rng)
            }
            Algorithm::RandomLocalSearch => {
                RandomLocalSearch::run_with_rng(objective, bounds, config, &mut rng)
            }
            Algorithm::SimulatedAnnealing => {
                SimulatedAnnealing::run_with_rng(objective, bounds, config, annealing, &mut rng)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One optimizer's outcome in a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub algorithm: Algorithm,
    pub result: SearchResult,
}

impl Trajectory {
    pub fn label(&self) -> &'static str {
        self.algorithm.label()
    }
}

/// Runs hill climbing, random local search and simulated annealing.
///
/// Each optimizer gets its own generator seeded with `base + index`, where
/// `base` is `config.seed` (or a fresh random seed), so the outcome does
/// not depend on execution order. With the `parallel` feature the three
/// runs execute concurrently; each run is still sequential.
///
/// # Examples
///
/// ```
/// use u_localsearch::compare::{compare, Algorithm};
/// use u_localsearch::sa::AnnealingConfig;
/// use u_localsearch::{sphere, Bounds, SearchConfig};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let config = SearchConfig::default().with_seed(42);
/// let runs = compare(&sphere, &bounds, &config, &AnnealingConfig::default()).unwrap();
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[2].algorithm, Algorithm::SimulatedAnnealing);
/// ```
pub fn compare<O>(
    objective: &O,
    bounds: &Bounds,
    config: &SearchConfig,
    annealing: &AnnealingConfig,
) -> Result<Vec<Trajectory>>
where
    O: Objective + Sync + ?Sized,
{
    config.validate()?;
    annealing.validate()?;
    let base = config.seed.unwrap_or_else(rand::random);

    let run_one = |(index, algorithm): (usize, Algorithm)| -> Result<Trajectory> {
        let seed = base.wrapping_add(index as u64);
        let result = algorithm.run(objective, bounds, config, annealing, seed)?;
        tracing::debug!(
            "{} finished: value {} after {} iterations ({})",
            algorithm,
            result.value,
            result.iterations,
            result.stop_reason
        );
        Ok(Trajectory { algorithm, result })
    };

    #[cfg(feature = "parallel")]
    let runs: Result<Vec<Trajectory>> = {
        use rayon::prelude::*;
        Algorithm::ALL
            .into_par_iter()
            .enumerate()
            .map(run_one)
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let runs: Result<Vec<Trajectory>> =
        Algorithm::ALL.into_iter().enumerate().map(run_one).collect();

    runs
}
