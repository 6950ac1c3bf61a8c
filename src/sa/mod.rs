//! Simulated Annealing (SA).
//!
//! Single-coordinate perturbation, like hill climbing, but worse candidates
//! are accepted with probability `exp(-delta / T)`. The temperature `T`
//! decays geometrically every iteration, so the search explores early and
//! turns greedy as it cools. The run ends when `T` drops below epsilon.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{simulated_annealing, SimulatedAnnealing};
