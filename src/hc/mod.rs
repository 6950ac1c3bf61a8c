//! Hill Climbing (HC).
//!
//! Greedy single-coordinate descent: each step perturbs one randomly chosen
//! coordinate by a uniform offset and keeps the result only if it strictly
//! lowers the objective. Gets stuck in the first local minimum it reaches.

mod runner;

pub use runner::{hill_climbing, HillClimbing};
