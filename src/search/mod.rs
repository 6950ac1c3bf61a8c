//! Generic local search.
//!
//! Hill climbing, random local search and simulated annealing share one
//! loop: seed, propose, accept or reject, record, stop. This module holds
//! that loop together with the two strategy seams it is parameterized by:
//!
//! - [`Proposal`]: how a candidate is generated from the current point
//!   ([`SingleCoordinatePerturb`], [`UniformResample`]).
//! - [`Acceptance`]: whether the candidate replaces the current point
//!   ([`StrictImprovement`], [`Metropolis`]).

mod config;
mod runner;
mod strategy;
mod types;

pub use config::{BoundPolicy, Convergence, SearchConfig};
pub use runner::LocalSearchRunner;
pub use strategy::{Metropolis, SingleCoordinatePerturb, StrictImprovement, UniformResample};
pub use types::{Acceptance, Proposal, SearchResult, StopReason};
