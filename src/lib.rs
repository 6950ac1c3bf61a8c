//! Stochastic local search over bounded real vector spaces.
//!
//! Provides three single-solution optimizers that minimize a scalar
//! objective and record the trajectory of accepted points:
//!
//! - **Hill Climbing (HC)**: perturb one coordinate, keep strict
//!   improvements only.
//! - **Random Local Search (RLS)**: resample the whole point uniformly
//!   inside the bounds, keep strict improvements only.
//! - **Simulated Annealing (SA)**: perturb one coordinate, accept worse
//!   points with a Metropolis probability under geometric cooling.
//!
//! All three are thin configurations of one generic loop
//! ([`search::LocalSearchRunner`]) parameterized by a proposal strategy and
//! an acceptance strategy.
//!
//! # Architecture
//!
//! Randomness is always explicit: every optimizer takes either a seed
//! through [`SearchConfig`] or a caller-owned generator. The returned
//! [`Path`] can be rendered with the `plot` feature; the `cli` feature
//! builds the `u-localsearch` comparison binary.
//!
//! # Examples
//!
//! ```
//! use u_localsearch::hc::HillClimbing;
//! use u_localsearch::{sphere, Bounds, Convergence, SearchConfig};
//!
//! let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
//! let config = SearchConfig::default()
//!     .with_step_size(0.5)
//!     .with_convergence(Convergence::Improvement)
//!     .with_seed(42);
//!
//! let result = HillClimbing::run(&sphere, &bounds, &config).unwrap();
//! assert!(result.value < 1.0);
//! assert!(result.path.is_strictly_decreasing());
//! ```

pub mod compare;
pub mod error;
pub mod hc;
pub mod objective;
pub mod path;
#[cfg(feature = "plot")]
pub mod plot;
pub mod rls;
pub mod rng;
pub mod sa;
pub mod search;
pub mod space;

pub use error::{Error, Result};
pub use hc::hill_climbing;
pub use objective::{rastrigin, rosenbrock, sphere, Objective, TestFunction};
pub use path::Path;
pub use rls::random_local_search;
pub use sa::simulated_annealing;
pub use search::{BoundPolicy, Convergence, SearchConfig, SearchResult, StopReason};
pub use space::Bounds;
