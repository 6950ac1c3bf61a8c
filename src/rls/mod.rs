//! Random Local Search (RLS).
//!
//! Every step draws a completely new point uniformly inside the bounds and
//! keeps it if it strictly improves on the current one. Proposals never
//! leave the box, so the bound policy has no effect here.

mod runner;

pub use runner::{random_local_search, RandomLocalSearch};
