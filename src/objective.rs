//! Objective function contract and a few standard test surfaces.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// A scalar function to be minimized.
///
/// Implemented for every `Fn(&[f64]) -> f64`, so plain functions and
/// closures can be passed directly to the optimizers. Implementations are
/// expected to be deterministic and finite-valued; a panic inside
/// `evaluate` propagates out of the optimizer unchanged.
pub trait Objective {
    /// Evaluates the function at `x`. Lower is better.
    fn evaluate(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Sphere function: `sum(x_i^2)`, global minimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rastrigin function: highly multimodal, global minimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Rosenbrock function: narrow curved valley, global minimum 0 at `(1, ..., 1)`.
///
/// For a single dimension there are no pairs and the value is 0 everywhere.
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Named selection of the bundled test functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TestFunction {
    #[default]
    Sphere,
    Rastrigin,
    Rosenbrock,
}

impl TestFunction {
    pub fn name(self) -> &'static str {
        match self {
            TestFunction::Sphere => "sphere",
            TestFunction::Rastrigin => "rastrigin",
            TestFunction::Rosenbrock => "rosenbrock",
        }
    }

    /// Returns the function pointer for this surface.
    pub fn function(self) -> fn(&[f64]) -> f64 {
        match self {
            TestFunction::Sphere => sphere,
            TestFunction::Rastrigin => rastrigin,
            TestFunction::Rosenbrock => rosenbrock,
        }
    }
}

impl Objective for TestFunction {
    fn evaluate(&self, x: &[f64]) -> f64 {
        (self.function())(x)
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sphere" => Ok(TestFunction::Sphere),
            "rastrigin" => Ok(TestFunction::Rastrigin),
            "rosenbrock" => Ok(TestFunction::Rosenbrock),
            other => Err(format!("unknown test function: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(&[0.0, 0.0]), 0.0);
        assert!((sphere(&[3.0, -4.0]) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_rastrigin_minimum() {
        assert!(rastrigin(&[0.0, 0.0, 0.0]).abs() < 1e-12);
        assert!(rastrigin(&[0.5, 0.5]) > 0.0);
    }

    #[test]
    fn test_rosenbrock_minimum() {
        assert!(rosenbrock(&[1.0, 1.0, 1.0]).abs() < 1e-12);
        assert!((rosenbrock(&[0.0, 0.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_closure_is_objective() {
        let shift = 2.0;
        let f = |x: &[f64]| (x[0] - shift).powi(2);
        assert!((f.evaluate(&[2.0])).abs() < 1e-12);
        assert!((f.evaluate(&[0.0]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_test_function_parse() {
        assert_eq!("Sphere".parse::<TestFunction>(), Ok(TestFunction::Sphere));
        assert_eq!(
            "rosenbrock".parse::<TestFunction>(),
            Ok(TestFunction::Rosenbrock)
        );
        assert!("ackley".parse::<TestFunction>().is_err());
    }

    #[test]
    fn test_test_function_dispatch() {
        let x = [1.0, 2.0];
        assert_eq!(TestFunction::Sphere.evaluate(&x), sphere(&x));
        assert_eq!(TestFunction::Rastrigin.evaluate(&x), rastrigin(&x));
        assert_eq!(TestFunction::Rosenbrock.evaluate(&x), rosenbrock(&x));
    }
}
