//! Axis-aligned search box and the bounded-sampling primitive.

use crate::error::{Error, Result};
use rand::Rng;

/// Per-dimension `(lower, upper)` limits of the search space.
///
/// Every instance goes through [`Bounds::new`], deserialized ones
/// included, so it is non-empty, finite and ordered (`lower <= upper` in
/// each dimension). Serialized as a plain list of `[lower, upper]` pairs.
///
/// # Examples
///
/// ```
/// use u_localsearch::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert!(Bounds::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    ranges: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps a list of per-dimension ranges.
    pub fn new(ranges: Vec<(f64, f64)>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(Error::invalid("bounds", "at least one dimension is required"));
        }
        for (i, &(lower, upper)) in ranges.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(Error::invalid(
                    "bounds",
                    format!("dimension {i} has a non-finite limit ({lower}, {upper})"),
                ));
            }
            if lower > upper {
                return Err(Error::invalid(
                    "bounds",
                    format!("dimension {i} has lower {lower} > upper {upper}"),
                ));
            }
        }
        Ok(Self { ranges })
    }

    /// The same `(lower, upper)` range repeated over `dim` dimensions.
    pub fn uniform(dim: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![(lower, upper); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.ranges.len()
    }

    pub fn ranges(&self) -> &[(f64, f64)] {
        &self.ranges
    }

    /// Midpoint of every dimension.
    pub fn center(&self) -> Vec<f64> {
        self.ranges.iter().map(|&(lo, hi)| 0.5 * (lo + hi)).collect()
    }

    /// Draws each coordinate independently and uniformly within its range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.ranges
            .iter()
            .map(|&(lo, hi)| rng.random_range(lo..=hi))
            .collect()
    }

    /// Whether `x` lies inside the box (limits included).
    ///
    /// A point of the wrong dimensionality is never inside.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dim()
            && x
                .iter()
                .zip(&self.ranges)
                .all(|(&xi, &(lo, hi))| xi >= lo && xi <= hi)
    }

    /// Projects `x` onto the box coordinate by coordinate.
    pub fn clamp(&self, x: &mut [f64]) {
        for (xi, &(lo, hi)) in x.iter_mut().zip(&self.ranges) {
            *xi = xi.clamp(lo, hi);
        }
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = Error;

    fn try_from(ranges: Vec<(f64, f64)>) -> Result<Self> {
        Bounds::new(ranges)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.ranges
    }
}
