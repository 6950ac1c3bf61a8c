//! Trajectory of accepted states.

use crate::error::{Error, Result};

/// Chronological record of every accepted point and its objective value.
///
/// A path always starts with the initial sample, so it is never empty.
/// Optimizers append to it while running; callers only get read access.
/// Deserialization enforces the same shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathRecord"))]
pub struct Path {
    points: Vec<Vec<f64>>,
    values: Vec<f64>,
}

impl Path {
    pub(crate) fn new(initial: Vec<f64>, value: f64) -> Self {
        Self {
            points: vec![initial],
            values: vec![value],
        }
    }

    pub(crate) fn push(&mut self, point: Vec<f64>, value: f64) {
        self.points.push(point);
        self.values.push(value);
    }

    /// Number of recorded states (at least 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The initial sample.
    pub fn first(&self) -> (&[f64], f64) {
        (&self.points[0], self.values[0])
    }

    /// The most recently accepted state.
    pub fn last(&self) -> (&[f64], f64) {
        let i = self.points.len() - 1;
        (&self.points[i], self.values[i])
    }

    /// Iterates `(point, value)` pairs in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.points
            .iter()
            .map(Vec::as_slice)
            .zip(self.values.iter().copied())
    }

    /// Whether each recorded value is strictly below its predecessor.
    pub fn is_strictly_decreasing(&self) -> bool {
        self.values.windows(2).all(|w| w[1] < w[0])
    }

    /// Number of accepted transitions that increased the objective.
    pub fn uphill_moves(&self) -> usize {
        self.values.windows(2).filter(|w| w[1] > w[0]).count()
    }

    /// Projects every point onto two coordinates, e.g. for plotting.
    pub fn project(&self, i: usize, j: usize) -> Result<Vec<(f64, f64)>> {
        let dim = self.points[0].len();
        let needed = i.max(j) + 1;
        if needed > dim {
            return Err(Error::DimensionMismatch {
                expected: needed,
                actual: dim,
            });
        }
        Ok(self.points.iter().map(|p| (p[i], p[j])).collect())
    }
}

/// Unchecked wire form of a [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRecord {
    points: Vec<Vec<f64>>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<PathRecord> for Path {
    type Error = Error;

    fn try_from(record: PathRecord) -> Result<Self> {
        let Some(first) = record.points.first() else {
            return Err(Error::invalid("path", "at least one point is required"));
        };
        if record.points.len() != record.values.len() {
            return Err(Error::invalid(
                "path",
                format!(
                    "{} points but {} values",
                    record.points.len(),
                    record.values.len()
                ),
            ));
        }
        let dim = first.len();
        if let Some(p) = record.points.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                actual: p.len(),
            });
        }
        Ok(Self {
            points: record.points,
            values: record.values,
        })
    }
}
