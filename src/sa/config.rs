//! Annealing schedule configuration.

use crate::error::{Error, Result};

/// Temperature schedule for Simulated Annealing.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// iteration. The run stops as soon as `T` falls below the search epsilon.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Number of coolings until the temperature falls below `floor`.
    ///
    /// For a positive result this is the iteration at which an
    /// uninterrupted run stops on the temperature floor. A run always
    /// executes at least one iteration, even when this returns 0.
    /// Returns `usize::MAX` for an invalid schedule.
    pub fn steps_to_floor(&self, floor: f64) -> usize {
        if self.validate().is_err() || !(floor > 0.0) {
            return usize::MAX;
        }
        let mut t = self.initial_temperature;
        let mut steps = 0;
        while t >= floor {
            t *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let t = self.initial_temperature;
        if !(t.is_finite() && t > 0.0) {
            return Err(Error::invalid(
                "initial_temperature",
                format!("must be positive and finite, got {t}"),
            ));
        }
        let rate = self.cooling_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(Error::invalid(
                "cooling_rate",
                format!("must be in (0, 1), got {rate}"),
            ));
        }
        Ok(())
    }
}
