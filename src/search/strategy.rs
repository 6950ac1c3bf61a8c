//! Built-in proposal and acceptance strategies.

use super::types::{Acceptance, Proposal};
use crate::space::Bounds;
use rand::Rng;

/// Perturbs one uniformly chosen coordinate by a uniform offset in `[-step, step]`.
#[derive(Debug, Clone, Copy)]
pub struct SingleCoordinatePerturb {
    pub step: f64,
}

impl Proposal for SingleCoordinatePerturb {
    fn propose<R: Rng>(&mut self, current: &[f64], _bounds: &Bounds, rng: &mut R) -> Vec<f64> {
        let mut next = current.to_vec();
        let index = rng.random_range(0..next.len());
        next[index] += rng.random_range(-self.step..=self.step);
        next
    }
}

/// Draws a fresh point uniformly over the whole box, ignoring the current one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformResample;

impl Proposal for UniformResample {
    fn propose<R: Rng>(&mut self, _current: &[f64], bounds: &Bounds, rng: &mut R) -> Vec<f64> {
        bounds.sample(rng)
    }
}

/// Accepts strictly improving candidates only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictImprovement;

impl Acceptance for StrictImprovement {
    fn accept<R: Rng>(&mut self, current_value: f64, next_value: f64, _rng: &mut R) -> bool {
        next_value < current_value
    }
}

/// Metropolis criterion with geometric cooling.
///
/// Improvements are always accepted. A worse candidate is accepted when
/// `exp((current - next) / T)` exceeds a uniform draw in `[0, 1)`; the
/// draw happens only on that branch. `T` is multiplied by `cooling_rate`
/// at the end of every iteration.
#[derive(Debug, Clone, Copy)]
pub struct Metropolis {
    pub temperature: f64,
    pub cooling_rate: f64,
}

impl Metropolis {
    pub fn new(temperature: f64, cooling_rate: f64) -> Self {
        Self {
            temperature,
            cooling_rate,
        }
    }
}

impl Acceptance for Metropolis {
    fn accept<R: Rng>(&mut self, current_value: f64, next_value: f64, rng: &mut R) -> bool {
        if next_value < current_value {
            return true;
        }
        let probability = ((current_value - next_value) / self.temperature).exp();
        probability > rng.random::<f64>()
    }

    fn end_iteration(&mut self) {
        self.temperature *= self.cooling_rate;
    }

    fn exhausted(&self, epsilon: f64) -> bool {
        self.temperature < epsilon
    }

    fn temperature(&self) -> Option<f64> {
        Some(self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_perturb_changes_one_coordinate() {
        let bounds = Bounds::uniform(4, -1.0, 1.0).unwrap();
        let mut proposal = SingleCoordinatePerturb { step: 0.1 };
        let mut rng = create_rng(42);
        let current = vec![0.0; 4];

        for _ in 0..200 {
            let next = proposal.propose(&current, &bounds, &mut rng);
            let changed = next.iter().zip(&current).filter(|(a, b)| a != b).count();
            assert!(changed <= 1);
            assert!(next.iter().all(|x| x.abs() <= 0.1));
        }
    }

    #[test]
    fn test_resample_stays_in_bounds() {
        let bounds = Bounds::new(vec![(10.0, 11.0), (-3.0, -2.0)]).unwrap();
        let mut rng = create_rng(1);
        let far_away = [1e6, 1e6];
        for _ in 0..200 {
            let next = UniformResample.propose(&far_away, &bounds, &mut rng);
            assert!(bounds.contains(&next));
        }
    }

    #[test]
    fn test_strict_improvement() {
        let mut rng = create_rng(0);
        let mut rule = StrictImprovement;
        assert!(rule.accept(1.0, 0.5, &mut rng));
        assert!(!rule.accept(1.0, 1.0, &mut rng));
        assert!(!rule.accept(1.0, 2.0, &mut rng));
        assert!(rule.temperature().is_none());
        assert!(!rule.exhausted(1e-6));
    }

    #[test]
    fn test_metropolis_always_accepts_improvement() {
        let mut rng = create_rng(0);
        let mut rule = Metropolis::new(1e-300, 0.5);
        assert!(rule.accept(1.0, 0.0, &mut rng));
    }

    #[test]
    fn test_metropolis_draws_only_for_worse_candidates() {
        let mut rng = create_rng(7);
        let mut untouched = rng.clone();
        let mut rule = Metropolis::new(10.0, 0.5);

        assert!(rule.accept(1.0, 0.0, &mut rng));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());

        let mut before = rng.clone();
        rule.accept(0.0, 1.0, &mut rng);
        assert_ne!(rng.random::<u64>(), before.random::<u64>());
    }

    #[test]
    fn test_metropolis_cold_rejects_worse() {
        let mut rng = create_rng(0);
        let mut rule = Metropolis::new(1e-9, 0.5);
        for _ in 0..100 {
            assert!(!rule.accept(0.0, 1.0, &mut rng));
        }
    }

    #[test]
    fn test_metropolis_hot_accepts_most_worse() {
        let mut rng = create_rng(42);
        let mut rule = Metropolis::new(1e6, 0.5);
        let accepted = (0..1000).filter(|_| rule.accept(0.0, 1.0, &mut rng)).count();
        assert!(accepted > 990, "expected near-certain acceptance, got {accepted}");
    }

    #[test]
    fn test_metropolis_cooling() {
        let mut rule = Metropolis::new(8.0, 0.5);
        rule.end_iteration();
        assert_eq!(rule.temperature(), Some(4.0));
        rule.end_iteration();
        rule.end_iteration();
        assert_eq!(rule.temperature(), Some(1.0));
        assert!(rule.exhausted(2.0));
        assert!(!rule.exhausted(0.5));
    }
}
