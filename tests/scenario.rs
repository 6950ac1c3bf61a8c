//! Sphere in two dimensions on `[-5, 5]^2`, the default comparison setup.

use u_localsearch::compare::{compare, Algorithm};
use u_localsearch::hc::HillClimbing;
use u_localsearch::rng::create_rng;
use u_localsearch::sa::{AnnealingConfig, SimulatedAnnealing};
use u_localsearch::{
    hill_climbing, random_local_search, simulated_annealing, sphere, BoundPolicy, Bounds,
    Convergence, SearchConfig, StopReason,
};

fn square_box() -> Bounds {
    Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
}

#[test]
fn classic_defaults_end_on_first_acceptance() {
    let bounds = square_box();
    let mut rng = create_rng(2024);

    let (_, hc_value, hc_path) = hill_climbing(&sphere, &bounds, 1000, 1e-6, &mut rng).unwrap();
    let (_, rls_value, rls_path) =
        random_local_search(&sphere, &bounds, 1000, 1e-6, &mut rng).unwrap();
    let (_, sa_value, sa_path) =
        simulated_annealing(&sphere, &bounds, 1000, 1000.0, 0.95, 1e-6, &mut rng).unwrap();

    for (value, path) in [(hc_value, &hc_path), (rls_value, &rls_path), (sa_value, &sa_path)] {
        assert!(path.len() <= 2, "path of length {}", path.len());
        assert_eq!(path.last().1, value);
        assert!(path.points().iter().all(|p| p.len() == 2));
    }
}

#[test]
fn improvement_convergence_reaches_the_basin() {
    let bounds = square_box();
    let config = SearchConfig::default()
        .with_step_size(0.5)
        .with_convergence(Convergence::Improvement)
        .with_bound_policy(BoundPolicy::Clamp)
        .with_seed(42);

    let runs = compare(&sphere, &bounds, &config, &AnnealingConfig::default()).unwrap();
    assert_eq!(runs.len(), 3);

    for run in &runs {
        let r = &run.result;
        assert!(r.value < 1.0, "{}: final value {}", run.label(), r.value);
        assert_eq!(r.path.last().1, r.value);
        assert_eq!(r.path.last().0, r.solution.as_slice());
        assert!(bounds.contains(&r.solution), "{} left the box", run.label());
        match run.algorithm {
            Algorithm::HillClimbing | Algorithm::RandomLocalSearch => {
                assert!(r.path.is_strictly_decreasing(), "{}", run.label());
            }
            Algorithm::SimulatedAnnealing => {
                assert!(r.path.uphill_moves() > 0);
                for w in r.temperature_history.windows(2) {
                    assert!(w[1] < w[0]);
                }
            }
        }
    }
}

#[test]
fn annealing_below_floor_runs_one_iteration() {
    let config = SearchConfig::default().with_seed(1);
    let annealing = AnnealingConfig::default().with_initial_temperature(1e-7);

    let result = SimulatedAnnealing::run(&sphere, &square_box(), &config, &annealing).unwrap();

    assert_eq!(result.iterations, 1);
    assert_eq!(result.stop_reason, StopReason::TemperatureFloor);
    assert!(result.path.len() <= 2);
}

#[test]
fn zero_iterations_return_initial_sample() {
    let config = SearchConfig::default().with_iterations(0).with_seed(5);
    let runs = compare(&sphere, &square_box(), &config, &AnnealingConfig::default()).unwrap();

    for run in runs {
        assert_eq!(run.result.path.len(), 1, "{}", run.label());
        assert!(square_box().contains(&run.result.solution));
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(Bounds::new(vec![]).is_err());

    let config = SearchConfig::default().with_epsilon(-1.0);
    assert!(HillClimbing::run(&sphere, &square_box(), &config).is_err());

    let annealing = AnnealingConfig::default().with_initial_temperature(0.0);
    assert!(
        SimulatedAnnealing::run(&sphere, &square_box(), &SearchConfig::default(), &annealing)
            .is_err()
    );
}
