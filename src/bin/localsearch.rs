//! Runs hill climbing, random local search and simulated annealing on a
//! test function and reports where each one ended up.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use u_localsearch::compare::compare;
use u_localsearch::plot::{render_paths, PlotOptions};
use u_localsearch::sa::AnnealingConfig;
use u_localsearch::{BoundPolicy, Bounds, Convergence, SearchConfig, TestFunction};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Objective to minimize
    #[arg(long, value_enum, default_value_t = TestFunction::Sphere)]
    function: TestFunction,

    /// Number of dimensions
    #[arg(long, default_value_t = 2)]
    dim: usize,

    /// Lower bound of every dimension
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    lower: f64,

    /// Upper bound of every dimension
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    upper: f64,

    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Convergence tolerance (and default step size)
    #[arg(long, default_value_t = 1e-6)]
    epsilon: f64,

    /// Perturbation half-width; defaults to epsilon
    #[arg(long)]
    step_size: Option<f64>,

    /// Initial annealing temperature
    #[arg(long, default_value_t = 1000.0)]
    temperature: f64,

    /// Geometric cooling factor in (0, 1)
    #[arg(long, default_value_t = 0.95)]
    cooling_rate: f64,

    #[arg(long, value_enum, default_value_t = Convergence::Proposal)]
    convergence: Convergence,

    #[arg(long, value_enum, default_value_t = BoundPolicy::Ignore)]
    bound_policy: BoundPolicy,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write a contour plot with the three paths to this SVG file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Write the full results (paths included) as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Log subscriber writing to `writer`; `RUST_LOG` overrides the `info` default.
fn log_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .finish()
}

/// Logs go to stderr so stdout carries only the result lines.
fn enable_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(log_subscriber(std::io::stderr))
        .context("failed to install log subscriber")
}

fn main() -> anyhow::Result<()> {
    enable_tracing()?;
    let args = Args::parse();

    let function = args.function;
    let bounds = Bounds::uniform(args.dim, args.lower, args.upper)?;

    let mut config = SearchConfig::default()
        .with_iterations(args.iterations)
        .with_epsilon(args.epsilon)
        .with_convergence(args.convergence)
        .with_bound_policy(args.bound_policy);
    config.step_size = args.step_size;
    config.seed = args.seed;

    let annealing = AnnealingConfig::default()
        .with_initial_temperature(args.temperature)
        .with_cooling_rate(args.cooling_rate);

    info!(
        "Minimizing {} over {} dimensions in [{}, {}]",
        function, args.dim, args.lower, args.upper
    );

    let runs = compare(&function, &bounds, &config, &annealing)?;

    for run in &runs {
        let r = &run.result;
        info!(
            "{}: {} iterations, {} accepted moves, stopped on {}",
            run.label(),
            r.iterations,
            r.accepted_moves,
            r.stop_reason
        );
        println!("{}: {:?} -> {}", run.label(), r.solution, r.value);
    }

    if let Some(path) = &args.plot {
        let labelled: Vec<(&str, &u_localsearch::Path)> =
            runs.iter().map(|run| (run.label(), &run.result.path)).collect();
        let options = PlotOptions::default().with_title(format!(
            "Comparison of optimization paths ({function})"
        ));
        render_paths(&function, &bounds, &labelled, &options, path)
            .with_context(|| format!("failed to render {}", path.display()))?;
        info!("Plot written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&runs)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Results written to {}", path.display());
    }

    Ok(())
}
