//! CLI for simulating one-sample t-test experiments.
//!
//! # Usage
//!
//! ```bash
//! # Default design: n=10, mu=0.3, sigma=1, alpha=0.05, 95% intervals
//! cargo run --bin filedrawer
//!
//! # False positive rate of a two-sided test under the null
//! cargo run --bin filedrawer -- --n 16 --mu 0 --tail two-sided --trials 20000 --parallel
//!
//! # Machine-readable report plus per-trial rows for plotting
//! cargo run --bin filedrawer -- --json --rows intervals.csv
//!
//! # Start from a config file, override the seed
//! cargo run --bin filedrawer -- --config design.json --seed 7
//! ```

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use filedrawer::output::{format_report, format_row_table, is_verbose, to_json_pretty};
use filedrawer::{simulate, SimulationConfig, Tail};

/// Rows printed to the terminal when `--rows` is given.
const PREVIEW_ROWS: usize = 10;

/// Monte Carlo simulation of the file-drawer effect
#[derive(Parser, Debug)]
#[command(name = "filedrawer")]
#[command(about = "Simulate t-test experiments and measure selective-reporting bias")]
#[command(version)]
struct Args {
    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Observations per experiment (at least 2)
    #[arg(long)]
    n: Option<usize>,

    /// True mean of the sampled distribution
    #[arg(long, allow_hyphen_values = true)]
    mu: Option<f64>,

    /// Standard deviation of the sampled distribution
    #[arg(long)]
    sigma: Option<f64>,

    /// Significance level of the detection rule
    #[arg(long)]
    alpha: Option<f64>,

    /// Confidence level of the reported intervals
    #[arg(long)]
    ci: Option<f64>,

    /// Detection rule
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(Tail::NAMES).try_map(|s| s.parse::<Tail>())
    )]
    tail: Option<Tail>,

    /// Number of simulated experiments [env: FILEDRAWER_TRIALS]
    #[arg(short, long)]
    trials: Option<usize>,

    /// Random seed [env: FILEDRAWER_SEED]
    #[arg(short, long)]
    seed: Option<u64>,

    /// Spread trials across worker threads
    #[arg(long)]
    parallel: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write per-trial intervals to this CSV file
    #[arg(long)]
    rows: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose || is_verbose());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &Args) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::new(),
    }
    .with_env_overrides()?;

    if let Some(n) = args.n {
        config = config.with_sample_size(n);
    }
    if let Some(mu) = args.mu {
        config = config.with_mu(mu);
    }
    if let Some(sigma) = args.sigma {
        config = config.with_sigma(sigma);
    }
    if let Some(alpha) = args.alpha {
        config = config.with_alpha(alpha);
    }
    if let Some(ci) = args.ci {
        config = config.with_ci(ci);
    }
    if let Some(tail) = args.tail {
        config = config.with_tail(tail);
    }
    if let Some(trials) = args.trials {
        config = config.with_trials(trials);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    if args.rows.is_some() {
        config = config.with_rows(true);
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    let simulation = simulate(&config)?;

    if args.json {
        println!("{}", to_json_pretty(&simulation.report)?);
    } else {
        print!("{}", format_report(&simulation.report));
    }

    if let (Some(path), Some(rows)) = (&args.rows, &simulation.rows) {
        filedrawer::output::write_rows_csv_file(path, rows)?;
        info!(path = %path.display(), rows = rows.len(), "wrote interval rows");
        if !args.json {
            println!();
            print!(
                "{}",
                format_row_table(rows, simulation.report.params.mu(), PREVIEW_ROWS)
            );
        }
    }

    Ok(())
}
