//! Tech tree scheduler CLI
//!
//! Runs the deterministic scheduler or the chain sampler and writes the
//! results under a per-run output directory.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use techtree_runner::{
    init_logging, load_chain, load_graph, prepare_run_dir, run_sample, run_schedule,
    RunnerConfig, RunnerError, DEFAULT_YEARS, SAMPLER_RUNS, SCHEDULER_RUNS,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "techtree")]
#[command(about = "Impact scheduling for technology dependency graphs")]
#[command(version)]
struct Cli {
    /// Output root; runs land in <out>/<family>/<name>
    #[arg(long, global = true, default_value = "data")]
    out: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a tech tree year by year and attribute impact to its nodes
    Schedule {
        /// Graph JSON file (built-in demo graph if omitted)
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Years to simulate
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        years: Option<u32>,

        /// Run name
        #[arg(short, long, default_value = "latest")]
        name: String,

        /// Replace an existing run of the same name
        #[arg(long)]
        force: bool,
    },

    /// Sample a milestone chain and estimate expected yearly energy
    Sample {
        /// Chain JSON file, an array of nodes (built-in demo chain if omitted)
        #[arg(long)]
        chain: Option<PathBuf>,

        /// Monte Carlo draws
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        draws: Option<u64>,

        /// Years to report
        #[arg(short, long)]
        years: Option<u32>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Run name
        #[arg(short, long, default_value = "latest")]
        name: String,

        /// Replace an existing run of the same name
        #[arg(long)]
        force: bool,
    },
}

fn start_run(
    cli_out: &Path,
    family: &str,
    name: &str,
    force: bool,
    log_level: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let run_dir = prepare_run_dir(cli_out, family, name, force)?;
    init_logging(log_level, Some(run_dir.path.join("log.out").as_path()))?;
    if run_dir.replaced {
        info!(dir = %run_dir.path.display(), "Replaced previous run");
    }
    info!(dir = %run_dir.path.display(), "Starting run");
    Ok(run_dir.path)
}

fn load_config(path: Option<&Path>) -> Result<RunnerConfig, RunnerError> {
    RunnerConfig::load_or_default(path).inspect_err(|e| error!(%e, "Failed to load config"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            graph,
            years,
            name,
            force,
        } => {
            let run_dir = start_run(&cli.out, SCHEDULER_RUNS, &name, force, &cli.log_level)?;
            let config = load_config(cli.config.as_deref())?;
            let tree = load_graph(graph.as_deref())?;
            let years = years.unwrap_or(DEFAULT_YEARS);

            let outcome = run_schedule(tree, years, config.scheduler, &run_dir)?;

            println!("Impact: {}", outcome.impact_path.display());
            println!("Status: {}", outcome.status_path.display());
            println!("{}", outcome.summary);
            if !outcome.report.diagnostics.is_empty() {
                println!("{} input diagnostics, see log.out", outcome.report.diagnostics.len());
            }
        }

        Commands::Sample {
            chain,
            draws,
            years,
            seed,
            name,
            force,
        } => {
            let run_dir = start_run(&cli.out, SAMPLER_RUNS, &name, force, &cli.log_level)?;
            let config = load_config(cli.config.as_deref())?;
            let chain = load_chain(chain.as_deref())?;

            let mut sampler = config.sampler;
            if let Some(draws) = draws {
                sampler = sampler.with_draws(usize::try_from(draws)?);
            }
            if let Some(years) = years {
                sampler = sampler.with_years(years);
            }
            if let Some(seed) = seed {
                sampler = sampler.with_seed(seed);
            }

            let outcome = run_sample(&chain, &sampler, &run_dir)?;

            println!("Results: {}", outcome.results_path.display());
            println!("{}", outcome.summary);
        }
    }

    Ok(())
}
