use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{Config, RunArgs, RunConfig};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Charts and summary documents for DFA minimization benchmarks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of ./qanalyze.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart time, frequency, compression and time ratios over both sweeps,
    /// then compose every chart into one combined document.
    Report(RunArgs),
    /// Chart DFA size and compression against NFA transition density.
    Density(RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(prepare_environment(None, cli.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = configuration::load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    match &cli.command {
        Commands::Report(args) => {
            let run = resolve_run(&config, args)?;
            let summary = reporter::run_report(&config, &run, std::io::stderr().is_terminal())
                .context("Report generation failed")?;
            if let Some(combined) = &summary.combined {
                println!("Wrote {} charts and {}", summary.documents.len(), combined);
            }
        }
        Commands::Density(args) => {
            let run = resolve_run(&config, args)?;
            let summary = reporter::run_density_report(&config, &run).context("Density report generation failed")?;
            println!("Wrote {} charts to {}", summary.documents.len(), run.output_directory.display());
        }
    }

    Ok(())
}

/// Loads `.env` (or `env_file`) into the process environment, then builds the
/// log filter so that a `RUST_LOG` set there is honored.
fn prepare_environment(env_file: Option<&Path>, verbose: bool) -> EnvFilter {
    let loaded = match env_file {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    // A missing .env file is not an error.
    loaded.ok();
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Applies the command-line overrides and requires both run locations.
fn resolve_run(config: &Config, args: &RunArgs) -> Result<RunConfig> {
    let settings = args.apply(config.run.clone());
    let run = settings.resolve().context("Incomplete run settings")?;
    tracing::info!(
        input = %run.input_path.display(),
        output = %run.output_directory.display(),
        "Starting run."
    );
    Ok(run)
}
