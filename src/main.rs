//! Gas Cost Report CLI
//!
//! Turns contract gas cost CSV files into ranked summaries, baseline
//! comparisons and PNG charts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use gas_cost_report::commands::{
    display_version, execute_all, execute_deployment, execute_execution, execute_gas,
    execute_variability, DeploymentArgs, ExecutionArgs, GasArgs, VariabilityArgs,
};
use gas_cost_report::utils::config::{load_config, ReportConfig};
use gas_cost_report::utils::error::LoadError;

/// Gas Cost Report - cost analysis for contract gas datasets
#[derive(Parser, Debug)]
#[command(name = "gas-cost-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "GAS_COST_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory chart files are written to
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Average cost per function across networks
    Gas {
        /// Per-function cost CSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Skip the text summary on stdout
        #[arg(long)]
        no_summary: bool,
    },

    /// Cost variability of each function across networks
    Variability {
        /// Per-function cost CSV
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Skip the text summary on stdout
        #[arg(long)]
        no_summary: bool,
    },

    /// Deployment cost against a baseline network
    Deployment {
        /// Deployment estimate CSV
        #[arg(short, long, conflicts_with = "demo")]
        input: Option<PathBuf>,

        /// Network every other network is compared against
        #[arg(short, long)]
        baseline: Option<String>,

        /// Use the built-in sample dataset
        #[arg(long)]
        demo: bool,

        /// Skip the text summary on stdout
        #[arg(long)]
        no_summary: bool,
    },

    /// Execution vs deployment cost of a gas reporter export
    Execution {
        /// Gas reporter CSV export
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Skip the text summary on stdout
        #[arg(long)]
        no_summary: bool,
    },

    /// Run every report from the configuration
    All {
        /// Skip the text summaries on stdout
        #[arg(long)]
        no_summary: bool,
    },

    /// Display version information
    Version,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<LoadError>() {
                Some(LoadError::FileNotFound(path)) => {
                    eprintln!("Error: The file '{}' was not found.", path.display());
                    eprintln!("Check the path or set it under [inputs] in the config file.");
                }
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the parsed command
///
/// **Private** - separated from `main` so every error reaches one handler
fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    match cli.command {
        Commands::Gas { input, no_summary } => {
            let mut args = GasArgs::from_config(&config);
            if let Some(path) = input {
                args.input_path = path;
            }
            args.print_summary = !no_summary;
            execute_gas(args)?;
        }

        Commands::Variability { input, no_summary } => {
            let mut args = VariabilityArgs::from_config(&config);
            if let Some(path) = input {
                args.input_path = path;
            }
            args.print_summary = !no_summary;
            execute_variability(args)?;
        }

        Commands::Deployment {
            input,
            baseline,
            demo,
            no_summary,
        } => {
            let mut args = DeploymentArgs::from_config(&config);
            if let Some(path) = input {
                args.input_path = path;
            }
            if let Some(network) = baseline {
                args.baseline_network = network;
            }
            args.demo = demo;
            args.print_summary = !no_summary;
            execute_deployment(args)?;
        }

        Commands::Execution { input, no_summary } => {
            let mut args = ExecutionArgs::from_config(&config);
            if let Some(path) = input {
                args.input_path = path;
            }
            args.print_summary = !no_summary;
            execute_execution(args)?;
        }

        Commands::All { no_summary } => {
            execute_all(&config, !no_summary)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
