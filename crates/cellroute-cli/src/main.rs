use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cellroute_cli::commands::{
    handle_compare, handle_inspect, handle_search, AlgorithmArg, CompareArgs, InspectArgs,
    SearchArgs,
};
use cellroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over grid-cell graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest path cost between the input's start and destination.
    Search {
        /// Graph input file.
        input: PathBuf,
        /// Search strategy.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
        algorithm: AlgorithmArg,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Run every search strategy on the same input and compare the results.
    Compare {
        /// Graph input file.
        input: PathBuf,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Summarise the graph described by an input file.
    Inspect {
        /// Graph input file.
        input: PathBuf,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Search {
            input,
            algorithm,
            format,
        } => handle_search(
            &SearchArgs {
                input,
                algorithm,
                format,
            },
            &mut stdout,
        ),
        Command::Compare { input, format } => {
            handle_compare(&CompareArgs { input, format }, &mut stdout)
        }
        Command::Inspect { input, format } => {
            handle_inspect(&InspectArgs { input, format }, &mut stdout)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
