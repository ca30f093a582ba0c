use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli_commands;

/// Read, inspect and rewrite geometries encoded as well-known text
#[derive(Parser)]
#[command(name = "geoformat", version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a summary of every feature in the input
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Treat a top level GEOMETRYCOLLECTION as one feature per member
        #[arg(long)]
        split: bool,

        /// Projection code the input is in, e.g. EPSG:4326
        #[arg(long)]
        projection: Option<String>,
    },
    /// Read the input and write it back as canonical WKT
    Normalize {
        #[command(flatten)]
        input: InputArgs,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Round coordinates to this many decimal places
        #[arg(long)]
        decimals: Option<u32>,
    },
}

/// Where to read the WKT from; stdin when neither is given
#[derive(Args)]
struct InputArgs {
    /// WKT text
    wkt: Option<String>,

    /// Read WKT from a file
    #[arg(short, long, conflicts_with = "wkt")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Command::Show {
            input,
            split,
            projection,
        } => cli_commands::load_input(input.wkt, input.file.as_deref()).and_then(|text| {
            cli_commands::show_features(&text, split, projection.as_deref())
        }),
        Command::Normalize {
            input,
            output,
            decimals,
        } => cli_commands::load_input(input.wkt, input.file.as_deref())
            .and_then(|text| cli_commands::normalize(&text, output.as_deref(), decimals)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
