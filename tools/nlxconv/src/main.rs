mod commands;
mod format;
mod writer;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{ascii::AsciiArgs, convert::ConvertArgs, info::InfoArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nlxconv", about = "Convert Neuralynx files to various formats")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .Nev/.p/.Ncs file to jsonl/csv/parquet
    Convert(ConvertArgs),
    /// Write the ASCII export of a position file next to it
    Ascii(AsciiArgs),
    /// Print decode diagnostics and the first rows of a file
    Info(InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Ascii(args) => args.run(),
        Commands::Info(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
