//! Thin command-line caller for the expansion engine.
//!
//! Each subcommand maps to exactly one engine call and prints the result
//! body as JSON. Invalid input becomes an error reply on stderr and a
//! non-zero exit status, the CLI analog of an HTTP error response.

mod commands;

use clap::{Parser, Subcommand};
use reptend_api_models::ErrorReplyJson;

#[derive(Parser, Debug)]
#[command(
    name = "reptend_cli",
    version,
    about = "Decimal expansion explorer: cycles, rotations, groupings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group every numerator of a denominator by shared cycle
    Expand(commands::expand::ExpandArgs),
    /// Expansion of a single fraction
    Single(commands::single::SingleArgs),
    /// One fraction split into non-repeating prefix, cycle, and complement
    Sections(commands::sections::SectionsArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Expand(args) => commands::expand::run(args),
        Commands::Single(args) => commands::single::run(args),
        Commands::Sections(args) => commands::sections::run(args),
    };

    if let Err(error) = outcome {
        eprintln!("{}", ErrorReplyJson::from(&error).to_json());
        std::process::exit(2);
    }
}
