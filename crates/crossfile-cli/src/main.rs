//! Crossfile CLI - command-line inspection for the value canonicalization pipeline.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod output;

use commands::{clean, fingerprint, normalize, types};

#[derive(Parser)]
#[command(name = "crossfile")]
#[command(about = "Crossfile value cleaning, normalization, and fingerprinting CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered property types
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clean raw values into their display form
    Clean {
        /// Property type name (e.g. "name", "date", "phone")
        #[arg(long = "type")]
        type_name: String,
        /// Date format hint (date type only)
        #[arg(long)]
        format: Option<String>,
        /// Country hint (phone type only)
        #[arg(long)]
        country: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Values to clean (stdin lines when omitted)
        values: Vec<String>,
    },
    /// Normalize values into comparison forms
    Normalize {
        /// Property type name (e.g. "name", "date", "phone")
        #[arg(long = "type")]
        type_name: String,
        /// Date format hint (date type only)
        #[arg(long)]
        format: Option<String>,
        /// Country hint (phone type only)
        #[arg(long)]
        country: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Values to normalize (stdin lines when omitted)
        values: Vec<String>,
    },
    /// Compute blocking fingerprints for values
    Fingerprint {
        /// Property type name (e.g. "name", "address")
        #[arg(long = "type")]
        type_name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Values to fingerprint (stdin lines when omitted)
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Types { json } => types::run(json),
        Commands::Clean {
            type_name,
            format,
            country,
            json,
            values,
        } => clean::run(type_name, format, country, json, values),
        Commands::Normalize {
            type_name,
            format,
            country,
            json,
            values,
        } => normalize::run(type_name, format, country, json, values),
        Commands::Fingerprint {
            type_name,
            json,
            values,
        } => fingerprint::run(type_name, json, values),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
