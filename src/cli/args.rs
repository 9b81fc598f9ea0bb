use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output format (text or json), overriding config.toml
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Enable debug output
    #[arg(short, long, default_value = "false", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the registration payloads of the built-in commands
    Schema {
        /// Only print the command with this name
        #[arg(short, long)]
        command: Option<String>,
    },
    /// Dispatch an interaction read from a JSON file
    Invoke {
        /// Path to the interaction payload
        #[arg()]
        path: PathBuf,
    },
}
