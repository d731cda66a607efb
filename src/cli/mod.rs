pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "audiodeck")]
#[command(about = "Client for the audiodeck streaming catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the home feed and print its sections
    Home {
        /// How many pages to fetch (follows pagination)
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Run a one-shot search against the catalog
    Search {
        /// Free-text query
        query: String,
    },
}
