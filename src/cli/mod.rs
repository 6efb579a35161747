pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "selah", about = "Bible reading API server and query tool", version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind address, e.g. 0.0.0.0:5000 (overrides the config file)
        #[arg(long)]
        bind: Option<String>,

        /// SQLite database path (overrides the config file)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Resolve one chapter and print it
    Chapter {
        /// Book name, in Spanish or English
        book: String,

        /// Chapter number
        chapter: u32,

        #[arg(long, default_value = "en-kjv")]
        version: String,
    },

    /// Search verses for a phrase
    Search {
        query: String,

        #[arg(long, default_value = "es-rvr1960")]
        version: String,

        /// Restrict the search to one book
        #[arg(long)]
        book: Option<String>,
    },

    /// Print the verse of the day
    Votd,
}
