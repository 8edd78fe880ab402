//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Server command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to listen on (overrides `server.bind`)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// Word list commands, run directly against the store.
#[derive(Debug, Subcommand)]
pub enum WordsCommand {
    /// Print every word with its index
    List {
        /// Output the stored records as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Append a word to the end of the list
    Add {
        /// The word
        #[arg(short, long, required_unless_present = "json", conflicts_with = "json")]
        word: Option<String>,

        /// An example sentence
        #[arg(short, long, default_value = "", conflicts_with = "json")]
        sentence: String,

        /// A raw JSON record instead of --word/--sentence
        #[arg(long, value_name = "JSON")]
        json: Option<String>,
    },

    /// Remove the word at INDEX (later words shift down)
    Remove {
        /// Position in the list, starting at 0
        index: usize,
    },

    /// Replace the word at INDEX with a JSON record
    Edit {
        /// Position in the list, starting at 0
        index: usize,

        /// The replacement record
        #[arg(long, value_name = "JSON")]
        json: String,
    },

    /// Find words whose word or sentence contains TERM
    Search {
        /// Case-insensitive search term
        term: String,
    },

    /// Write the store document verbatim
    Export {
        /// Destination file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the number of words and store size
    Stats,

    /// Overwrite the store with an empty list
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Init command arguments.
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project directory to create
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite existing files, including the word store
    #[arg(short, long)]
    pub force: bool,
}
