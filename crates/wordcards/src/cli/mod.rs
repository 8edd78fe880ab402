//! Command-line interface for wordcards.
//!
//! This module provides the CLI structure for the `wordcards` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, InitCommand, ServeCommand, WordsCommand};

/// wordcards - Vocabulary flashcards in your browser
///
/// Serves a flashcard page backed by a single JSON word list, and edits that
/// list from the command line.
#[derive(Debug, Parser)]
#[command(name = "wordcards")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web server
    Serve(ServeCommand),

    /// Read or change the word list
    #[command(subcommand)]
    Words(WordsCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Create a project directory with a config file and an empty store
    Init(InitCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "wordcards");
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(parse(&["wordcards", "-q", "serve"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["wordcards", "serve"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["wordcards", "-v", "serve"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["wordcards", "-vv", "serve"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_serve_with_bind() {
        let cli = parse(&["wordcards", "serve", "--bind", "0.0.0.0:8080"]);
        match cli.command {
            Command::Serve(cmd) => assert_eq!(cmd.bind.as_deref(), Some("0.0.0.0:8080")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_words_add() {
        let cli = parse(&[
            "wordcards", "words", "add", "--word", "cat", "--sentence", "A cat sat.",
        ]);
        assert!(matches!(
            cli.command,
            Command::Words(WordsCommand::Add { word: Some(ref w), .. }) if w == "cat"
        ));
    }

    #[test]
    fn test_parse_words_add_json() {
        let cli = parse(&["wordcards", "words", "add", "--json", r#"{"word":"cat"}"#]);
        assert!(matches!(
            cli.command,
            Command::Words(WordsCommand::Add { word: None, json: Some(_), .. })
        ));
    }

    #[test]
    fn test_words_add_requires_word_or_json() {
        assert!(Cli::try_parse_from(["wordcards", "words", "add"]).is_err());
        assert!(Cli::try_parse_from([
            "wordcards", "words", "add", "--word", "cat", "--json", "{}"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_words_remove_rejects_negative_index() {
        assert!(Cli::try_parse_from(["wordcards", "words", "remove", "-1"]).is_err());
        let cli = parse(&["wordcards", "words", "remove", "2"]);
        assert!(matches!(
            cli.command,
            Command::Words(WordsCommand::Remove { index: 2 })
        ));
    }

    #[test]
    fn test_parse_init_defaults_to_current_dir() {
        let cli = parse(&["wordcards", "init"]);
        match cli.command {
            Command::Init(cmd) => {
                assert_eq!(cmd.dir, PathBuf::from("."));
                assert!(!cmd.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["wordcards", "-c", "/custom/config.toml", "config", "show"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: false })
        ));
    }
}
