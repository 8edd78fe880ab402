//! `wordcards` - CLI for the vocabulary flashcard server
//!
//! Runs the web server and offers the word list operations offline.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info, warn};

use wordcards::cli::{Cli, Command, ConfigCommand, InitCommand, ServeCommand, WordsCommand};
use wordcards::web::{self, AppState};
use wordcards::{init_logging, scaffold, Config, WordRecord, WordService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let Cli {
        config: config_path,
        command,
        ..
    } = cli;

    match command {
        Command::Serve(cmd) => handle_serve(Config::load_from(config_path)?, cmd).await,
        Command::Words(cmd) => handle_words(&Config::load_from(config_path)?, cmd).await,
        Command::Config(cmd) => handle_config(config_path, cmd),
        Command::Init(cmd) => handle_init(&cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(bind) = cmd.bind {
        config.server.bind = bind;
        config.validate()?;
    }

    if config.uses_default_secret() {
        warn!("Using the built-in development secret key; set SECRET_KEY for real deployments");
    }

    let service = WordService::open(config.words_path())?;
    info!("Serving words from {}", config.words_path().display());

    let state = AppState::new(service, config.storage.words_file.clone());
    let listener = web::bind(config.bind_addr()?).await?;
    web::serve(listener, state, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn handle_words(config: &Config, cmd: WordsCommand) -> anyhow::Result<()> {
    let service = WordService::open(config.words_path())?;

    match cmd {
        WordsCommand::List { json } => {
            let words = service.list().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else if words.is_empty() {
                println!("No words yet. Add one with `wordcards words add`.");
            } else {
                for (index, record) in words.iter().enumerate() {
                    println!("{}", describe(index, record));
                }
            }
        }
        WordsCommand::Add {
            word,
            sentence,
            json,
        } => {
            let record = match (json, word) {
                (Some(raw), _) => parse_record(&raw)?,
                (None, Some(word)) => WordRecord::new(word, sentence),
                (None, None) => bail!("either --word or --json is required"),
            };
            service.append(record).await?;
            println!("Word added successfully");
        }
        WordsCommand::Remove { index } => {
            if !service.remove_at(index).await? {
                bail!("invalid index {index}");
            }
            println!("Word deleted successfully");
        }
        WordsCommand::Edit { index, json } => {
            let record = parse_record(&json)?;
            if !service.replace_at(index, record).await? {
                bail!("invalid index {index}");
            }
            println!("Word updated successfully");
        }
        WordsCommand::Search { term } => {
            let hits = service.search(&term).await?;
            if hits.is_empty() {
                println!("No matching words");
            }
            for (index, record) in &hits {
                println!("{}", describe(*index, record));
            }
        }
        WordsCommand::Export { output } => {
            let document = service.export_raw().await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &document)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Exported {} bytes to {}", document.len(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&document)?;
                    stdout.flush()?;
                }
            }
        }
        WordsCommand::Stats => {
            let stats = service.stats().await?;
            println!("Store:  {}", config.words_path().display());
            println!("Words:  {}", stats.words);
            println!("Size:   {} bytes", stats.size_bytes);
        }
        WordsCommand::Reset { yes } => {
            if yes {
                service.reset().await?;
                println!("Word store reset to an empty list.");
            } else {
                println!("This will delete every word in {}.", config.words_path().display());
                println!("Use --yes to confirm.");
            }
        }
    }
    Ok(())
}

fn parse_record(raw: &str) -> anyhow::Result<WordRecord> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("record is not valid JSON")?;
    Ok(WordRecord::from(value))
}

fn describe(index: usize, record: &WordRecord) -> String {
    match record.word() {
        Some(word) => format!("{index:>4}  {word}  {}", record.sentence().unwrap_or("")),
        None => format!("{index:>4}  {}", record.as_value()),
    }
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?.redacted();
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Bind:               {}", config.server.bind);
                println!("  Secret key:         {}", config.server.secret_key);
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!("  Word store:         {}", config.words_path().display());
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn handle_init(cmd: &InitCommand) -> anyhow::Result<()> {
    let report = scaffold::init_project(&cmd.dir, cmd.force)?;
    for path in &report.created {
        println!("created  {}", path.display());
    }
    for path in &report.kept {
        println!("kept     {}", path.display());
    }
    println!();
    println!(
        "Start the server with: wordcards -c {} serve",
        cmd.dir.join(wordcards::config::CONFIG_FILE_NAME).display()
    );
    Ok(())
}
