//! `wordcards` - Vocabulary flashcards backed by a single JSON word store
//!
//! This library provides the word store, the word list operations, and the
//! HTTP server that serves the flashcard page and its JSON API.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scaffold;
pub mod service;
pub mod storage;
pub mod web;
pub mod word;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use service::WordService;
pub use storage::{JsonFileStore, MemoryStore, StoreStats, WordRepository};
pub use word::WordRecord;
