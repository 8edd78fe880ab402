//! The word record stored in the word list.
//!
//! A record is whatever JSON the client sent. The service never validates
//! its shape; the accessors here only read the fields the flashcard UI uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the word itself.
pub const WORD_FIELD: &str = "word";

/// Field holding the example sentence.
pub const SENTENCE_FIELD: &str = "sentence";

/// One flashcard entry.
///
/// Serializes exactly as the wrapped JSON value, so a record read from the
/// store and written back is unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordRecord(Value);

impl WordRecord {
    /// Create a record with the usual `word` and `sentence` fields.
    #[must_use]
    pub fn new(word: impl Into<String>, sentence: impl Into<String>) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert(WORD_FIELD.to_string(), Value::String(word.into()));
        fields.insert(SENTENCE_FIELD.to_string(), Value::String(sentence.into()));
        Self(Value::Object(fields))
    }

    /// The raw JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the raw JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `word` field, if present and a string.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.0.get(WORD_FIELD).and_then(Value::as_str)
    }

    /// The `sentence` field, if present and a string.
    #[must_use]
    pub fn sentence(&self) -> Option<&str> {
        self.0.get(SENTENCE_FIELD).and_then(Value::as_str)
    }

    /// Case-insensitive substring match against the word and sentence.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [self.word(), self.sentence()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
            || needle.is_empty()
    }
}

impl From<Value> for WordRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<WordRecord> for Value {
    fn from(record: WordRecord) -> Self {
        record.0
    }
}
