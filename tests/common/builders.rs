//! Test builders — ergonomic constructors for raw input records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::Value;
use vocab_core::RawRecord;

// ---------------------------------------------------------------------------
// RawRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for input records.
///
/// # Example
///
/// ```rust
/// let record = RawRecordBuilder::new(7, "Tisch")
///     .article("der")
///     .topic(" Wohnen ")
///     .build();
/// ```
pub struct RawRecordBuilder {
    fields: RawRecord,
}

impl RawRecordBuilder {
    /// A record with `id`, `word` and a slug derived from the word.
    pub fn new(id: impl Into<Value>, word: &str) -> Self {
        let mut fields = RawRecord::new();
        fields.insert("id".into(), id.into());
        fields.insert("word".into(), word.into());
        fields.insert("slug".into(), word.to_lowercase().into());
        Self { fields }
    }

    pub fn article(self, article: &str) -> Self {
        self.field("article", article)
    }

    pub fn plural(self, plural: &str) -> Self {
        self.field("plural", plural)
    }

    pub fn topic(self, topic: &str) -> Self {
        self.field("topic", topic)
    }

    pub fn meaning(self, meaning: &str) -> Self {
        self.field("meaning_en", meaning)
    }

    pub fn examples(self, de: &str, en: &str) -> Self {
        self.field("example_de", de).field("example_en", en)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> RawRecord {
        self.fields
    }
}
