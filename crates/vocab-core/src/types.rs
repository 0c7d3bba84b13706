//! Record types shared by every stage of the pipeline.
//!
//! Input records are untyped JSON objects ([`RawRecord`]); the normalizer turns
//! each one into a fixed-shape [`VocabRecord`] whose field order is the order
//! of the A1 dataset.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Topic assigned when the input topic is absent or blank.
pub const DEFAULT_TOPIC: &str = "basics";

/// The articles the A1 dataset expects. `null` is the fourth legal value.
pub const ARTICLES: [&str; 3] = ["der", "die", "das"];

/// One input record exactly as it appears in the source array.
pub type RawRecord = serde_json::Map<String, Value>;

/// Record identifier. The source data mixes numeric and string ids, both are
/// copied through untouched. Numbers keep their original digits, so an id
/// wider than 64 bits is not rounded to a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(RecordId::Number(n)),
            Value::String(s) => Ok(RecordId::Text(s)),
            other => Err(D::Error::custom(format!(
                "expected a number or string id, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Number(n) => Value::Number(n),
            RecordId::Text(s) => Value::String(s),
        }
    }
}

/// Proficiency tier written into every output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    A2,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::A2 => write!(f, "A2"),
        }
    }
}

/// A normalized vocabulary record in the A1 dataset shape.
///
/// Serializes to exactly ten keys in declaration order. `article` and `plural`
/// serialize as `null` when absent. The three text fields are `""` when the
/// input lacked the key and `null` only when the input carried an explicit
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabRecord {
    pub id: RecordId,
    pub word: String,
    /// `der`, `die`, `das`, or `None`. Never the empty string.
    pub article: Option<String>,
    pub plural: Option<String>,
    pub meaning_en: Option<String>,
    pub example_de: Option<String>,
    pub example_en: Option<String>,
    /// Trimmed, lowercase, never empty.
    pub topic: String,
    pub level: Level,
    pub slug: String,
}

impl VocabRecord {
    /// Map the record back into the input shape, so a normalized dataset can
    /// be fed through the normalizer again.
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        raw.insert("id".into(), self.id.clone().into());
        raw.insert("word".into(), self.word.clone().into());
        raw.insert("article".into(), optional(&self.article));
        raw.insert("plural".into(), optional(&self.plural));
        raw.insert("meaning_en".into(), optional(&self.meaning_en));
        raw.insert("example_de".into(), optional(&self.example_de));
        raw.insert("example_en".into(), optional(&self.example_en));
        raw.insert("topic".into(), self.topic.clone().into());
        raw.insert("level".into(), self.level.to_string().into());
        raw.insert("slug".into(), self.slug.clone().into());
        raw
    }
}

fn optional(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::String)
}
