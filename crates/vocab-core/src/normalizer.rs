//! Normalizer — maps raw input records onto [`VocabRecord`] values.
//!
//! Each record is transformed independently of the others:
//!
//! - `topic` is trimmed and lowercased; absent or blank becomes `"basics"`.
//! - `article` of exactly `""` becomes `null`; everything else passes through.
//! - `plural` defaults to `null`, the meaning/example fields to `""`. A present
//!   value, including an explicit `null`, passes through.
//! - `id`, `word` and `slug` are copied as-is and must be present. `id` must
//!   also be a number or a string; a `null` id identifies nothing.
//! - `level` is always [`Level::A2`].

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{NormalizeError, Result};
use crate::types::{Level, RawRecord, RecordId, VocabRecord, ARTICLES, DEFAULT_TOPIC};

/// Input keys the normalizer reads. Anything else is dropped.
const KNOWN_KEYS: &[&str] = &[
    "id",
    "word",
    "article",
    "plural",
    "meaning_en",
    "example_de",
    "example_en",
    "topic",
    "level",
    "slug",
];

// ---------------------------------------------------------------------------
// Article policy
// ---------------------------------------------------------------------------

/// What to do with an article that is not `der`, `die` or `das`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticlePolicy {
    /// Pass it through silently.
    Lenient,
    /// Pass it through and log a warning.
    #[default]
    Warn,
    /// Abort the run.
    Strict,
}

impl FromStr for ArticlePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(ArticlePolicy::Lenient),
            "warn" => Ok(ArticlePolicy::Warn),
            "strict" => Ok(ArticlePolicy::Strict),
            other => Err(format!(
                "unknown article policy {other:?} (expected lenient, warn or strict)"
            )),
        }
    }
}

impl std::fmt::Display for ArticlePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticlePolicy::Lenient => write!(f, "lenient"),
            ArticlePolicy::Warn => write!(f, "warn"),
            ArticlePolicy::Strict => write!(f, "strict"),
        }
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Trim the topic and lowercase it, falling back to [`DEFAULT_TOPIC`].
pub fn normalize_topic(topic: Option<&str>) -> String {
    let trimmed = topic.unwrap_or_default().trim();
    if trimmed.is_empty() {
        DEFAULT_TOPIC.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Replace an empty-string article with `None`. Only `""` is touched; a
/// whitespace-only article passes through like any other value.
pub fn normalize_article(article: Option<String>) -> Option<String> {
    article.filter(|a| !a.is_empty())
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Stateless record normalizer. The only knob is the [`ArticlePolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    policy: ArticlePolicy,
}

impl Normalizer {
    pub fn new(policy: ArticlePolicy) -> Self {
        Self { policy }
    }

    /// Normalize every record, preserving order. The first failing record
    /// aborts the whole batch.
    pub fn normalize_all(&self, records: &[RawRecord]) -> Result<Vec<VocabRecord>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.normalize_record(index, record))
            .collect()
    }

    /// Normalize a single record. `index` is its zero-based position in the
    /// input array and only used for error reporting.
    pub fn normalize_record(&self, index: usize, record: &RawRecord) -> Result<VocabRecord> {
        let id = record_id(record, index)?;
        let word = required_string(record, index, "word")?;
        let slug = required_string(record, index, "slug")?;

        let article = normalize_article(optional_string(record, index, "article")?);
        if let Some(article) = &article {
            self.check_article(index, article)?;
        }

        let topic = optional_string(record, index, "topic")?;

        let dropped: Vec<&str> = record
            .keys()
            .map(String::as_str)
            .filter(|key| !KNOWN_KEYS.contains(key))
            .collect();
        if !dropped.is_empty() {
            debug!(index, ?dropped, "dropping unknown keys");
        }

        Ok(VocabRecord {
            id,
            word,
            article,
            plural: optional_string(record, index, "plural")?,
            meaning_en: text(record, index, "meaning_en")?,
            example_de: text(record, index, "example_de")?,
            example_en: text(record, index, "example_en")?,
            topic: normalize_topic(topic.as_deref()),
            level: Level::A2,
            slug,
        })
    }

    fn check_article(&self, index: usize, article: &str) -> Result<()> {
        if ARTICLES.contains(&article) {
            return Ok(());
        }
        match self.policy {
            ArticlePolicy::Lenient => Ok(()),
            ArticlePolicy::Warn => {
                warn!(index, article, "article is not one of der, die, das");
                Ok(())
            }
            ArticlePolicy::Strict => Err(NormalizeError::InvalidArticle {
                index,
                article: article.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Field extraction
// ---------------------------------------------------------------------------

fn record_id(record: &RawRecord, index: usize) -> Result<RecordId> {
    match record.get("id") {
        None => Err(NormalizeError::MissingField { index, field: "id" }),
        Some(Value::Number(n)) => Ok(RecordId::Number(n.clone())),
        Some(Value::String(s)) => Ok(RecordId::Text(s.clone())),
        Some(_) => Err(NormalizeError::InvalidField {
            index,
            field: "id",
            expected: "a number or a string",
        }),
    }
}

fn required_string(record: &RawRecord, index: usize, field: &'static str) -> Result<String> {
    match record.get(field) {
        None => Err(NormalizeError::MissingField { index, field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(NormalizeError::InvalidField {
            index,
            field,
            expected: "a string",
        }),
    }
}

fn optional_string(record: &RawRecord, index: usize, field: &'static str) -> Result<Option<String>> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(NormalizeError::InvalidField {
            index,
            field,
            expected: "a string or null",
        }),
    }
}

/// Free-text field: `""` when the key is absent, `None` for an explicit `null`.
fn text(record: &RawRecord, index: usize, field: &'static str) -> Result<Option<String>> {
    if !record.contains_key(field) {
        return Ok(Some(String::new()));
    }
    optional_string(record, index, field)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
