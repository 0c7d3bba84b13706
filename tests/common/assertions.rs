//! Domain-specific assertion macros for vocab-norm harnesses.
//!
//! These wrap `pretty_assertions` and name the normalization rule that was
//! violated, so a failing property points straight at the broken field.

// ---------------------------------------------------------------------------
// Shape assertions
// ---------------------------------------------------------------------------

/// Assert that a normalized record satisfies the output invariants: level is
/// `A2`, topic is non-empty and lowercase, article is never `""`.
///
/// ```rust
/// assert_normalized!(record);
/// ```
#[macro_export]
macro_rules! assert_normalized {
    ($record:expr) => {{
        let record: &vocab_core::VocabRecord = &$record;
        assert_eq!(
            record.level,
            vocab_core::Level::A2,
            "assert_normalized! failed: level of {} is not A2",
            record.id
        );
        assert!(
            !record.topic.is_empty(),
            "assert_normalized! failed: empty topic on record {}",
            record.id
        );
        assert_eq!(
            record.topic,
            record.topic.to_lowercase(),
            "assert_normalized! failed: topic of {} is not lowercase",
            record.id
        );
        assert_ne!(
            record.article.as_deref(),
            Some(""),
            "assert_normalized! failed: empty-string article on record {}",
            record.id
        );
    }};
}

/// Assert that a record carries the expected topic.
#[macro_export]
macro_rules! assert_topic {
    ($record:expr, $topic:expr) => {{
        let record: &vocab_core::VocabRecord = &$record;
        pretty_assertions::assert_eq!(
            record.topic.as_str(),
            $topic,
            "assert_topic! failed on record {}",
            record.id
        );
    }};
}

/// Assert that a record carries the expected article (`None` for null).
#[macro_export]
macro_rules! assert_article {
    ($record:expr, $article:expr) => {{
        let record: &vocab_core::VocabRecord = &$record;
        let expected: Option<&str> = $article;
        pretty_assertions::assert_eq!(
            record.article.as_deref(),
            expected,
            "assert_article! failed on record {}",
            record.id
        );
    }};
}

// ---------------------------------------------------------------------------
// Rendered output assertions
// ---------------------------------------------------------------------------

/// Assert that every object in a rendered output document has exactly the
/// ten output keys, in order.
pub fn assert_output_key_order(rendered: &str) {
    let keys: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with("    \""))
        .filter_map(|line| line.trim_start().strip_prefix('"'))
        .filter_map(|rest| rest.split_once('"').map(|(key, _)| key))
        .collect();

    assert_eq!(
        keys.len() % super::OUTPUT_KEYS.len(),
        0,
        "rendered output has a partial record: {keys:?}"
    );
    for (i, chunk) in keys.chunks(super::OUTPUT_KEYS.len()).enumerate() {
        pretty_assertions::assert_eq!(chunk, &super::OUTPUT_KEYS[..], "key order of record {i}");
    }
}
