//! vocab-core — normalizes A2 vocabulary records into the A1 dataset schema.
//!
//! This crate exposes each stage of the run as a public module so that the
//! binary and the integration harnesses can drive them directly.
//!
//! # Pipeline
//!
//! ```text
//! dataset::load ──► Normalizer ──► export::write ──► Summary
//! ```
//!
//! The run is a single sequential pass. Every record is normalized before the
//! output file is touched, so a failing record never leaves a truncated file.

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod pipeline;
pub mod types;

pub use error::{NormalizeError, Result};
pub use normalizer::{ArticlePolicy, Normalizer};
pub use types::{Level, RawRecord, RecordId, VocabRecord};
