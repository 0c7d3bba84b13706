//! Configuration types for vocab-norm.
//!
//! [`Config::load`] layers, in order: the built-in defaults, the user file at
//! `~/.config/vocab-norm/config.toml` (or an explicitly supplied file), and
//! `VOCAB_NORM__SECTION__KEY` environment variables. [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::normalizer::ArticlePolicy;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
input  = "data/vocab/final_a2_vocab.json"
output = "data/vocab/A2_all.json"

[normalize]
article_policy = "warn"
"#;

const ENV_PREFIX: &str = "VOCAB_NORM";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
}

/// `[paths]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_input() -> PathBuf { PathBuf::from("data/vocab/final_a2_vocab.json") }
fn default_output() -> PathBuf { PathBuf::from("data/vocab/A2_all.json") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub article_policy: ArticlePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. With `explicit` set, that file is
    /// required and replaces the user file.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        }
        .format(config::FileFormat::Toml);

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("vocab-norm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
