//! Pipeline — one full run: load, normalize every record, write once.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::normalizer::{ArticlePolicy, Normalizer};
use crate::{dataset, export};

/// Resolved parameters for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub article_policy: ArticlePolicy,
}

impl From<&Config> for Job {
    fn from(config: &Config) -> Self {
        Self {
            input: config.paths.input.clone(),
            output: config.paths.output.clone(),
            article_policy: config.normalize.article_policy,
        }
    }
}

/// Outcome of a successful run. `Display` is the line printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub output: PathBuf,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Normalized {} items to {}", self.count, self.output.display())
    }
}

/// Execute `job`. The output file is only written after every record has
/// been normalized, so any error leaves it untouched.
pub fn run(job: &Job) -> Result<Summary> {
    let raw = dataset::load(&job.input)?;
    let records = Normalizer::new(job.article_policy).normalize_all(&raw)?;
    export::write(&job.output, &records)?;

    info!(
        count = records.len(),
        input = %job.input.display(),
        output = %job.output.display(),
        "normalized vocabulary"
    );

    Ok(Summary {
        count: records.len(),
        output: job.output.clone(),
    })
}
