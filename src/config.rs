//! Run configuration.
//!
//! Defaults reproduce the stock harvest: one topic, five results, output to
//! `arxiv_results.json` in the working directory. The CLI overrides fields
//! one by one.

use crate::error::{HarvestError, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// arXiv query endpoint
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Default number of entries requested per topic
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default output file
pub const DEFAULT_OUTPUT: &str = "arxiv_results.json";

const USER_AGENT: &str = concat!("rustarxiv/", env!("CARGO_PKG_VERSION"));

/// Topics harvested when none are given
pub const DEFAULT_TOPICS: &[&str] = &["Product education"];

/// What to do with a feed entry missing `title`, `id`, `published`, its authors or an author name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MalformedEntryPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Log a warning and drop the entry
    Skip,
}

/// Settings for one harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub topics: Vec<String>,
    pub max_results: usize,
    /// Zero-based offset into the result list
    pub start: usize,
    pub api_url: String,
    pub output: PathBuf,
    /// `None` leaves the HTTP client's default in place
    pub timeout: Option<Duration>,
    /// Directory for transient PDF downloads; `None` uses the system temp dir
    pub temp_dir: Option<PathBuf>,
    pub on_malformed: MalformedEntryPolicy,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            max_results: DEFAULT_MAX_RESULTS,
            start: 0,
            api_url: ARXIV_API_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: None,
            temp_dir: None,
            on_malformed: MalformedEntryPolicy::default(),
        }
    }
}

impl HarvestConfig {
    /// HTTP client shared by the feed and document fetchers.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| HarvestError::Config(format!("Failed to build HTTP client: {}", e)))
    }

    /// Check the fields that would otherwise fail late, mid-run.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api_url).map_err(|e| {
            HarvestError::Config(format!("Invalid API URL {:?}: {}", self.api_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HarvestError::Config(format!(
                "API URL must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.max_results == 0 {
            return Err(HarvestError::Config("max_results must be at least 1".to_string()));
        }
        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(HarvestError::Config(format!(
                    "Temp directory does not exist: {}",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
