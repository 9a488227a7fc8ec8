//! Harvest driver: topics → feed → papers → extracted text → result set.
//!
//! Everything runs one step at a time. Topic order and entry order within a
//! topic are the order of the output.

use crate::arxiv::{ArxivClient, Feed};
use crate::config::{HarvestConfig, MalformedEntryPolicy};
use crate::error::{HarvestError, Result};
use crate::extract::{pdf_url_for, DocumentExtractor};
use crate::model::Paper;
use crate::output;
use std::path::Path;
use tracing::{error, info, warn};

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    pub topics_processed: usize,
    pub topics_skipped: usize,
    pub papers: usize,
    pub extraction_failures: usize,
    pub malformed_skipped: usize,
}

/// Papers collected by a run, plus what happened along the way
#[derive(Debug, Default)]
pub struct HarvestOutcome {
    pub papers: Vec<Paper>,
    pub summary: HarvestSummary,
}

/// Owns the fetcher and extractor for a run.
pub struct Harvester {
    fetcher: ArxivClient,
    extractor: DocumentExtractor,
    on_malformed: MalformedEntryPolicy,
}

impl Harvester {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: ArxivClient::new(config)?,
            extractor: DocumentExtractor::new(config)?,
            on_malformed: config.on_malformed,
        })
    }

    /// Harvest every topic in order.
    ///
    /// A failed feed fetch skips its topic; a failed extraction leaves
    /// `content` empty. Only a malformed entry under
    /// [`MalformedEntryPolicy::Abort`] ends the run early.
    pub async fn run(&self, topics: &[String]) -> Result<HarvestOutcome> {
        let mut outcome = HarvestOutcome::default();

        for topic in topics {
            info!(topic = %topic, "Fetching papers for topic");

            let feed = match self.fetcher.fetch(topic).await {
                Ok(feed) => feed,
                Err(e) => {
                    error!(topic = %topic, error = %e, "Failed to fetch feed, skipping topic");
                    outcome.summary.topics_skipped += 1;
                    continue;
                }
            };

            self.collect_feed(feed, &mut outcome).await?;
            outcome.summary.topics_processed += 1;
        }

        outcome.summary.papers = outcome.papers.len();
        info!(
            topics = outcome.summary.topics_processed,
            skipped = outcome.summary.topics_skipped,
            papers = outcome.summary.papers,
            extraction_failures = outcome.summary.extraction_failures,
            "Harvest complete"
        );
        Ok(outcome)
    }

    /// Harvest, then write the result set to `path`.
    pub async fn run_to_file(&self, topics: &[String], path: &Path) -> Result<HarvestSummary> {
        let outcome = self.run(topics).await?;
        output::write_results(path, &outcome.papers)?;
        Ok(outcome.summary)
    }

    async fn collect_feed(&self, feed: Feed, outcome: &mut HarvestOutcome) -> Result<()> {
        for entry in feed.entries {
            let mut paper = match Paper::from_entry(entry) {
                Ok(paper) => paper,
                Err(e @ HarvestError::MissingField { .. })
                    if self.on_malformed == MalformedEntryPolicy::Skip =>
                {
                    warn!(error = %e, "Skipping malformed entry");
                    outcome.summary.malformed_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let pdf_url = pdf_url_for(&paper.link);
            info!(title = %paper.title, url = %pdf_url, "Parsing PDF for paper");

            paper.content = match self.extractor.extract(&pdf_url).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(url = %pdf_url, error = %e, "Failed to download or parse PDF");
                    outcome.summary.extraction_failures += 1;
                    String::new()
                }
            };

            outcome.papers.push(paper);
        }
        Ok(())
    }
}
