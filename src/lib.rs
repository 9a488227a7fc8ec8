//! # rustarxiv
//!
//! arXiv topic harvester: metadata plus full-text PDF extraction to JSON.
//!
//! ## Modules
//!
//! - [`arxiv`] - arXiv query API client and Atom feed model
//! - [`extract`] - PDF download and text extraction
//! - [`pipeline`] - Topic-by-topic harvest driver
//! - [`output`] - JSON result file
//! - [`config`] - Run configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rustarxiv::{config::HarvestConfig, pipeline::Harvester};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = HarvestConfig::default();
//!     let harvester = Harvester::new(&config)?;
//!     let summary = harvester.run_to_file(&config.topics, &config.output).await?;
//!     println!("Saved {} papers", summary.papers);
//!     Ok(())
//! }
//! ```

pub mod arxiv;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;

pub use error::{HarvestError, Result};
