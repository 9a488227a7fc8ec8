//! rustarxiv - arXiv topic harvester
//!
//! Queries arXiv for each topic, downloads every matching paper's PDF and
//! writes title, authors, link, date and full text to a JSON file.
//!
//! ## Usage
//!
//! ```bash
//! rustarxiv harvest "Product education" "graph neural networks" --max-results 10
//! rustarxiv extract http://arxiv.org/abs/1234.5678
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustarxiv::config::{
    HarvestConfig, MalformedEntryPolicy, ARXIV_API_URL, DEFAULT_MAX_RESULTS, DEFAULT_OUTPUT,
};
use rustarxiv::extract::{pdf_url_for, DocumentExtractor};
use rustarxiv::pipeline::Harvester;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// arXiv topic harvester - metadata plus full-text PDF extraction to JSON
#[derive(Parser)]
#[command(name = "rustarxiv")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest papers for each topic and write them to a JSON file
    Harvest {
        /// Topics to search for (default: "Product education")
        topics: Vec<String>,

        /// Maximum results per topic
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Output file, overwritten on every run
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// arXiv query endpoint
        #[arg(long, default_value = ARXIV_API_URL)]
        api_url: String,

        /// Request timeout in seconds (default: none)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Directory for transient PDF downloads (default: system temp dir)
        #[arg(long)]
        temp_dir: Option<PathBuf>,

        /// What to do with entries missing title, id, date or authors
        #[arg(long, value_enum, default_value_t = MalformedEntryPolicy::Abort)]
        on_malformed: MalformedEntryPolicy,
    },

    /// Download one paper and print its extracted text
    Extract {
        /// Abstract page or PDF URL
        url: String,

        /// Request timeout in seconds (default: none)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    match cli.command {
        Commands::Harvest {
            topics,
            max_results,
            output,
            api_url,
            timeout_secs,
            temp_dir,
            on_malformed,
        } => {
            let mut config = HarvestConfig {
                max_results,
                output,
                api_url,
                timeout: timeout_secs.map(Duration::from_secs),
                temp_dir,
                on_malformed,
                ..Default::default()
            };
            if !topics.is_empty() {
                config.topics = topics;
            }
            run_harvest(config).await
        }
        Commands::Extract { url, timeout_secs } => {
            let config = HarvestConfig {
                timeout: timeout_secs.map(Duration::from_secs),
                ..Default::default()
            };
            run_extract(&config, &url).await
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

async fn run_harvest(config: HarvestConfig) -> Result<()> {
    let harvester = Harvester::new(&config).context("Invalid configuration")?;

    println!("Harvesting {} topic(s): {}", config.topics.len(), config.topics.join(", "));

    let summary = harvester
        .run_to_file(&config.topics, &config.output)
        .await
        .context("Harvest failed")?;

    println!(
        "Topics: {} processed, {} skipped",
        summary.topics_processed, summary.topics_skipped
    );
    if summary.extraction_failures > 0 {
        println!(
            "PDF extraction failed for {} paper(s); their content is empty",
            summary.extraction_failures
        );
    }
    if summary.malformed_skipped > 0 {
        println!("Skipped {} malformed entries", summary.malformed_skipped);
    }
    println!("\n✓ Results saved to {} ({} papers)", config.output.display(), summary.papers);
    Ok(())
}

async fn run_extract(config: &HarvestConfig, url: &str) -> Result<()> {
    let extractor = DocumentExtractor::new(config)?;
    let pdf_url = pdf_url_for(url);
    let text = extractor
        .extract(&pdf_url)
        .await
        .with_context(|| format!("Failed to extract {}", pdf_url))?;
    println!("{}", text);
    Ok(())
}
