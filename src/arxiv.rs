//! arXiv query API client
//!
//! Issues one search per topic and deserializes the Atom feed into [`Feed`].
//! Nothing here validates entries: the driver checks for the fields it needs
//! when it turns a [`RawEntry`] into a paper.
//!
//! API details:
//! - Endpoint: GET `http://export.arxiv.org/api/query`
//! - `search_query=all:<text>` searches every field
//! - `start` / `max_results` page through the result list

use crate::config::HarvestConfig;
use crate::error::{HarvestError, Result};
use quick_xml::de::from_str;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Parsed response of one query.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub id: Option<String>,
    pub updated: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    /// Zero, one or many `<entry>` elements, in feed order
    #[serde(rename = "entry")]
    pub entries: Vec<RawEntry>,
}

/// One paper as returned by arXiv, before normalization.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    /// Abstract page URL, e.g. `http://arxiv.org/abs/1234.5678v1`
    pub id: Option<String>,
    pub title: Option<String>,
    pub published: Option<String>,
    /// One `<author>` or several; both land here in source order
    #[serde(rename = "author")]
    pub authors: Vec<RawAuthor>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub name: Option<String>,
}

/// arXiv API client.
pub struct ArxivClient {
    client: Client,
    api_url: String,
    start: usize,
    max_results: usize,
}

impl ArxivClient {
    /// Build a client from the run configuration.
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            api_url: config.api_url.clone(),
            start: config.start,
            max_results: config.max_results,
        })
    }

    /// Query arXiv for one topic.
    ///
    /// Network errors, non-success statuses and unparseable bodies all come
    /// back as `Err`; the caller skips the topic.
    pub async fn fetch(&self, topic: &str) -> Result<Feed> {
        let url = build_query_url(&self.api_url, topic, self.start, self.max_results);
        debug!(url = %url, "Fetching arXiv feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Api {
                code: status.as_u16(),
                message: format!("arXiv API error: {}", status),
            });
        }

        let body = response.text().await?;
        let feed = parse_feed(&body)?;

        info!(
            topic = topic,
            entries = feed.entries.len(),
            total = ?feed.total_results,
            "Parsed arXiv feed"
        );
        Ok(feed)
    }
}

/// Build the search URL for a topic.
fn build_query_url(api_url: &str, topic: &str, start: usize, max_results: usize) -> String {
    format!(
        "{}?search_query={}&start={}&max_results={}",
        api_url,
        urlencoding::encode(&format!("all:{}", topic)),
        start,
        max_results
    )
}

/// Atom root element
const FEED_ROOT: &[u8] = b"feed";

/// Deserialize an Atom body into a [`Feed`].
///
/// The root element must be `<feed>`; an HTML error page served with a 200
/// status is rejected rather than read as an empty feed.
pub fn parse_feed(xml: &str) -> Result<Feed> {
    check_root(xml)?;
    from_str(xml).map_err(|e| HarvestError::Parse(format!("Invalid arXiv feed: {}", e)))
}

fn check_root(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let root = e.local_name();
                if root.as_ref() == FEED_ROOT {
                    return Ok(());
                }
                return Err(HarvestError::Parse(format!(
                    "Expected <feed> root, found <{}>",
                    String::from_utf8_lossy(root.as_ref())
                )));
            }
            Ok(Event::Eof) => return Err(HarvestError::Parse("Empty arXiv response".to_string())),
            Ok(_) => continue,
            Err(e) => return Err(HarvestError::Parse(format!("Invalid arXiv feed: {}", e))),
        }
    }
}
