//! PDF download and text extraction.
//!
//! The document is streamed into a [`NamedTempFile`], parsed with `lopdf`
//! and the per-page text joined in page order. The temp file is dropped,
//! and therefore deleted, on every return path.

use crate::config::HarvestConfig;
use crate::error::{HarvestError, Result};
use futures::StreamExt;
use lopdf::Document;
use reqwest::Client;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Path segment of an arXiv abstract page
const ABSTRACT_SEGMENT: &str = "/abs/";

/// Path segment of the matching PDF
const DOCUMENT_SEGMENT: &str = "/pdf/";

/// Derive the PDF URL from an abstract page URL.
///
/// Only the first `/abs/` is replaced; a URL without one is returned as is.
pub fn pdf_url_for(abs_url: &str) -> String {
    abs_url.replacen(ABSTRACT_SEGMENT, DOCUMENT_SEGMENT, 1)
}

/// Downloads PDFs and pulls their text out.
pub struct DocumentExtractor {
    client: Client,
    temp_dir: Option<PathBuf>,
}

impl DocumentExtractor {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        Ok(Self {
            client: config.http_client()?,
            temp_dir: config.temp_dir.clone(),
        })
    }

    /// Download the PDF at `pdf_url` and return its text.
    pub async fn extract(&self, pdf_url: &str) -> Result<String> {
        let file = self.download(pdf_url).await?;
        let text = extract_text(file.path())?;
        info!(url = pdf_url, chars = text.chars().count(), "Extracted PDF text");
        Ok(text)
    }

    async fn download(&self, url: &str) -> Result<NamedTempFile> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Api {
                code: status.as_u16(),
                message: format!("Document download failed: {}", status),
            });
        }

        let mut file = match &self.temp_dir {
            Some(dir) => tempfile::Builder::new().suffix(".pdf").tempfile_in(dir)?,
            None => tempfile::Builder::new().suffix(".pdf").tempfile()?,
        };

        let mut written = 0usize;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            written += chunk.len();
            file.write_all(&chunk)?;
        }
        file.flush()?;

        debug!(url = url, bytes = written, path = ?file.path(), "Downloaded document");
        Ok(file)
    }
}

/// Concatenate the text of every page in page order.
///
/// A page with no extractable text (scanned images, unsupported encodings)
/// contributes nothing. Line breaks the extractor appends at the end of a
/// page are dropped so consecutive pages join directly.
pub fn extract_text(path: &Path) -> Result<String> {
    let document = Document::load(path)?;
    let mut text = String::new();

    for page_number in document.get_pages().into_keys() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(page_text.trim_end_matches(['\n', '\r'])),
            Err(e) => debug!(page = page_number, error = %e, "No text on page"),
        }
    }

    Ok(text)
}
