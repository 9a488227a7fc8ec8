//! JSON output of the harvested result set.

use crate::error::Result;
use crate::model::Paper;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::info;

/// Indentation of the output file
const INDENT: &[u8] = b"    ";

/// Render papers as a pretty-printed JSON array.
///
/// Non-ASCII text is written as-is, never `\u` escaped.
pub fn to_json(papers: &[Paper]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    papers.serialize(&mut ser)?;
    Ok(buf)
}

/// Write papers to `path`, replacing any previous file.
///
/// Missing parent directories are created.
pub fn write_results(path: &Path, papers: &[Paper]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_json(papers)?)?;
    info!(path = ?path, count = papers.len(), "Saved results");
    Ok(())
}
