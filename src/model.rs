//! Output record for one harvested paper.

use crate::arxiv::RawEntry;
use crate::error::{HarvestError, OptionExt, Result};
use serde::{Deserialize, Serialize};

/// Placeholder used in errors when the entry has no `id` to report
const UNKNOWN_ENTRY: &str = "<entry without id>";

/// One paper as written to the output file.
///
/// Field order is the key order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<String>,
    /// Abstract page URL (the entry's `id`)
    pub link: String,
    /// Publication timestamp, verbatim from the feed
    pub date: String,
    /// Extracted full text; empty when extraction failed
    pub content: String,
}

impl Paper {
    /// Normalize a feed entry. `content` starts empty and is filled in once
    /// the document has been extracted.
    pub fn from_entry(entry: RawEntry) -> Result<Self> {
        let label = entry.id.clone().unwrap_or_else(|| UNKNOWN_ENTRY.to_string());

        let link = entry.id.ok_or_missing("id", &label)?;
        let title = entry.title.ok_or_missing("title", &label)?;
        let date = entry.published.ok_or_missing("published", &label)?;
        if entry.authors.is_empty() {
            return Err(HarvestError::MissingField {
                field: "author",
                entry: label,
            });
        }
        let authors = entry
            .authors
            .into_iter()
            .map(|a| a.name.ok_or_missing("author.name", &label))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title,
            authors,
            link,
            date,
            content: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arxiv::RawAuthor;

    fn author(name: &str) -> RawAuthor {
        RawAuthor {
            name: Some(name.to_string()),
        }
    }

    fn entry(authors: Vec<RawAuthor>) -> RawEntry {
        RawEntry {
            id: Some("http://export.arxiv.org/abs/1234.5678".to_string()),
            title: Some("A Study".to_string()),
            published: Some("2023-01-01T00:00:00Z".to_string()),
            authors,
        }
    }

    #[test]
    fn test_single_author() -> Result<()> {
        let paper = Paper::from_entry(entry(vec![author("J. Doe")]))?;
        assert_eq!(paper.authors, vec!["J. Doe".to_string()]);
        assert_eq!(paper.title, "A Study");
        assert_eq!(paper.link, "http://export.arxiv.org/abs/1234.5678");
        assert_eq!(paper.date, "2023-01-01T00:00:00Z");
        assert_eq!(paper.content, "");
        Ok(())
    }

    #[test]
    fn test_author_order_preserved() -> Result<()> {
        let paper = Paper::from_entry(entry(vec![author("C"), author("A"), author("B")]))?;
        assert_eq!(paper.authors, vec!["C", "A", "B"]);
        Ok(())
    }

    #[test]
    fn test_missing_title() {
        let mut raw = entry(vec![author("J. Doe")]);
        raw.title = None;
        let err = Paper::from_entry(raw).expect_err("title is required");
        assert!(matches!(err, HarvestError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_missing_id_uses_placeholder() {
        let mut raw = entry(vec![]);
        raw.id = None;
        let err = Paper::from_entry(raw).expect_err("id is required");
        assert!(err.to_string().contains(UNKNOWN_ENTRY));
    }

    #[test]
    fn test_no_authors() {
        let err = Paper::from_entry(entry(vec![])).expect_err("an author is required");
        assert!(matches!(err, HarvestError::MissingField { field: "author", .. }));
    }

    #[test]
    fn test_author_without_name() {
        let raw = entry(vec![author("J. Doe"), RawAuthor { name: None }]);
        let err = Paper::from_entry(raw).expect_err("author name is required");
        assert!(matches!(err, HarvestError::MissingField { field: "author.name", .. }));
    }

    #[test]
    fn test_json_key_order() -> Result<()> {
        let paper = Paper::from_entry(entry(vec![author("J. Doe")]))?;
        let json = serde_json::to_string(&paper)?;
        assert_eq!(
            json,
            r#"{"title":"A Study","authors":["J. Doe"],"link":"http://export.arxiv.org/abs/1234.5678","date":"2023-01-01T00:00:00Z","content":""}"#
        );
        Ok(())
    }
}
