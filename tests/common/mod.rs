//! Shared fixtures: Atom feeds and generated PDFs.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One `<entry>` element.
pub fn entry(id: &str, title: &str, authors: &[&str], published: &str) -> String {
    let authors: String = authors
        .iter()
        .map(|a| format!("    <author>\n      <name>{}</name>\n    </author>\n", a))
        .collect();
    format!(
        "  <entry>\n    <id>{}</id>\n    <updated>{}</updated>\n    <published>{}</published>\n    <title>{}</title>\n    <summary>Abstract.</summary>\n{}    <link href=\"{}\" rel=\"alternate\" type=\"text/html\"/>\n  </entry>\n",
        id, published, published, title, authors, id
    )
}

/// Wrap entries in an arXiv-style Atom feed.
pub fn feed(entries: &[String]) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<feed xmlns=\"http://www.w3.org/2005/Atom\">\n",
            "  <link href=\"http://arxiv.org/api/query\" rel=\"self\" type=\"application/atom+xml\"/>\n",
            "  <title type=\"html\">ArXiv Query</title>\n",
            "  <id>http://arxiv.org/api/test</id>\n",
            "  <updated>2023-01-02T00:00:00-05:00</updated>\n",
            "{}",
            "</feed>\n"
        ),
        entries.concat()
    )
}

/// Build a PDF with one page per string. An empty string gives a page with no text.
pub fn pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("content encodes"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("pdf serializes");
    buf
}
