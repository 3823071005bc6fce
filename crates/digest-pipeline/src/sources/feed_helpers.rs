//! Shared RSS/Atom feed parsing helpers.
//!
//! Both feed dialects are normalized into a flat `Vec<FeedItem>` right at the
//! parse boundary, so the adapters never re-check document shape. A feed with
//! a single entry and a feed with many parse identically.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::DigestError;

/// One feed entry reduced to the two fields the pipeline cares about.
#[derive(Debug, Clone)]
pub(crate) struct FeedItem {
    pub(crate) title: String,
    pub(crate) link: String,
}

/// Parse an RSS 2.0 document, extracting `<item>` title and link text.
///
/// Stops after `max_items` complete items. Items missing a title or link are
/// skipped rather than failing the feed.
pub(crate) fn parse_rss_items(xml: &str, max_items: usize) -> Result<Vec<FeedItem>, DigestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut title = String::new();
    let mut link = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                if name == "item" {
                    in_item = true;
                    title.clear();
                    link.clear();
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "item" && in_item {
                    in_item = false;
                    if !title.is_empty() && !link.is_empty() {
                        items.push(FeedItem {
                            title: title.clone(),
                            link: link.clone(),
                        });
                        if items.len() >= max_items {
                            break;
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    match current_tag.as_str() {
                        "title" => title = text,
                        "link" => link = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    match current_tag.as_str() {
                        "title" => title = text,
                        "link" => link = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DigestError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

/// Parse an Atom document, extracting `<entry>` title text and the first
/// `<link href="...">` per entry.
///
/// Stops after `max_items` complete entries.
pub(crate) fn parse_atom_entries(xml: &str, max_items: usize) -> Result<Vec<FeedItem>, DigestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_entry = false;
    let mut in_title = false;
    let mut title = String::new();
    let mut link = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                match name {
                    "entry" => {
                        in_entry = true;
                        title.clear();
                        link.clear();
                    }
                    "title" if in_entry => in_title = true,
                    // Atom links are usually self-closing, but tolerate
                    // <link href="...">...</link> too.
                    "link" if in_entry && link.is_empty() => {
                        if let Some(href) = href_attribute(&e) {
                            link = href;
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "link" && in_entry && link.is_empty() {
                    if let Some(href) = href_attribute(&e) {
                        link = href;
                    }
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                match name {
                    "title" => in_title = false,
                    "entry" if in_entry => {
                        in_entry = false;
                        if !title.is_empty() && !link.is_empty() {
                            items.push(FeedItem {
                                title: title.clone(),
                                link: link.clone(),
                            });
                            if items.len() >= max_items {
                                break;
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if in_title {
                    title = e.unescape().unwrap_or_default().into_owned();
                }
            }
            Ok(Event::CData(e)) => {
                if in_title {
                    title = String::from_utf8_lossy(e.as_ref()).into_owned();
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DigestError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

fn href_attribute(e: &quick_xml::events::BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"href")
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::{parse_atom_entries, parse_rss_items};

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Feed</title>
    <item>
      <title>First AI story</title>
      <link>https://example.com/1</link>
    </item>
    <item>
      <title>Second story</title>
      <link>https://example.com/2</link>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>r/test hot</title>
  <entry>
    <title>Agent workflows that work</title>
    <link href="https://reddit.example/post1"/>
  </entry>
  <entry>
    <title>Second post</title>
    <link href="https://reddit.example/post2"/>
    <link href="https://reddit.example/post2-alt"/>
  </entry>
</feed>"#;

    #[test]
    fn rss_items_extract_title_and_link() {
        let items = parse_rss_items(SAMPLE_RSS, 25).expect("should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "First AI story");
        assert_eq!(items[0].link, "https://example.com/1");
    }

    #[test]
    fn rss_respects_max_items() {
        let items = parse_rss_items(SAMPLE_RSS, 1).expect("should parse");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn rss_single_item_feed_parses_as_one_element_sequence() {
        let xml = r#"<rss version="2.0"><channel><item>
            <title>Only story</title><link>https://example.com/only</link>
        </item></channel></rss>"#;
        let items = parse_rss_items(xml, 25).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Only story");
    }

    #[test]
    fn rss_skips_items_missing_title_or_link() {
        let xml = r#"<rss version="2.0"><channel>
            <item><title>No link here</title></item>
            <item><title>Good</title><link>https://example.com/good</link></item>
        </channel></rss>"#;
        let items = parse_rss_items(xml, 25).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Good");
    }

    #[test]
    fn atom_entries_take_first_link_href() {
        let items = parse_atom_entries(SAMPLE_ATOM, 25).expect("should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Agent workflows that work");
        assert_eq!(items[0].link, "https://reddit.example/post1");
        assert_eq!(items[1].link, "https://reddit.example/post2");
    }

    #[test]
    fn atom_respects_max_items() {
        let items = parse_atom_entries(SAMPLE_ATOM, 1).expect("should parse");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn empty_feeds_return_empty_vec() {
        let rss = r#"<rss version="2.0"><channel></channel></rss>"#;
        assert!(parse_rss_items(rss, 25).expect("should parse").is_empty());

        let atom = r#"<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        assert!(parse_atom_entries(atom, 25).expect("should parse").is_empty());
    }
}
