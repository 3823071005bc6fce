//! Product Hunt launch-feed adapter.

use crate::error::DigestError;
use crate::filter::is_relevant;
use crate::types::Candidate;

use super::feed_helpers::parse_rss_items;

pub const SOURCE_LABEL: &str = "Product Hunt";

const MAX_ITEMS: usize = 50;

/// Fetch the general launch feed and keep the AI-relevant items.
///
/// There is no stable public launch API, so this reads the site-wide RSS
/// feed and takes the first 50 entries. Launches carry no popularity signal,
/// so `score` is 0.
///
/// # Errors
///
/// Returns [`DigestError::Http`] or [`DigestError::Xml`] on fetch or parse
/// failure.
pub async fn fetch(client: &reqwest::Client, feed_url: &str) -> Result<Vec<Candidate>, DigestError> {
    let xml = client
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let items = parse_rss_items(&xml, MAX_ITEMS)?;

    Ok(items
        .into_iter()
        .filter(|item| is_relevant(&item.title))
        .map(|item| Candidate {
            topic: item.title,
            url: item.link,
            source: SOURCE_LABEL.to_string(),
            score: 0,
            comments: None,
            enrichment: None,
        })
        .collect())
}
