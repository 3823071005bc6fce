//! Google Trends trending-searches adapter.
//!
//! The trending-searches RSS endpoint has moved before, so this adapter walks
//! an ordered fallback list of candidate URLs: the first one that fetches,
//! parses, and yields at least one relevant candidate wins. This is a
//! sequential fallback chain, not a parallel fan-out.

use crate::error::DigestError;
use crate::filter::is_relevant;
use crate::types::Candidate;

use super::feed_helpers::parse_rss_items;

pub const SOURCE_LABEL: &str = "Google Trends (US daily)";

/// Try each candidate feed URL in order; return the first non-empty result.
///
/// Never fails: when every URL errors out or yields nothing relevant, the
/// adapter contributes an empty list. The two cases are distinguishable in
/// logs — dead endpoints are a `warn`, a quiet news day is a `debug`.
pub async fn fetch(client: &reqwest::Client, urls: &[String]) -> Vec<Candidate> {
    let mut any_feed_succeeded = false;

    for url in urls {
        match try_feed(client, url).await {
            Ok(candidates) => {
                any_feed_succeeded = true;
                if candidates.is_empty() {
                    tracing::debug!(url = %url, "trending feed had no relevant items");
                } else {
                    return candidates;
                }
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "trending feed failed, trying next URL");
            }
        }
    }

    if any_feed_succeeded {
        tracing::debug!("no relevant trending searches today");
    } else {
        tracing::warn!("all trending-search feed URLs failed");
    }
    Vec::new()
}

async fn try_feed(client: &reqwest::Client, url: &str) -> Result<Vec<Candidate>, DigestError> {
    let xml = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let items = parse_rss_items(&xml, usize::MAX)?;

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
