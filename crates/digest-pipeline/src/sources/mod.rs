//! Candidate source adapters and the fan-out/fan-in collection step.

mod feed_helpers;
pub mod google_trends;
pub mod hacker_news;
pub mod product_hunt;
pub mod reddit;

use std::time::Duration;

use crate::error::DigestError;
use crate::types::Candidate;

const USER_AGENT: &str = "viral-digest/0.1 (daily trend aggregation)";
const REQUEST_TIMEOUT_SECS: u64 = 20;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Feed URLs for every adapter, overridable so tests can point them at a
/// mock server.
#[derive(Debug, Clone)]
pub struct SourceEndpoints {
    /// Algolia Hacker News search endpoint.
    pub hacker_news: String,
    /// Reddit base URL; per-subreddit Atom paths are appended.
    pub reddit: String,
    /// Ordered fallback chain of trending-searches feed URLs.
    pub google_trends: Vec<String>,
    /// Product launch RSS feed URL.
    pub product_hunt: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            hacker_news: "https://hn.algolia.com/api/v1/search".to_string(),
            reddit: "https://www.reddit.com".to_string(),
            google_trends: vec![
                "https://trends.google.com/trends/trendingsearches/daily/rss?geo=US".to_string(),
                "https://trends.google.com/trends/trendingsearches/daily?geo=US&format=rss"
                    .to_string(),
            ],
            product_hunt: "https://www.producthunt.com/feed".to_string(),
        }
    }
}

/// Build the shared HTTP client used by every adapter.
///
/// The per-request timeout doubles as the adapter timeout: a hung source
/// times out and is treated like any other adapter failure.
///
/// # Errors
///
/// Returns [`DigestError::Http`] if the client cannot be constructed.
pub fn http_client() -> Result<reqwest::Client, DigestError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Collect candidates from all four sources.
///
/// Full join: every adapter settles (success or failure) before the merge; a
/// failed source is logged and contributes nothing, it never aborts the run.
/// Returns an empty `Vec` if all sources fail.
pub async fn collect_candidates(
    client: &reqwest::Client,
    endpoints: &SourceEndpoints,
) -> Vec<Candidate> {
    let (news, community, trending, launches) = tokio::join!(
        hacker_news::fetch(client, &endpoints.hacker_news),
        reddit::fetch(client, &endpoints.reddit),
        google_trends::fetch(client, &endpoints.google_trends),
        product_hunt::fetch(client, &endpoints.product_hunt),
    );

    let mut candidates = Vec::new();

    match news {
        Ok(items) => {
            tracing::debug!(count = items.len(), "collected Hacker News candidates");
            candidates.extend(items);
        }
        Err(e) => {
            tracing::warn!(source = "hacker_news", error = %e, "Hacker News fetch failed");
        }
    }

    match community {
        Ok(items) => {
            tracing::debug!(count = items.len(), "collected Reddit candidates");
            candidates.extend(items);
        }
        Err(e) => {
            tracing::warn!(source = "reddit", error = %e, "Reddit fetch failed");
        }
    }

    // The trends adapter recovers internally (fallback chain) and only ever
    // contributes a possibly-empty list.
    tracing::debug!(count = trending.len(), "collected Google Trends candidates");
    candidates.extend(trending);

    match launches {
        Ok(items) => {
            tracing::debug!(count = items.len(), "collected Product Hunt candidates");
            candidates.extend(items);
        }
        Err(e) => {
            tracing::warn!(source = "product_hunt", error = %e, "Product Hunt fetch failed");
        }
    }

    candidates
}
