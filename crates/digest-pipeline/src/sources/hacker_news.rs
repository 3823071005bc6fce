//! Hacker News front-page adapter (Algolia search API).

use serde::Deserialize;

use crate::error::DigestError;
use crate::filter::is_relevant;
use crate::types::Candidate;

pub const SOURCE_LABEL: &str = "Hacker News";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

/// One Algolia hit. Every field is optional — the API has renamed and dropped
/// fields before, and a partial hit should degrade to a skipped candidate,
/// not a failed adapter.
#[derive(Debug, Deserialize)]
struct Hit {
    title: Option<String>,
    url: Option<String>,
    #[serde(rename = "objectID")]
    object_id: Option<String>,
    points: Option<i64>,
    num_comments: Option<i64>,
}

/// Fetch current front-page stories and keep the AI-relevant ones.
///
/// `score` is the story's point count and `comments` its comment count.
/// Stories without an external URL link back to their HN discussion page.
///
/// # Errors
///
/// Returns [`DigestError::Http`] on network failure, a non-success status, or
/// a response body that does not decode as the expected JSON shape.
pub async fn fetch(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<Vec<Candidate>, DigestError> {
    let response = client
        .get(endpoint)
        .query(&[("tags", "front_page"), ("hitsPerPage", "50")])
        .send()
        .await?
        .error_for_status()?;
    let body: SearchResponse = response.json().await?;

    let candidates = body
        .hits
        .into_iter()
        .filter_map(|hit| {
            let topic = hit.title?;
            let url = hit.url.or_else(|| {
                hit.object_id
                    .map(|id| format!("https://news.ycombinator.com/item?id={id}"))
            })?;
            Some(Candidate {
                topic,
                url,
                source: SOURCE_LABEL.to_string(),
                score: hit.points.unwrap_or(0),
                comments: Some(hit.num_comments.unwrap_or(0)),
                enrichment: None,
            })
        })
        .filter(|candidate| is_relevant(&candidate.topic))
        .collect();

    Ok(candidates)
}
