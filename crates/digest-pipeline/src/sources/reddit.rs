//! Reddit community-feed adapter.
//!
//! Reddit's JSON listing endpoints frequently 403 anonymous clients, so this
//! adapter reads the per-subreddit Atom feeds instead.

use crate::error::DigestError;
use crate::filter::is_relevant;
use crate::types::Candidate;

use super::feed_helpers::parse_atom_entries;

/// Communities sampled for trending AI discussion.
pub const SUBREDDITS: &[&str] = &[
    "artificial",
    "MachineLearning",
    "OpenAI",
    "singularity",
    "Entrepreneur",
    "SaaS",
];

const MAX_ENTRIES_PER_SUB: usize = 25;

/// Fetch the hot feed of every configured subreddit and keep the AI-relevant
/// entries, labeled per community.
///
/// # Errors
///
/// Returns [`DigestError::Http`] or [`DigestError::Xml`] if any community's
/// feed fails to fetch or parse; the whole adapter fails as one unit.
pub async fn fetch(client: &reqwest::Client, base_url: &str) -> Result<Vec<Candidate>, DigestError> {
    let base = base_url.trim_end_matches('/');
    let mut out = Vec::new();

    for sub in SUBREDDITS {
        let url = format!("{base}/r/{sub}/hot/.rss");
        let xml = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let entries = parse_atom_entries(&xml, MAX_ENTRIES_PER_SUB)?;

        for entry in entries {
            if !is_relevant(&entry.title) {
                continue;
            }
            out.push(Candidate {
                topic: entry.title,
                url: entry.link,
                source: format!("Reddit r/{sub}"),
                score: 0,
                comments: None,
                enrichment: None,
            });
        }
    }

    Ok(out)
}
