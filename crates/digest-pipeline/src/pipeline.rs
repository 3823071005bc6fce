//! Digest pipeline orchestration.

use crate::aggregate::dedup_rank_truncate;
use crate::enrich::OpenAiClient;
use crate::error::DigestError;
use crate::format::{day_stamp, digest_title, render_digest};
use crate::sources::{collect_candidates, http_client};
use crate::types::DigestConfig;

/// One fully rendered daily digest, ready to persist under `(owner, title)`.
#[derive(Debug, Clone)]
pub struct DailyDigest {
    /// `YYYY-MM-DD` in the configured timezone.
    pub day: String,
    /// `"Viral Ideas — {day}"` — the idempotency key together with the owner.
    pub title: String,
    /// Rendered document body.
    pub body: String,
    /// Number of candidates that made the final list.
    pub idea_count: usize,
}

/// Build one day's digest.
///
/// 1. Fan out to all four source adapters concurrently and join.
/// 2. Dedup by `(topic, url)`, rank by score, truncate to the limit.
/// 3. Enrich via OpenAI when configured (falls back to unenriched on failure).
/// 4. Render the digest body.
///
/// Source and enrichment failures are recovered internally; a run where every
/// source failed still yields a digest with zero ideas.
///
/// # Errors
///
/// Returns [`DigestError`] only if an HTTP client cannot be constructed.
pub async fn build_daily_digest(config: &DigestConfig) -> Result<DailyDigest, DigestError> {
    let client = http_client()?;
    let day = day_stamp(config.timezone);
    let title = digest_title(&day);

    let collected = collect_candidates(&client, &config.endpoints).await;
    let collected_count = collected.len();
    let mut candidates = dedup_rank_truncate(collected, config.limit);

    if candidates.is_empty() {
        tracing::info!(day = %day, "no relevant candidates from any source; digest will be empty");
    }

    if let Some(api_key) = &config.openai_api_key {
        let openai = OpenAiClient::new(api_key)?;
        candidates = openai.enrich(candidates).await;
    }

    let body = render_digest(&candidates, &day, config.timezone.name());
    tracing::info!(
        day = %day,
        collected = collected_count,
        kept = candidates.len(),
        "daily digest rendered"
    );

    Ok(DailyDigest {
        day,
        title,
        body,
        idea_count: candidates.len(),
    })
}
