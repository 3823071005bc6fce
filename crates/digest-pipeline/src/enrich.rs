//! Optional enrichment via the OpenAI Responses API.
//!
//! One batched request covers the whole candidate list; any failure — network,
//! non-success status, or a body that does not parse as the expected JSON
//! array — is logged and the candidates pass through unenriched. Enrichment
//! never fails the pipeline.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use serde_json::json;

use crate::error::DigestError;
use crate::types::{Candidate, Enrichment};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";
const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.4;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ResponsesBody {
    #[serde(default)]
    output_text: Option<String>,
}

/// Client for the OpenAI Responses API.
///
/// Use [`OpenAiClient::new`] for production or
/// [`OpenAiClient::with_base_url`] to point at a mock server in tests.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl OpenAiClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self, DigestError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Http`] if the client cannot be constructed, or
    /// [`DigestError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, DigestError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| DigestError::InvalidUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Attach hooks and angles to the candidates, batched into one request.
    ///
    /// The service is asked for a JSON array aligned with the numbered topic
    /// list; entry `i` of its output augments candidate `i`. A shorter array
    /// leaves the tail unenriched. On any failure the input is returned
    /// unchanged.
    pub async fn enrich(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        if candidates.is_empty() {
            return candidates;
        }

        let Ok(endpoint) = self.base_url.join("v1/responses") else {
            tracing::warn!("could not build enrichment endpoint URL; skipping enrichment");
            return candidates;
        };

        let prompt = build_prompt(&candidates);
        let request = self
            .client
            .post(endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": MODEL,
                "input": prompt,
                "temperature": TEMPERATURE,
            }));

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "enrichment request failed; keeping candidates unenriched");
                return candidates;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                "enrichment request rejected; keeping candidates unenriched"
            );
            return candidates;
        }

        let body: ResponsesBody = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(error = %e, "enrichment response body unreadable; keeping candidates unenriched");
                return candidates;
            }
        };

        let Some(text) = body.output_text else {
            tracing::warn!("enrichment response had no output_text; keeping candidates unenriched");
            return candidates;
        };

        let entries: Vec<Enrichment> = match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "enrichment output was not a JSON array; keeping candidates unenriched");
                return candidates;
            }
        };

        let mut entries = entries.into_iter();
        candidates
            .into_iter()
            .map(|mut candidate| {
                candidate.enrichment = entries.next();
                candidate
            })
            .collect()
    }
}

/// One numbered prompt covering every topic, to bound cost and latency to a
/// single round trip.
fn build_prompt(candidates: &[Candidate]) -> String {
    let topics = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c.topic))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are helping a creator generate daily viral content ideas about AI and practical implementation.\n\
         For each topic below, return JSON array of objects with fields:\n\
         - hook: 1 short punchy hook line for a YouTube Short (<= 12 words)\n\
         - why_now: 1 sentence why this topic is trending/important\n\
         - implementation_angles: 3 bullet points (as strings) of high-ROI business use cases\n\
         \n\
         Topics:\n{topics}"
    )
}

#[cfg(test)]
mod tests {
    use super::build_prompt;
    use crate::types::Candidate;

    fn candidate(topic: &str) -> Candidate {
        Candidate {
            topic: topic.to_string(),
            url: "https://example.com".to_string(),
            source: "Hacker News".to_string(),
            score: 0,
            comments: None,
            enrichment: None,
        }
    }

    #[test]
    fn prompt_numbers_topics_from_one() {
        let prompt = build_prompt(&[candidate("First topic"), candidate("Second topic")]);
        assert!(prompt.contains("1. First topic"));
        assert!(prompt.contains("2. Second topic"));
        assert!(prompt.contains("implementation_angles"));
    }
}
