use chrono_tz::Tz;
use serde::Deserialize;

use crate::sources::SourceEndpoints;

const DEFAULT_LIMIT: usize = 20;
const DEFAULT_TIMEZONE: &str = "Australia/Melbourne";

/// One prospective trending topic, normalized from whichever source produced it.
///
/// Identity for dedup is the exact `(topic, url)` pair. Candidates are value
/// objects: once built they are only ever modified to attach [`Enrichment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Source-provided title or headline.
    pub topic: String,
    /// Canonical link back to the source item.
    pub url: String,
    /// Human-readable origin label, e.g. "Hacker News" or "Reddit r/SaaS".
    pub source: String,
    /// Source-native popularity signal; 0 when the source has none.
    pub score: i64,
    /// Secondary signal, only meaningful for the news-ranking source.
    pub comments: Option<i64>,
    /// Attached by the enrichment stage; absent when it is disabled or failed.
    pub enrichment: Option<Enrichment>,
}

/// Hook/angle material for one candidate, as returned by the generative
/// service. Deserialized straight from one entry of its JSON array output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Enrichment {
    /// Short punchy hook line.
    pub hook: Option<String>,
    /// One sentence on why the topic is trending.
    pub why_now: Option<String>,
    /// High-ROI business use cases.
    #[serde(default, rename = "implementation_angles")]
    pub angles: Vec<String>,
}

/// Configuration for one digest run, read once at process start.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Email of the owner account the digest is filed under.
    pub owner_email: String,
    /// Maximum number of candidates kept after ranking.
    pub limit: usize,
    /// IANA timezone used for the day stamp in the digest title.
    pub timezone: Tz,
    /// When absent, the enrichment stage is a no-op.
    pub openai_api_key: Option<String>,
    /// Source feed URLs; overridable for tests.
    pub endpoints: SourceEndpoints,
}

impl DigestConfig {
    /// Build config from environment variables.
    ///
    /// `DIGEST_OWNER_EMAIL` is required. `VIRAL_IDEAS_LIMIT` defaults to 20,
    /// `DIGEST_TIMEZONE` to Australia/Melbourne, and `OPENAI_API_KEY` is
    /// optional — leaving it unset disables enrichment.
    ///
    /// # Errors
    ///
    /// Returns an error string if the owner email is missing, or if the limit
    /// or timezone values are present but unparsable.
    pub fn from_env() -> Result<Self, String> {
        let owner_email =
            std::env::var("DIGEST_OWNER_EMAIL").map_err(|_| "missing DIGEST_OWNER_EMAIL")?;

        let limit = match std::env::var("VIRAL_IDEAS_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("invalid VIRAL_IDEAS_LIMIT '{raw}'"))?,
            Err(_) => DEFAULT_LIMIT,
        };

        let tz_name =
            std::env::var("DIGEST_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = tz_name
            .parse::<Tz>()
            .map_err(|_| format!("invalid DIGEST_TIMEZONE '{tz_name}'"))?;

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Self {
            owner_email,
            limit,
            timezone,
            openai_api_key,
            endpoints: SourceEndpoints::default(),
        })
    }
}
