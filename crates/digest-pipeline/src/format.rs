//! Renders the final ranked list into the digest document.

use chrono::Utc;
use chrono_tz::Tz;

use crate::sources::hacker_news;
use crate::types::Candidate;

/// Today's `YYYY-MM-DD` stamp in the configured timezone.
#[must_use]
pub fn day_stamp(timezone: Tz) -> String {
    Utc::now()
        .with_timezone(&timezone)
        .format("%Y-%m-%d")
        .to_string()
}

/// Deterministic digest title for a given day stamp.
#[must_use]
pub fn digest_title(day: &str) -> String {
    format!("Viral Ideas — {day}")
}

/// Render the numbered digest body.
///
/// Pure: no side effects, no failure mode. Hacker News entries always get a
/// "points · comments" metrics line; other sources get a bare score line only
/// when the score is positive.
#[must_use]
pub fn render_digest(candidates: &[Candidate], day: &str, timezone: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Viral Ideas — {day} ({timezone})"));
    lines.push(String::new());
    lines.push("Sources: Hacker News, Reddit, Google Trends, Product Hunt (AI-filtered).".to_string());
    lines.push(String::new());

    for (i, candidate) in candidates.iter().enumerate() {
        lines.push(format!("{}) {}", i + 1, candidate.topic));

        if candidate.source == hacker_news::SOURCE_LABEL {
            lines.push(format!(
                "   Score: {} points · {} comments",
                candidate.score,
                candidate.comments.unwrap_or(0)
            ));
        } else if candidate.score > 0 {
            lines.push(format!("   Score: {}", candidate.score));
        }

        if let Some(enrichment) = &candidate.enrichment {
            if let Some(hook) = &enrichment.hook {
                lines.push(format!("   Hook: {hook}"));
            }
            if let Some(why_now) = &enrichment.why_now {
                lines.push(format!("   Why now: {why_now}"));
            }
            if !enrichment.angles.is_empty() {
                lines.push("   Implementation angles:".to_string());
                for angle in &enrichment.angles {
                    lines.push(format!("   - {angle}"));
                }
            }
        }

        lines.push(format!("   Source: {}", candidate.source));
        lines.push(format!("   Link: {}", candidate.url));
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{digest_title, render_digest};
    use crate::types::{Candidate, Enrichment};

    fn candidate(topic: &str, url: &str, source: &str, score: i64) -> Candidate {
        Candidate {
            topic: topic.to_string(),
            url: url.to_string(),
            source: source.to_string(),
            score,
            comments: None,
            enrichment: None,
        }
    }

    #[test]
    fn title_carries_day_stamp() {
        assert_eq!(digest_title("2024-06-01"), "Viral Ideas — 2024-06-01");
    }

    #[test]
    fn renders_example_scenario_in_rank_order() {
        let mut news = candidate(
            "New agent framework released",
            "https://a",
            "Hacker News",
            120,
        );
        news.comments = Some(14);
        let community = candidate("AI automation tips", "https://b", "Reddit r/SaaS", 0);

        let body = render_digest(&[news, community], "2024-06-01", "Australia/Melbourne");

        assert!(body.starts_with("Viral Ideas — 2024-06-01 (Australia/Melbourne)"));
        assert!(body.contains("1) New agent framework released"));
        assert!(body.contains("   Score: 120 points · 14 comments"));
        assert!(body.contains("2) AI automation tips"));
        assert!(body.contains("   Link: https://b"));
        // Zero score on a non-news source gets no score line.
        assert!(!body.contains("   Score: 0\n"));
    }

    #[test]
    fn positive_score_on_non_news_source_gets_bare_score_line() {
        let c = candidate("Trending AI query", "https://t", "Google Trends (US daily)", 7);
        let body = render_digest(&[c], "2024-06-01", "UTC");
        assert!(body.contains("   Score: 7\n"));
        assert!(!body.contains("comments"));
    }

    #[test]
    fn enrichment_lines_render_when_present() {
        let mut c = candidate("AI automation tips", "https://b", "Reddit r/SaaS", 0);
        c.enrichment = Some(Enrichment {
            hook: Some("Automate the boring half of your job".to_string()),
            why_now: Some("Agent tooling just got cheap.".to_string()),
            angles: vec!["Client onboarding".to_string(), "Report drafting".to_string()],
        });

        let body = render_digest(&[c], "2024-06-01", "UTC");

        assert!(body.contains("   Hook: Automate the boring half of your job"));
        assert!(body.contains("   Why now: Agent tooling just got cheap."));
        assert!(body.contains("   Implementation angles:"));
        assert!(body.contains("   - Client onboarding"));
        assert!(body.contains("   - Report drafting"));
    }

    #[test]
    fn empty_candidate_list_still_renders_header() {
        let body = render_digest(&[], "2024-06-01", "UTC");
        assert!(body.starts_with("Viral Ideas — 2024-06-01 (UTC)"));
        assert!(body.contains("Sources: Hacker News, Reddit, Google Trends, Product Hunt"));
    }
}
