//! Fan-in merge: dedup, rank, truncate.

use std::collections::HashSet;

use crate::types::Candidate;

/// Collapse the concatenated adapter outputs into the final ranked list.
///
/// Dedups by exact `(topic, url)` pair with the first occurrence winning,
/// sorts descending by score (stable, so ties keep their concatenation
/// order), and truncates to `limit`.
#[must_use]
pub fn dedup_rank_truncate(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    candidates.retain(|c| seen.insert((c.topic.clone(), c.url.clone())));

    // Vec::sort_by is stable.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::dedup_rank_truncate;
    use crate::types::Candidate;

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
    fn dedup_keeps_earliest_copy_of_same_topic_url_pair() {
        let input = vec![
            candidate("Agent framework", "https://a", "Hacker News", 10),
            candidate("Agent framework", "https://a", "Reddit r/SaaS", 99),
            candidate("Agent framework", "https://b", "Reddit r/SaaS", 0),
        ];

        let out = dedup_rank_truncate(input, 20);

        // Same topic under a different URL is a different candidate.
        assert_eq!(out.len(), 2);
        let kept = out.iter().find(|c| c.url == "https://a").unwrap();
        assert_eq!(kept.source, "Hacker News");
        assert_eq!(kept.score, 10);
    }

    #[test]
    fn ranks_descending_by_score_with_stable_ties() {
        let input = vec![
            candidate("zero one", "https://z1", "Product Hunt", 0),
            candidate("high", "https://h", "Hacker News", 120),
            candidate("zero two", "https://z2", "Product Hunt", 0),
        ];

        let out = dedup_rank_truncate(input, 20);

        let scores: Vec<i64> = out.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![120, 0, 0]);
        // Zero-score ties preserve concatenation order.
        assert_eq!(out[1].topic, "zero one");
        assert_eq!(out[2].topic, "zero two");
    }

    #[test]
    fn truncates_to_limit() {
        let input: Vec<Candidate> = (0..30)
            .map(|i| candidate(&format!("t{i}"), &format!("https://u{i}"), "x", i))
            .collect();

        let out = dedup_rank_truncate(input, 20);
        assert_eq!(out.len(), 20);
        assert_eq!(out[0].score, 29);
    }

    #[test]
    fn output_is_min_of_limit_and_unique_count() {
        let input = vec![
            candidate("a", "https://a", "x", 1),
            candidate("a", "https://a", "x", 1),
            candidate("b", "https://b", "x", 2),
        ];

        let out = dedup_rank_truncate(input, 20);
        assert_eq!(out.len(), 2);
    }
}
