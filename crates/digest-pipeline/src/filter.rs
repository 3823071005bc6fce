//! Keyword relevance filter applied to every candidate topic.

/// Domain vocabulary: a topic is kept when its lowercased text contains any
/// of these. Plain substring containment, no stemming or scoring.
pub const TOPIC_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "llm",
    "gpt",
    "openai",
    "claude",
    "gemini",
    "agent",
    "agents",
    "automation",
    "workflow",
    "copilot",
    "rag",
    "vector",
    "prompt",
    "deepfake",
    "voice",
    "speech",
    "video",
    "multimodal",
    "inference",
];

/// Returns `true` when the text mentions any configured keyword,
/// case-insensitively.
#[must_use]
pub fn is_relevant(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TOPIC_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}
