//! Match scoring — measures how many JD keywords a document already mentions.
//!
//! Matching is plain substring containment on the lowercased document, so
//! "java" matches inside "javascript". That is the intended behavior of the
//! heuristic, not a tokenizer bug.

use crate::analysis::tokenizer::normalize;

/// Percentage (0–100) of `keywords` found anywhere in `document`.
///
/// Returns 0 when `keywords` is empty.
pub fn compute_score(document: &str, keywords: &[String]) -> u32 {
    if keywords.is_empty() {
        return 0;
    }

    let doc = normalize(document);
    let found = keywords.iter().filter(|kw| doc.contains(kw.as_str())).count();

    ((found as f64 / keywords.len() as f64) * 100.0).round() as u32
}

/// Keywords absent from `document`, in keyword order, capped at `limit`.
pub fn missing_keywords(document: &str, keywords: &[String], limit: usize) -> Vec<String> {
    let doc = normalize(document);
    keywords
        .iter()
        .filter(|kw| !doc.contains(kw.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_keywords_scores_zero() {
        assert_eq!(compute_score("anything at all", &[]), 0);
        assert_eq!(compute_score("", &[]), 0);
    }

    #[test]
    fn test_full_match_scores_100() {
        let score = compute_score("Built services in Rust and Docker", &kws(&["rust", "docker"]));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_partial_match_rounds() {
        // 1 of 3 → 33.33 → 33
        assert_eq!(compute_score("rust only", &kws(&["rust", "kafka", "redis"])), 33);
        // 2 of 3 → 66.67 → 67
        assert_eq!(compute_score("rust and kafka", &kws(&["rust", "kafka", "redis"])), 67);
    }

    #[test]
    fn test_substring_matches_inside_words() {
        assert_eq!(compute_score("JavaScript developer", &kws(&["java"])), 100);
    }

    #[test]
    fn test_document_is_case_folded() {
        assert_eq!(compute_score("KUBERNETES", &kws(&["kubernetes"])), 100);
    }

    #[test]
    fn test_missing_keywords_respects_limit_and_order() {
        let missing = missing_keywords(
            "rust",
            &kws(&["rust", "kafka", "redis", "grpc"]),
            2,
        );
        assert_eq!(missing, vec!["kafka", "redis"]);
    }

    #[test]
    fn test_missing_keywords_none_missing() {
        assert!(missing_keywords("Rust and Kafka", &kws(&["rust", "kafka"]), 8).is_empty());
    }

    proptest! {
        #[test]
        fn score_is_bounded(doc in "\\PC{0,200}", words in proptest::collection::vec("[a-z]{3,8}", 0..20)) {
            prop_assert!(compute_score(&doc, &words) <= 100);
        }

        #[test]
        fn extending_document_never_lowers_score(
            doc in "[a-z ]{0,100}",
            words in proptest::collection::vec("[a-z]{3,8}", 1..15),
            extra in 0usize..15,
        ) {
            let before = compute_score(&doc, &words);
            let added: Vec<&str> = words.iter().take(extra).map(String::as_str).collect();
            let extended = format!("{doc} {}", added.join(" "));
            prop_assert!(compute_score(&extended, &words) >= before);
        }
    }
}
