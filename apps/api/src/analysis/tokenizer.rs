//! Tokenizer — lowercases free text and splits it into candidate keyword tokens.
//!
//! No stemming, no lemmatization. Duplicates are kept so the keyword extractor
//! can count frequencies.

/// Characters treated as word separators in addition to whitespace.
const SEPARATORS: &[char] = &['\n', ',', '.', ';', ':', '(', ')', '[', ']', '/', '\\', '-'];

/// Tokens shorter than or equal to this many characters are dropped.
const MIN_TOKEN_LEN: usize = 2;

/// Common English function words plus resume boilerplate.
pub const STOPWORDS: &[&str] = &[
    "a",
    "an",
    "the",
    "and",
    "or",
    "in",
    "on",
    "at",
    "for",
    "with",
    "to",
    "from",
    "by",
    "is",
    "are",
    "be",
    "this",
    "that",
    "of",
    "as",
    "it",
    "will",
    "you",
    "your",
    "we",
    "our",
    "i",
    "me",
    "skills",
    "responsibilities",
    "experience",
    "years",
];

/// Returns true if `word` (already lowercase) is in the stopword table.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Lowercases a document for substring matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Splits text into lowercase tokens, dropping short tokens and stopwords.
pub fn tokenize(text: &str) -> Vec<String> {
    let spaced: String = text
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    spaced
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_LEN && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        let tokens = tokenize("Rust/Go, PostgreSQL; (Kafka)");
        assert_eq!(tokens, vec!["rust", "postgresql", "kafka"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("Go C# is ok but Rust wins");
        assert!(!tokens.contains(&"go".to_string()));
        assert!(!tokens.contains(&"c#".to_string()));
        assert!(tokens.contains(&"rust".to_string()));
        assert!(tokens.contains(&"but".to_string()));
    }

    #[test]
    fn test_tokenize_drops_boilerplate_stopwords() {
        let tokens = tokenize("Skills: Python. Experience: 3 years. Responsibilities include testing.");
        assert_eq!(tokens, vec!["python", "include", "testing"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        let tokens = tokenize("docker docker Docker");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_hyphen_and_backslash_are_separators() {
        let tokens = tokenize("low-level C\\Assembly");
        assert_eq!(tokens, vec!["low", "level", "assembly"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_symbols_outside_separator_set_are_kept() {
        // '+' and '#' are not separators, so "c++" survives as a token.
        let tokens = tokenize("Strong C++ background");
        assert!(tokens.contains(&"c++".to_string()));
    }
}
