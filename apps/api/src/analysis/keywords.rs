//! Keyword extraction — ranks tokens by frequency and keeps the top N.

use std::collections::HashMap;

use crate::analysis::tokenizer::{normalize, tokenize};

/// Ordered, distinct, lowercase keywords. Most frequent first; ties keep first-seen order.
pub type KeywordList = Vec<String>;

/// Extracts the `top_n` most frequent tokens from `text`.
///
/// Frequencies are recorded in first-seen order and sorted with a stable sort,
/// so equally frequent tokens keep the order in which they first appeared.
pub fn extract_keywords(text: &str, top_n: usize) -> KeywordList {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(top_n).map(|(kw, _)| kw).collect()
}

/// Lowercases a caller-supplied keyword list, dropping blanks and repeats.
pub fn normalize_keywords(keywords: &[String]) -> KeywordList {
    let mut out: KeywordList = Vec::with_capacity(keywords.len());
    for kw in keywords {
        let kw = normalize(kw.trim());
        if !kw.is_empty() && !out.contains(&kw) {
            out.push(kw);
        }
    }
    out
}
