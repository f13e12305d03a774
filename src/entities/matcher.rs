//! Vocabulary matching / 词表匹配
//!
//! An entry matches when all of its words appear anywhere in the query.
//! Word order and adjacency are ignored, so "x ray table" also satisfies
//! the entry "x ray". Overlapping entries can therefore both match.

use std::collections::HashSet;

use crate::nlp::split_words;

/// Vocabulary entry paired with its word set / 词条及其词集合
#[derive(Debug, Clone)]
struct EntryWords<'a> {
    entry: &'a str,
    words: HashSet<String>,
}

fn entry_words(vocabulary: &[String]) -> Vec<EntryWords<'_>> {
    vocabulary
        .iter()
        .map(|entry| EntryWords {
            entry,
            words: split_words(entry).into_iter().collect(),
        })
        .collect()
}

/// Return every vocabulary entry whose words are a subset of the query tokens
///
/// Output follows vocabulary order with duplicates collapsed. Blank entries
/// never match.
pub fn exact_match_entity(tokens: &[String], vocabulary: &[String]) -> Vec<String> {
    let token_set: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let mut seen = HashSet::new();

    entry_words(vocabulary)
        .into_iter()
        .filter(|e| !e.words.is_empty() && e.words.is_subset(&token_set))
        .filter(|e| seen.insert(e.entry))
        .map(|e| e.entry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multi_word_subset_match() {
        let vocab = strings(&["x ray machine"]);
        let tokens = strings(&["need", "an", "x", "ray", "machine", "please"]);
        assert_eq!(exact_match_entity(&tokens, &vocab), vec!["x ray machine"]);
    }

    #[test]
    fn test_missing_word_no_match() {
        let vocab = strings(&["x ray machine"]);
        let tokens = strings(&["x", "machine"]);
        assert!(exact_match_entity(&tokens, &vocab).is_empty());
    }

    #[test]
    fn test_order_independent_and_case_insensitive() {
        let vocab = strings(&["X-Ray Machine", "Ultrasound"]);
        let tokens = strings(&["machine", "RAY", "x"]);
        assert_eq!(exact_match_entity(&tokens, &vocab), vec!["X-Ray Machine"]);
    }

    #[test]
    fn test_overlapping_entries_both_match() {
        let vocab = strings(&["x ray", "x ray table", "bed"]);
        let tokens = strings(&["x", "ray", "table"]);
        assert_eq!(exact_match_entity(&tokens, &vocab), vec!["x ray", "x ray table"]);
    }

    #[test]
    fn test_vocabulary_order_and_dedup() {
        let vocab = strings(&["Berlin", "Austin", "Berlin", "  "]);
        let tokens = strings(&["austin", "berlin"]);
        assert_eq!(exact_match_entity(&tokens, &vocab), vec!["Berlin", "Austin"]);
    }
}
