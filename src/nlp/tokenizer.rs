//! Query normalizer / 查询标准化
//!
//! Pipeline: lowercase → UAX#29 word bounds → drop stopwords (price words
//! survive) → lemmatize.

use unicode_segmentation::UnicodeSegmentation;

use super::lemmatizer::lemmatize;
use super::resources::LanguageResources;

/// Function words the price extractor depends on; never removed as stopwords
pub const PRICE_FUNCTION_WORDS: &[&str] = &["below", "above", "under", "over", "between", "from", "to"];

/// Split text into lower-case word tokens without any filtering / 简单分词
///
/// A `$` directly in front of a number stays attached to it ("$1,200").
pub fn split_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut segments = lower.split_word_bounds().peekable();
    let mut tokens = Vec::new();

    while let Some(segment) = segments.next() {
        if segment == "$" {
            let next_is_number = segments
                .peek()
                .and_then(|next| next.chars().next())
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false);
            if next_is_number {
                if let Some(number) = segments.next() {
                    tokens.push(format!("${}", number));
                }
            }
            continue;
        }

        let word = strip_possessive(segment);
        if word.chars().any(char::is_alphanumeric) {
            tokens.push(word.to_string());
        }
    }

    tokens
}

/// Drop a possessive `'s` (or a dangling apostrophe) that word bounds keep attached
fn strip_possessive(segment: &str) -> &str {
    for suffix in ["'s", "\u{2019}s", "'", "\u{2019}"] {
        if let Some(stem) = segment.strip_suffix(suffix) {
            return stem;
        }
    }
    segment
}

/// Query normalizer built from explicit language resources / 查询标准化器
#[derive(Debug, Clone)]
pub struct Normalizer {
    resources: LanguageResources,
}

impl Normalizer {
    pub fn new(resources: LanguageResources) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Turn a raw query into ordered, normalized tokens / 标准化查询
    pub fn normalize(&self, query: &str) -> Vec<String> {
        split_words(query)
            .into_iter()
            .filter(|token| {
                PRICE_FUNCTION_WORDS.contains(&token.as_str()) || !self.resources.is_stopword(token)
            })
            .map(|token| lemmatize(&token, &self.resources))
            .collect()
    }
}
