//! Text normalization for free-text product queries / 查询文本处理
//!
//! - resources: stopword list + lemma exceptions, bundled or loaded from disk
//! - lemmatizer: noun lemmatization
//! - tokenizer: word splitting and the query normalizer

pub mod lemmatizer;
pub mod resources;
pub mod tokenizer;

use crate::error::Result;

pub use resources::LanguageResources;
pub use tokenizer::{split_words, Normalizer, PRICE_FUNCTION_WORDS};

/// Build a normalizer from an optional resource directory / 构建标准化器
///
/// An empty or missing directory setting selects the bundled English set.
pub fn build_normalizer(resource_dir: Option<&str>) -> Result<Normalizer> {
    let resources = match resource_dir.map(str::trim) {
        Some(dir) if !dir.is_empty() => LanguageResources::load_from_dir(dir)?,
        _ => LanguageResources::bundled_english(),
    };
    Ok(Normalizer::new(resources))
}
