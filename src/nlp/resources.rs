//! Language resources for the normalizer / 分词语言资源
//!
//! Resources are plain text files:
//! - `stopwords.txt`: one stopword per line
//! - `lemma_exceptions.txt`: `inflected<TAB>base` per line, `#` starts a comment
//! - `nouns.txt`: known noun base forms, one per line
//!
//! An English set is bundled into the binary; a directory can override it.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{QueryError, Result};

pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const LEMMA_EXCEPTIONS_FILE: &str = "lemma_exceptions.txt";
pub const NOUN_LEXICON_FILE: &str = "nouns.txt";

const BUNDLED_STOPWORDS: &str = include_str!("../../resources/english/stopwords.txt");
const BUNDLED_LEMMA_EXCEPTIONS: &str = include_str!("../../resources/english/lemma_exceptions.txt");
const BUNDLED_NOUNS: &str = include_str!("../../resources/english/nouns.txt");

/// Immutable stopword set, lemma exception table and noun lexicon / 不可变的语言资源
#[derive(Debug, Clone, Default)]
pub struct LanguageResources {
    stopwords: HashSet<String>,
    lemma_exceptions: HashMap<String, String>,
    nouns: HashSet<String>,
}

impl LanguageResources {
    /// Build from raw file contents / 从文件内容构建
    pub fn from_sources(stopwords: &str, lemma_exceptions: &str, nouns: &str) -> Self {
        let stopwords = meaningful_lines(stopwords)
            .map(|line| line.to_lowercase())
            .collect();

        let lemma_exceptions = meaningful_lines(lemma_exceptions)
            .filter_map(|line| {
                let mut parts = line.split_whitespace();
                let inflected = parts.next()?;
                let base = parts.next()?;
                Some((inflected.to_lowercase(), base.to_lowercase()))
            })
            .collect();

        let nouns = meaningful_lines(nouns)
            .map(|line| line.to_lowercase())
            .collect();

        Self {
            stopwords,
            lemma_exceptions,
            nouns,
        }
    }

    /// English resources compiled into the binary / 内置英文资源
    pub fn bundled_english() -> Self {
        Self::from_sources(BUNDLED_STOPWORDS, BUNDLED_LEMMA_EXCEPTIONS, BUNDLED_NOUNS)
    }

    /// Load resources from a directory / 从目录加载资源
    ///
    /// Fails with [`QueryError::TokenizerUnavailable`] when the directory or
    /// any file is missing or unreadable.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(QueryError::TokenizerUnavailable {
                path: dir.to_path_buf(),
                reason: "resource directory not found".to_string(),
            });
        }

        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| QueryError::TokenizerUnavailable {
                path,
                reason: e.to_string(),
            })
        };

        let stopwords = read(STOPWORDS_FILE)?;
        let lemma_exceptions = read(LEMMA_EXCEPTIONS_FILE)?;
        let nouns = read(NOUN_LEXICON_FILE)?;
        let resources = Self::from_sources(&stopwords, &lemma_exceptions, &nouns);

        if resources.stopwords.is_empty() {
            return Err(QueryError::TokenizerUnavailable {
                path: dir.join(STOPWORDS_FILE),
                reason: "stopword list is empty".to_string(),
            });
        }

        tracing::info!(
            "Loaded language resources from {:?}: {} stopwords, {} lemma exceptions, {} nouns",
            dir,
            resources.stopwords.len(),
            resources.lemma_exceptions.len(),
            resources.nouns.len()
        );
        Ok(resources)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn lemma_exception(&self, token: &str) -> Option<&str> {
        self.lemma_exceptions.get(token).map(String::as_str)
    }

    /// Whether `token` is a known noun base form / 是否为已知名词
    pub fn is_noun(&self, token: &str) -> bool {
        self.nouns.contains(token)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

fn meaningful_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
