//! Query pipeline errors / 查询流程错误
//!
//! Only terminal failures live here. "No equipment identified" and
//! "no products matched" are structured outcomes, see [`crate::processor::Outcome`].

use std::path::PathBuf;

/// Terminal failure of a query / 查询的终止性错误
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Missing or blank query string / 查询为空
    #[error("query is required")]
    EmptyQuery,

    /// Language resources for the normalizer are not installed / 分词资源缺失
    #[error("tokenizer resources unavailable at {path:?}: {reason}")]
    TokenizerUnavailable { path: PathBuf, reason: String },

    /// Catalog connection or query execution failure / 目录存储失败
    #[error("catalog storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;
