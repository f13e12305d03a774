use std::path::PathBuf;
use std::sync::Arc;

use medsearch_backend::catalog::Catalog;
use medsearch_backend::error::QueryError;
use medsearch_backend::nlp::Normalizer;
use medsearch_backend::processor::QueryProcessor;

/// Why the normalizer could not be built at startup / 分词资源加载失败原因
#[derive(Debug, Clone)]
struct ResourceFailure {
    path: PathBuf,
    reason: String,
}

pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    processor: Result<QueryProcessor, ResourceFailure>,
    /// Page size used when the request omits it / 默认每页条数
    pub default_items_per_page: u32,
}

impl AppState {
    /// A failed normalizer does not stop the server; every query reports it instead
    pub fn new(
        catalog: Arc<dyn Catalog>,
        normalizer: Result<Normalizer, QueryError>,
        default_items_per_page: u32,
    ) -> Self {
        let processor = match normalizer {
            Ok(normalizer) => Ok(QueryProcessor::new(normalizer)),
            Err(QueryError::TokenizerUnavailable { path, reason }) => {
                Err(ResourceFailure { path, reason })
            }
            Err(other) => Err(ResourceFailure {
                path: PathBuf::new(),
                reason: other.to_string(),
            }),
        };

        Self {
            catalog,
            processor,
            default_items_per_page,
        }
    }

    pub fn processor(&self) -> Result<&QueryProcessor, QueryError> {
        self.processor
            .as_ref()
            .map_err(|failure| QueryError::TokenizerUnavailable {
                path: failure.path.clone(),
                reason: failure.reason.clone(),
            })
    }
}
