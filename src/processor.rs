//! Query pipeline - raw text to a page of products / 查询处理流程
//!
//! raw query → tokens → entities → search request → rows → result
//!
//! Call direction: API → processor → (nlp, entities, catalog)

use crate::catalog::{fetch_products, Catalog, SearchRequest, SearchResult};
use crate::entities::{extract_entities, ExtractedEntities};
use crate::error::{QueryError, Result};
use crate::nlp::Normalizer;

/// Tracing target of the per-query audit log / 查询日志的 tracing target
pub const QUERY_LOG_TARGET: &str = "query_log";

/// Non-error results of a query / 查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found {
        query: String,
        entities: ExtractedEntities,
        result: SearchResult,
    },
    /// No known equipment name in the query / 未识别到设备
    EquipmentNotFound { entities: ExtractedEntities },
    /// Equipment identified but no product passed the filters / 无匹配商品
    NoProducts { entities: ExtractedEntities },
}

impl Outcome {
    pub fn entities(&self) -> &ExtractedEntities {
        match self {
            Outcome::Found { entities, .. }
            | Outcome::EquipmentNotFound { entities }
            | Outcome::NoProducts { entities } => entities,
        }
    }
}

/// Stateless query processor holding the read-only normalizer / 查询处理器
#[derive(Debug, Clone)]
pub struct QueryProcessor {
    normalizer: Normalizer,
}

impl QueryProcessor {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Tokenize and extract entities against the given vocabularies / 仅做实体提取
    pub fn understand(
        &self,
        query: &str,
        equipment_vocabulary: &[String],
        location_vocabulary: &[String],
    ) -> Result<ExtractedEntities> {
        if query.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        let tokens = self.normalizer.normalize(query);
        tracing::debug!("Query tokens: {:?}", tokens);
        Ok(extract_entities(&tokens, equipment_vocabulary, location_vocabulary))
    }

    /// Run the whole pipeline for one query / 执行完整查询
    ///
    /// `page >= 1` and `items_per_page > 0` must be validated by the caller.
    pub async fn process<C: Catalog + ?Sized>(
        &self,
        catalog: &C,
        query: &str,
        page: u32,
        items_per_page: u32,
    ) -> Result<Outcome> {
        if query.trim().is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let equipment_vocabulary = catalog.equipment_names().await?;
        let location_vocabulary = catalog.sales_areas().await?;
        let entities = self.understand(query, &equipment_vocabulary, &location_vocabulary)?;

        tracing::info!(
            target: QUERY_LOG_TARGET,
            "Query: {}, Entities: {}",
            query,
            serde_json::to_string(&entities).unwrap_or_default()
        );

        let Some(equipment) = entities.primary_equipment().map(str::to_string) else {
            return Ok(Outcome::EquipmentNotFound { entities });
        };

        let condition = entities.primary_condition();
        let request = SearchRequest::new(equipment)
            .location(entities.primary_location())
            .condition(condition.as_deref())
            .price(entities.price)
            .page(page, items_per_page);

        let result = fetch_products(catalog, &request).await?;
        if result.is_empty() {
            return Ok(Outcome::NoProducts { entities });
        }

        Ok(Outcome::Found {
            query: query.to_string(),
            entities,
            result,
        })
    }
}
