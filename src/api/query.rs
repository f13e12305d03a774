use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use medsearch_backend::catalog::SearchResult;
use medsearch_backend::entities::ExtractedEntities;
use medsearch_backend::error::QueryError;
use medsearch_backend::processor::Outcome;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessQueryRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub items_per_page: Option<i64>,
}

/// Successful search body / 查询成功响应
#[derive(Debug, Serialize)]
pub struct ProcessQueryResponse {
    pub success: bool,
    pub query: String,
    pub entities: ExtractedEntities,
    #[serde(flatten)]
    pub result: SearchResult,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// Positive `u32` pagination argument / 校验分页参数
fn positive(value: Option<i64>, default: u32, field: &str) -> Result<u32, ApiError> {
    match value {
        None => Ok(default),
        Some(v) if v >= 1 => u32::try_from(v).map_err(|_| bad_request(&format!("{} is too large", field))),
        Some(_) => Err(bad_request(&format!("{} must be a positive integer", field))),
    }
}

fn query_error(err: QueryError) -> ApiError {
    match err {
        QueryError::EmptyQuery => bad_request("Query is required"),
        QueryError::TokenizerUnavailable { .. } => {
            tracing::error!("Tokenizer resources unavailable: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "Tokenizer resources unavailable",
                    "details": err.to_string(),
                })),
            )
        }
        QueryError::Storage(ref e) => {
            tracing::error!("Catalog query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "An unexpected error occurred",
                    "details": err.to_string(),
                })),
            )
        }
    }
}

/// POST /process_query - 自然语言商品搜索
pub async fn process_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessQueryRequest>,
) -> Result<Json<ProcessQueryResponse>, ApiError> {
    let query = req.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(bad_request("Query is required"));
    }
    let page = positive(req.page, 1, "page")?;
    let items_per_page = positive(req.items_per_page, state.default_items_per_page, "items_per_page")?;

    let processor = state.processor().map_err(query_error)?;
    let outcome = processor
        .process(state.catalog.as_ref(), &query, page, items_per_page)
        .await
        .map_err(query_error)?;

    match outcome {
        Outcome::Found { query, entities, result } => Ok(Json(ProcessQueryResponse {
            success: true,
            query,
            entities,
            result,
        })),
        Outcome::EquipmentNotFound { entities } => Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "Medical Equipment not found",
                "entities": entities,
            })),
        )),
        Outcome::NoProducts { entities } => Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "No products found matching the query",
                "entities": entities,
            })),
        )),
    }
}
