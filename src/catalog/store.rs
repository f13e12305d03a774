//! Catalog storage - vocabulary + count + page lookups / 商品目录存储

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use super::builder::{build_count_query, build_page_query, SearchRequest, SqlValue, PRODUCTS_TABLE};
use super::product::ProductRow;
use crate::error::Result;

/// Storage collaborator of the query pipeline / 查询流程的存储接口
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Distinct equipment names / 设备名称词表
    async fn equipment_names(&self) -> Result<Vec<String>>;

    /// Distinct sales areas / 销售地区词表
    async fn sales_areas(&self) -> Result<Vec<String>>;

    /// Number of rows matching the request filters / 匹配总数
    async fn count(&self, request: &SearchRequest) -> Result<u64>;

    /// Rows of the requested page / 当前页数据
    async fn fetch_page(&self, request: &SearchRequest) -> Result<Vec<ProductRow>>;
}

/// Bind [`SqlValue`]s onto any sqlx query builder in order
macro_rules! bind_values {
    ($query:expr, $values:expr) => {{
        let mut query = $query;
        for value in $values {
            query = match value {
                SqlValue::String(s) => query.bind(s.clone()),
                SqlValue::Integer(i) => query.bind(*i),
                SqlValue::Float(f) => query.bind(*f),
            };
        }
        query
    }};
}

/// SQLite-backed catalog / 基于 SQLite 的商品目录
#[derive(Clone)]
pub struct SqliteCatalog {
    db: Pool<Sqlite>,
}

impl SqliteCatalog {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    /// Create the products table and its lookup indexes if missing / 初始化表结构
    pub async fn init(&self) -> Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                brand TEXT,
                model TEXT,
                category_id INTEGER,
                subcategory_id INTEGER,
                price TEXT,
                condition TEXT,
                year INTEGER,
                sales_area TEXT,
                created_at TEXT,
                image_url TEXT
            )
            "#,
            PRODUCTS_TABLE
        ))
        .execute(&self.db)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_products_name ON {}(name)",
            PRODUCTS_TABLE
        ))
        .execute(&self.db)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_products_sales_area ON {}(sales_area)",
            PRODUCTS_TABLE
        ))
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn distinct_values(&self, column: &str) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT DISTINCT {col} FROM {table} WHERE {col} IS NOT NULL AND TRIM({col}) != '' ORDER BY {col}",
            col = column,
            table = PRODUCTS_TABLE
        );
        let values = sqlx::query_scalar::<Sqlite, String>(&sql).fetch_all(&self.db).await?;
        Ok(values)
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn equipment_names(&self) -> Result<Vec<String>> {
        self.distinct_values("name").await
    }

    async fn sales_areas(&self) -> Result<Vec<String>> {
        self.distinct_values("sales_area").await
    }

    async fn count(&self, request: &SearchRequest) -> Result<u64> {
        let built = build_count_query(request);
        let total: i64 = bind_values!(sqlx::query_scalar::<Sqlite, i64>(&built.sql), &built.values)
            .fetch_one(&self.db)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn fetch_page(&self, request: &SearchRequest) -> Result<Vec<ProductRow>> {
        let built = build_page_query(request);
        tracing::debug!("Executing query: {} with {} parameters", built.sql, built.values.len());
        let rows = bind_values!(sqlx::query_as::<Sqlite, ProductRow>(&built.sql), &built.values)
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }
}
