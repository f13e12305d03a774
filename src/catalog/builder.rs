//! Parameterized catalog query construction / 参数化查询构建
//!
//! User-supplied values only ever reach SQL as bound `?` parameters.
//! The count query and the page query share one WHERE clause.

use crate::entities::PriceRange;

/// Catalog table / 商品表
pub const PRODUCTS_TABLE: &str = "products";

/// Projection of the page query, in [`super::ProductRow`] field order
const PRODUCT_COLUMNS: &str = "id, name, brand, model, category_id, subcategory_id, \
     CAST(price AS TEXT) AS price, condition, year, sales_area, \
     CAST(created_at AS TEXT) AS created_at, image_url";

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Filtered, paginated catalog lookup / 过滤与分页查询请求
///
/// Preconditions, validated by the caller: `page >= 1`, `items_per_page > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub equipment: String,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub price: PriceRange,
    pub page: u32,
    pub items_per_page: u32,
}

impl SearchRequest {
    pub fn new(equipment: impl Into<String>) -> Self {
        Self {
            equipment: equipment.into(),
            location: None,
            condition: None,
            price: PriceRange::None,
            page: 1,
            items_per_page: 12,
        }
    }

    pub fn location(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::to_string);
        self
    }

    pub fn condition(mut self, condition: Option<&str>) -> Self {
        self.condition = condition.map(str::to_string);
        self
    }

    pub fn price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn page(mut self, page: u32, items_per_page: u32) -> Self {
        self.page = page;
        self.items_per_page = items_per_page;
        self
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.items_per_page)
    }

    /// Row offset of the page; saturates far past any real table size
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)).saturating_mul(i64::from(self.items_per_page))
    }
}

/// SQL text with its bind values / SQL 语句及绑定参数
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Escape LIKE wildcards so the value matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Case-insensitive substring predicate (SQLite LIKE folds ASCII case)
fn contains_clause(column: &str, value: &str, parts: &mut Vec<String>, values: &mut Vec<SqlValue>) {
    parts.push(format!("{} LIKE ? ESCAPE '\\'", column));
    values.push(SqlValue::String(format!("%{}%", escape_like(value))));
}

/// Build the shared WHERE clause (without the keyword) / 构建 WHERE 子句
pub fn build_filter(request: &SearchRequest) -> BuiltQuery {
    let mut parts = Vec::new();
    let mut values = Vec::new();

    contains_clause("name", &request.equipment, &mut parts, &mut values);

    if let Some(location) = &request.location {
        contains_clause("sales_area", location, &mut parts, &mut values);
    }

    if let Some(condition) = request.condition.as_deref().filter(|c| !c.is_empty()) {
        contains_clause("condition", condition, &mut parts, &mut values);
    }

    match request.price {
        PriceRange::None => {}
        PriceRange::Between { from, to } => {
            parts.push("CAST(price AS REAL) BETWEEN ? AND ?".to_string());
            values.push(SqlValue::Float(from));
            values.push(SqlValue::Float(to));
        }
        PriceRange::Under { to } => {
            parts.push("CAST(price AS REAL) <= ?".to_string());
            values.push(SqlValue::Float(to));
        }
        PriceRange::Above { from } => {
            parts.push("CAST(price AS REAL) >= ?".to_string());
            values.push(SqlValue::Float(from));
        }
    }

    BuiltQuery {
        sql: parts.join(" AND "),
        values,
    }
}

/// `SELECT COUNT(*)` over the shared filter / 计数查询
pub fn build_count_query(request: &SearchRequest) -> BuiltQuery {
    let filter = build_filter(request);
    BuiltQuery {
        sql: format!("SELECT COUNT(*) FROM {} WHERE {}", PRODUCTS_TABLE, filter.sql),
        values: filter.values,
    }
}

/// Page query: shared filter + `LIMIT ? OFFSET ?` / 分页查询
pub fn build_page_query(request: &SearchRequest) -> BuiltQuery {
    let filter = build_filter(request);
    let mut values = filter.values;
    values.push(SqlValue::Integer(request.limit()));
    values.push(SqlValue::Integer(request.offset()));

    BuiltQuery {
        sql: format!(
            "SELECT {} FROM {} WHERE {} ORDER BY id LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS, PRODUCTS_TABLE, filter.sql
        ),
        values,
    }
}
