//! Catalog rows and response records / 商品行与响应记录

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

/// Output format of the creation timestamp
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw row of the products table / 商品表原始行
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub price: Option<String>,
    pub condition: Option<String>,
    pub year: Option<i64>,
    pub sales_area: Option<String>,
    pub created_at: Option<String>,
    pub image_url: Option<String>,
}

/// Product as returned to clients / 返回给客户端的商品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "Product_ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Brand")]
    pub brand: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "CategoryId")]
    pub category_id: Option<i64>,
    #[serde(rename = "SubcategoryId")]
    pub subcategory_id: Option<i64>,
    #[serde(rename = "Price")]
    pub price: Option<String>,
    #[serde(rename = "Condition")]
    pub condition: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<i64>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "Created_At")]
    pub created_at: Option<String>,
    #[serde(rename = "Image_URL")]
    pub image_url: Option<String>,
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            brand: row.brand,
            model: row.model,
            category_id: row.category_id,
            subcategory_id: row.subcategory_id,
            price: row.price,
            condition: row.condition,
            year: row.year,
            location: row.sales_area,
            created_at: row.created_at.map(|raw| format_created_at(&raw)),
            image_url: row.image_url,
        }
    }
}

/// Reformat a stored timestamp, or pass it through when it is not a date/time
///
/// Accepts RFC 3339 and SQLite's `YYYY-MM-DD HH:MM:SS[.fff]` / `T` variants.
pub fn format_created_at(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format(CREATED_AT_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(CREATED_AT_FORMAT).to_string();
        }
    }

    raw.to_string()
}
