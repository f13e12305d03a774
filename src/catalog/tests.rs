use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::*;
use crate::entities::PriceRange;

/// Single-connection in-memory catalog with seeded products
pub(crate) async fn seeded_catalog() -> SqliteCatalog {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let catalog = SqliteCatalog::new(pool.clone());
    catalog.init().await.unwrap();
    seed(&pool).await;
    catalog
}

async fn insert(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    price: &str,
    condition: &str,
    area: &str,
    created_at: &str,
) {
    sqlx::query(
        "INSERT INTO products (id, name, brand, model, category_id, subcategory_id, price, condition, year, sales_area, created_at, image_url) \
         VALUES (?, ?, 'Acme', 'M1', 1, 2, ?, ?, 2020, ?, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(price)
    .bind(condition)
    .bind(area)
    .bind(created_at)
    .bind(format!("/images/{}.png", id))
    .execute(pool)
    .await
    .unwrap();
}

/// 25 MRI scanners priced 1000..=25000 (ids 1-10 in Berlin, rest in Madrid,
/// odd ids used), one x-ray machine in Austin, one ultrasound in Berlin.
async fn seed(pool: &SqlitePool) {
    for i in 1..=25 {
        let condition = if i % 2 == 1 { "used" } else { "new" };
        let area = if i <= 10 { "Berlin" } else { "Madrid" };
        insert(
            pool,
            i,
            "MRI Scanner",
            &format!("{}.00", i * 1000),
            condition,
            area,
            &format!("2024-01-{:02} 10:00:00", i),
        )
        .await;
    }
    insert(pool, 26, "X-Ray Machine", "4500", "used", "Austin", "2023-06-01T08:30:00Z").await;
    insert(pool, 27, "Ultrasound", "800.50", "new", "Berlin", "not a date").await;
}

// ==================== Builder ====================

#[test]
fn test_page_offset_and_limit() {
    let request = SearchRequest::new("scanner").page(2, 10);
    assert_eq!(request.offset(), 10);
    assert_eq!(request.limit(), 10);

    let page = build_page_query(&request);
    assert_eq!(
        page.values,
        vec![
            SqlValue::String("%scanner%".to_string()),
            SqlValue::Integer(10),
            SqlValue::Integer(10),
        ]
    );
    assert!(page.sql.ends_with("LIMIT ? OFFSET ?"));
}

#[test]
fn test_offset_saturates() {
    let request = SearchRequest::new("x").page(u32::MAX, u32::MAX);
    assert_eq!(request.offset(), i64::MAX);
    assert_eq!(request.limit(), i64::from(u32::MAX));
}

#[test]
fn test_count_shares_every_predicate() {
    let request = SearchRequest::new("scanner")
        .location(Some("Berlin"))
        .condition(Some("used"))
        .price(PriceRange::between(100.0, 300.0))
        .page(3, 5);

    let filter = build_filter(&request);
    let count = build_count_query(&request);
    let page = build_page_query(&request);

    assert_eq!(count.sql, format!("SELECT COUNT(*) FROM products WHERE {}", filter.sql));
    assert!(page.sql.contains(&format!("WHERE {} ORDER BY", filter.sql)));
    assert!(!count.sql.contains("LIMIT"));
    assert_eq!(count.values, filter.values);
    assert_eq!(&page.values[..page.values.len() - 2], &count.values[..]);
    assert_eq!(
        count.values,
        vec![
            SqlValue::String("%scanner%".to_string()),
            SqlValue::String("%Berlin%".to_string()),
            SqlValue::String("%used%".to_string()),
            SqlValue::Float(100.0),
            SqlValue::Float(300.0),
        ]
    );
}

#[test]
fn test_price_predicates() {
    let under = build_filter(&SearchRequest::new("x").price(PriceRange::Under { to: 50.0 }));
    assert!(under.sql.ends_with("CAST(price AS REAL) <= ?"));
    assert_eq!(under.values[1], SqlValue::Float(50.0));

    let above = build_filter(&SearchRequest::new("x").price(PriceRange::Above { from: 75.0 }));
    assert!(above.sql.ends_with("CAST(price AS REAL) >= ?"));
    assert_eq!(above.values[1], SqlValue::Float(75.0));

    let none = build_filter(&SearchRequest::new("x"));
    assert!(!none.sql.contains("price"));
    assert_eq!(none.values.len(), 1);
}

#[test]
fn test_empty_condition_is_ignored() {
    let filter = build_filter(&SearchRequest::new("x").condition(Some("")));
    assert!(!filter.sql.contains("condition"));
}

#[test]
fn test_values_are_never_interpolated() {
    let hostile = "'; DROP TABLE products; --";
    let request = SearchRequest::new(hostile).location(Some(hostile));
    for built in [build_count_query(&request), build_page_query(&request)] {
        assert!(!built.sql.contains("DROP"));
        assert!(built.values.contains(&SqlValue::String(format!("%{}%", hostile))));
    }
}

#[test]
fn test_like_wildcards_escaped() {
    let filter = build_filter(&SearchRequest::new("50%_off\\"));
    assert_eq!(filter.values[0], SqlValue::String("%50\\%\\_off\\\\%".to_string()));
}

// ==================== SQLite store ====================

#[tokio::test]
async fn test_vocabularies() {
    let catalog = seeded_catalog().await;
    assert_eq!(
        catalog.equipment_names().await.unwrap(),
        vec!["MRI Scanner", "Ultrasound", "X-Ray Machine"]
    );
    assert_eq!(catalog.sales_areas().await.unwrap(), vec!["Austin", "Berlin", "Madrid"]);
}

#[tokio::test]
async fn test_count_with_filters() {
    let catalog = seeded_catalog().await;

    let all = SearchRequest::new("mri scanner");
    assert_eq!(catalog.count(&all).await.unwrap(), 25);

    let berlin = SearchRequest::new("MRI Scanner").location(Some("berlin"));
    assert_eq!(catalog.count(&berlin).await.unwrap(), 10);

    let used_berlin = berlin.clone().condition(Some("used"));
    assert_eq!(catalog.count(&used_berlin).await.unwrap(), 5);

    let under = all.clone().price(PriceRange::Under { to: 5000.0 });
    assert_eq!(catalog.count(&under).await.unwrap(), 5);

    let between = all.clone().price(PriceRange::between(6000.0, 3000.0));
    assert_eq!(catalog.count(&between).await.unwrap(), 4);

    let above = all.price(PriceRange::Above { from: 20000.0 });
    assert_eq!(catalog.count(&above).await.unwrap(), 6);
}

#[tokio::test]
async fn test_injection_attempt_matches_nothing() {
    let catalog = seeded_catalog().await;
    let request = SearchRequest::new("%' OR 1=1 --");
    assert_eq!(catalog.count(&request).await.unwrap(), 0);
    assert!(catalog.fetch_page(&request).await.unwrap().is_empty());
    assert_eq!(catalog.equipment_names().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_fetch_products_pagination() {
    let catalog = seeded_catalog().await;

    let first = fetch_products(&catalog, &SearchRequest::new("scanner").page(1, 12))
        .await
        .unwrap();
    assert_eq!(first.total_results, 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.products.len(), 12);
    assert_eq!(first.products[0].id, 1);

    let last = fetch_products(&catalog, &SearchRequest::new("scanner").page(3, 12))
        .await
        .unwrap();
    assert_eq!(last.products.len(), 1);
    assert_eq!(last.products[0].id, 25);
    assert_eq!(last.current_page, 3);

    let exact = fetch_products(&catalog, &SearchRequest::new("scanner").page(1, 5))
        .await
        .unwrap();
    assert_eq!(exact.total_pages, 5);

    let beyond = fetch_products(&catalog, &SearchRequest::new("scanner").page(9, 12))
        .await
        .unwrap();
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_results, 25);

    let far = fetch_products(&catalog, &SearchRequest::new("scanner").page(u32::MAX, u32::MAX))
        .await
        .unwrap();
    assert!(far.is_empty());
    assert_eq!(far.current_page, u32::MAX);
}

#[tokio::test]
async fn test_fetch_products_shapes_rows() {
    let catalog = seeded_catalog().await;

    let xray = fetch_products(&catalog, &SearchRequest::new("x-ray")).await.unwrap();
    assert_eq!(xray.products.len(), 1);
    let record = &xray.products[0];
    assert_eq!(record.name, "X-Ray Machine");
    assert_eq!(record.price.as_deref(), Some("4500"));
    assert_eq!(record.location.as_deref(), Some("Austin"));
    assert_eq!(record.created_at.as_deref(), Some("2023-06-01 08:30:00"));
    assert_eq!(record.image_url.as_deref(), Some("/images/26.png"));
    assert_eq!(record.year, Some(2020));

    let ultrasound = fetch_products(&catalog, &SearchRequest::new("ultrasound")).await.unwrap();
    assert_eq!(ultrasound.products[0].created_at.as_deref(), Some("not a date"));
    assert_eq!(ultrasound.products[0].price.as_deref(), Some("800.50"));
}

#[tokio::test]
async fn test_fetch_products_idempotent() {
    let catalog = seeded_catalog().await;
    let request = SearchRequest::new("scanner")
        .location(Some("Madrid"))
        .price(PriceRange::Above { from: 12000.0 })
        .page(2, 4);
    let a = fetch_products(&catalog, &request).await.unwrap();
    let b = fetch_products(&catalog, &request).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total_results, 14);
    assert_eq!(a.total_pages, 4);
}
