use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use medsearch_backend::catalog::SqliteCatalog;

/// Open the catalog database (WAL mode) and make sure the schema exists / 打开商品数据库
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await?;

    // WAL for concurrent readers / 启用WAL模式
    sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
    sqlx::query("PRAGMA busy_timeout=5000").execute(&pool).await?;

    SqliteCatalog::new(pool.clone()).init().await?;

    tracing::info!("Catalog database ready: {}", database_url);
    Ok(pool)
}
