//! Product catalog lookups / 商品目录查询
//!
//! - builder: parameterized count + page queries
//! - store: [`Catalog`] trait and the SQLite implementation
//! - product / result: row shaping and pagination

mod builder;
mod product;
mod result;
mod store;

pub use builder::{
    build_count_query, build_filter, build_page_query, BuiltQuery, SearchRequest, SqlValue,
    PRODUCTS_TABLE,
};
pub use product::{format_created_at, ProductRecord, ProductRow, CREATED_AT_FORMAT};
pub use result::{total_pages, SearchResult};
pub use store::{Catalog, SqliteCatalog};

/// Run a request against a catalog and assemble the page / 执行查询并组装结果
pub async fn fetch_products<C: Catalog + ?Sized>(
    catalog: &C,
    request: &SearchRequest,
) -> crate::error::Result<SearchResult> {
    let total_results = catalog.count(request).await?;
    let rows = catalog.fetch_page(request).await?;
    Ok(SearchResult::assemble(
        rows,
        total_results,
        request.page,
        request.items_per_page,
    ))
}

#[cfg(test)]
pub(crate) mod tests;
