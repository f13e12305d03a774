//! Paginated result assembly / 分页结果组装

use serde::Serialize;

use super::product::{ProductRecord, ProductRow};

/// `ceil(total_results / items_per_page)`, zero when nothing can be paged
pub fn total_pages(total_results: u64, items_per_page: u32) -> u64 {
    let per_page = u64::from(items_per_page);
    if per_page == 0 {
        return 0;
    }
    total_results.div_ceil(per_page)
}

/// One page of products plus pagination metadata / 一页商品及分页信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub products: Vec<ProductRecord>,
    pub total_results: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub items_per_page: u32,
}

impl SearchResult {
    pub fn assemble(rows: Vec<ProductRow>, total_results: u64, page: u32, items_per_page: u32) -> Self {
        Self {
            products: rows.into_iter().map(ProductRecord::from).collect(),
            total_results,
            total_pages: total_pages(total_results, items_per_page),
            current_page: page,
            items_per_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
