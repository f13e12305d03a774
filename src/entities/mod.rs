//! Query understanding - turns normalized tokens into search constraints / 查询理解
//!
//! - matcher: multi-word vocabulary subset matching
//! - price: price operator + value extraction
//! - extract: aggregation into [`ExtractedEntities`]

pub mod extract;
pub mod matcher;
pub mod price;
pub mod types;

pub use extract::extract_entities;
pub use matcher::exact_match_entity;
pub use price::{analyze_price_tokens, extract_price_info};
pub use types::{ExtractedEntities, PriceKind, PriceRange};
