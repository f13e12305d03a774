//! Price constraint extraction / 价格约束提取
//!
//! Single left-to-right pass. The latest operator word wins and every token
//! that parses as a number (after dropping `$` and `,`) is collected.
//! A number with no operator at all means "at most this price".

use super::types::{PriceKind, PriceRange};

fn operator_for(token: &str) -> Option<PriceKind> {
    match token {
        "below" | "under" | "less" => Some(PriceKind::Under),
        "above" | "over" | "greater" => Some(PriceKind::Above),
        "between" | "from" => Some(PriceKind::Between),
        _ => None,
    }
}

fn parse_number(token: &str) -> Option<f64> {
    let cleaned: String = token.chars().filter(|c| *c != '$' && *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Scan tokens for the price operator and numeric values / 扫描价格运算符与数值
pub fn analyze_price_tokens(tokens: &[String]) -> (PriceKind, Vec<f64>) {
    let mut operator = PriceKind::None;
    let mut numbers = Vec::new();

    for token in tokens {
        let token = token.to_lowercase();
        if let Some(op) = operator_for(&token) {
            operator = op;
        }
        if let Some(number) = parse_number(&token) {
            numbers.push(number);
        }
    }

    if !numbers.is_empty() && operator == PriceKind::None {
        operator = PriceKind::Under;
    }

    (operator, numbers)
}

/// Derive the price range of a token sequence / 提取价格区间
///
/// Never fails. `between` with fewer than two numbers falls back to `under`
/// on the first number.
pub fn extract_price_info(tokens: &[String]) -> PriceRange {
    let (operator, numbers) = analyze_price_tokens(tokens);

    let Some(&first) = numbers.first() else {
        return PriceRange::None;
    };

    match (operator, numbers.get(1)) {
        (PriceKind::Between, Some(&second)) => PriceRange::between(first, second),
        (PriceKind::Above, _) => PriceRange::Above { from: first },
        _ => PriceRange::Under { to: first },
    }
}
