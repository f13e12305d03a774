//! Entity aggregation / 实体汇总

use std::collections::HashSet;

use super::matcher::exact_match_entity;
use super::price::extract_price_info;
use super::types::ExtractedEntities;
use crate::nlp::split_words;

const CONDITION_WORDS: &[&str] = &["used", "new"];

/// Words that belong to price phrasing and never count as unmatched
const PRICE_VOCABULARY: &[&str] = &[
    "$", "price", "from", "to", "between", "and", "over", "above", "under", "below",
];

/// Combine vocabulary matches, condition, price and leftovers / 汇总所有实体
///
/// An empty `equipment` list is a valid result; callers decide what it means.
pub fn extract_entities(
    tokens: &[String],
    equipment_vocabulary: &[String],
    location_vocabulary: &[String],
) -> ExtractedEntities {
    let equipment = exact_match_entity(tokens, equipment_vocabulary);
    let location = exact_match_entity(tokens, location_vocabulary);
    let condition: Vec<String> = tokens
        .iter()
        .filter(|t| CONDITION_WORDS.contains(&t.to_lowercase().as_str()))
        .cloned()
        .collect();
    let price = extract_price_info(tokens);
    let location_missing = location.is_empty();

    let consumed: HashSet<String> = equipment
        .iter()
        .chain(location.iter())
        .chain(condition.iter())
        .flat_map(|matched| split_words(matched))
        .collect();

    let other = tokens
        .iter()
        .filter(|token| {
            let lower = token.to_lowercase();
            !consumed.contains(&lower)
                && !PRICE_VOCABULARY.contains(&lower.as_str())
                && !lower.chars().any(|c| c.is_ascii_digit())
        })
        .cloned()
        .collect();

    ExtractedEntities {
        equipment,
        location,
        condition,
        price,
        other,
        location_missing,
    }
}
