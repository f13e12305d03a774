//! Noun lemmatizer / 名词词形还原
//!
//! Irregular forms come from the resource exception table. Regular plurals
//! go through suffix rules, and a candidate is only accepted when the noun
//! lexicon knows it. A token with no known base form is returned unchanged,
//! so proper names like "texas" or "los angeles" survive intact.

use super::resources::LanguageResources;

/// Noun detachment rules: (inflected suffix, base suffix)
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Reduce a lower-case token to its base form / 还原为词根形式
pub fn lemmatize(token: &str, resources: &LanguageResources) -> String {
    if token.chars().any(|c| c.is_ascii_digit()) || !token.is_ascii() {
        return token.to_string();
    }

    if let Some(base) = resources.lemma_exception(token) {
        return base.to_string();
    }

    // Shortest known form wins: "glasses" -> "glass", not "glasses"
    let mut best: Option<String> = resources.is_noun(token).then(|| token.to_string());
    for (suffix, replacement) in NOUN_SUFFIX_RULES {
        let Some(stem) = token.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        let candidate = format!("{}{}", stem, replacement);
        if resources.is_noun(&candidate)
            && best.as_ref().map_or(true, |b| candidate.len() < b.len())
        {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| token.to_string())
}
