use std::collections::{HashMap, HashSet};

use crate::models::RemedyRecord;
use crate::text::normalize_name;

/// Remedies present in both the disease-driven and the ingredient-driven
/// result sets.
///
/// Identity intersection first: a lookup keyed by normalized name over
/// `remedies_for_disease`, walked in `remedies_using_ingredients` order, and
/// the **disease-side** record is the one emitted. When no identity matches
/// and the query carries ingredient tokens, the coverage fallback recovers
/// disease rows whose preparation text mentions every token — the case where
/// a disease's remedy exists only as inline free text rather than a
/// catalogued, separately matched remedy.
#[must_use]
pub fn intersect_remedies(
    remedies_for_disease: &[RemedyRecord],
    remedies_using_ingredients: &[RemedyRecord],
    query_ingredients: &[String],
) -> Vec<RemedyRecord> {
    let by_name: HashMap<String, &RemedyRecord> = remedies_for_disease
        .iter()
        .map(|remedy| (normalize_name(&remedy.name), remedy))
        .collect();

    let mut seen = HashSet::<String>::new();
    let mut identity = Vec::<RemedyRecord>::new();
    for candidate in remedies_using_ingredients {
        let key = normalize_name(&candidate.name);
        if let Some(disease_side) = by_name.get(&key)
            && seen.insert(key)
        {
            identity.push((*disease_side).clone());
        }
    }
    if !identity.is_empty() {
        return identity;
    }
    if query_ingredients.is_empty() {
        return identity;
    }

    let mut fallback = Vec::<RemedyRecord>::new();
    let mut emitted = HashSet::<String>::new();
    for remedy in remedies_for_disease {
        if covers_all_tokens(&remedy.preparation, query_ingredients)
            && emitted.insert(normalize_name(&remedy.name))
        {
            fallback.push(remedy.clone());
        }
    }
    fallback
}

/// True when every ingredient token occurs in the preparation text as a
/// case-insensitive substring. An empty token list never matches.
fn covers_all_tokens(preparation: &str, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return false;
    }
    let haystack = preparation.to_lowercase();
    tokens
        .iter()
        .all(|token| haystack.contains(&token.trim().to_lowercase()))
}
