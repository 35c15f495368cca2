use std::cmp::Ordering;
use std::collections::HashMap;

use promptloom_taxonomy::Category;

use crate::concept::ParsedConcept;

/// Merge extractor outputs: deduplicate by (category, name) keeping the
/// higher confidence, then sort descending by confidence.
///
/// The sort is stable, so ties keep first-encounter order; later stages rely
/// on this ordering for reproducible candidate priority.
#[must_use]
pub fn dedupe_and_rank(concepts: Vec<ParsedConcept>) -> Vec<ParsedConcept> {
    let mut ranked: Vec<ParsedConcept> = Vec::with_capacity(concepts.len());
    let mut seen: HashMap<(Category, String), usize> = HashMap::new();

    for concept in concepts {
        let key = (concept.category, concept.name.clone());
        match seen.get(&key) {
            Some(&idx) => {
                if concept.confidence > ranked[idx].confidence {
                    ranked[idx] = concept;
                }
            }
            None => {
                seen.insert(key, ranked.len());
                ranked.push(concept);
            }
        }
    }

    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
