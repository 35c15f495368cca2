use promptloom_parser::ParsedConcept;
use promptloom_taxonomy::{Category, ConceptEntry, Taxonomy};

use crate::error::{EngineError, Result};

/// A concept promoted to a scored, textual enhancement fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementCandidate {
    pub category: Category,
    pub name: String,
    /// Originating extraction confidence.
    pub similarity: f32,
    pub brand_alignment: f32,
    pub text: String,
    pub weight: f32,
}

/// Map ranked concepts 1:1 onto enhancement candidates.
///
/// Initial weight is confidence x brand alignment; the dynamic adjuster may
/// rewrite it later.
pub(crate) fn build_candidates(
    taxonomy: &Taxonomy,
    ranked: &[ParsedConcept],
) -> Result<Vec<EnhancementCandidate>> {
    let mut candidates = Vec::with_capacity(ranked.len());
    for concept in ranked {
        let entry = taxonomy
            .lookup(concept.category, &concept.name)
            .ok_or_else(|| EngineError::UnknownConcept {
                category: concept.category,
                name: concept.name.clone(),
            })?;
        candidates.push(EnhancementCandidate {
            category: concept.category,
            name: concept.name.clone(),
            similarity: concept.confidence,
            brand_alignment: entry.alignment,
            text: enhancement_text(concept.category, entry),
            weight: concept.confidence * entry.alignment,
        });
    }
    Ok(candidates)
}

/// Synthetic baseline candidates, used when extraction found nothing.
///
/// Declared in the taxonomy defaults; similarity mirrors the fixed weight so
/// the candidates survive the similarity threshold.
pub(crate) fn default_candidates(taxonomy: &Taxonomy) -> Vec<EnhancementCandidate> {
    taxonomy
        .defaults()
        .candidates
        .iter()
        .map(|default| {
            let alignment = taxonomy
                .lookup(default.category, &default.name)
                .map_or_else(|| taxonomy.max_alignment(), |entry| entry.alignment);
            EnhancementCandidate {
                category: default.category,
                name: default.name.clone(),
                similarity: default.weight,
                brand_alignment: alignment,
                text: default.text.clone(),
                weight: default.weight,
            }
        })
        .collect()
}

/// Category-specific candidate text, built from a fixed slice of the
/// concept's evidence lists.
fn enhancement_text(category: Category, entry: &ConceptEntry) -> String {
    let parts: Vec<&str> = match category {
        Category::Style => take(&entry.cues, 3).chain(take(&entry.synonyms, 2)).collect(),
        Category::Mood => take(&entry.cues, 4).collect(),
        Category::Composition | Category::Subject => take(&entry.cues, 3).collect(),
        Category::Color => take(&entry.synonyms, 2).collect(),
        Category::Lighting => take(&entry.cues, 2).chain(take(&entry.mood_terms, 1)).collect(),
    };

    let mut text = parts.join(", ");
    if category == Category::Color {
        if let Some(hex) = entry.hex_values.first() {
            if !text.is_empty() {
                text.push_str(", ");
            }
            text.push_str(hex);
            text.push_str(" color palette");
        }
    }
    text
}

fn take(list: &[String], n: usize) -> impl Iterator<Item = &str> {
    list.iter().take(n).map(String::as_str)
}
