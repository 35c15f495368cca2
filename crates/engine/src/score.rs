use promptloom_parser::ParsedConcept;
use promptloom_taxonomy::Taxonomy;

use crate::candidate::EnhancementCandidate;

const NO_CONCEPT_ALIGNMENT: f32 = 0.7;
const UNKNOWN_CONCEPT_ALIGNMENT: f32 = 0.5;
const EMPTY_LIST_CONFIDENCE: f32 = 0.5;

/// Mean taxonomy alignment over all parsed concepts.
pub(crate) fn brand_alignment_score(taxonomy: &Taxonomy, concepts: &[ParsedConcept]) -> f32 {
    if concepts.is_empty() {
        return NO_CONCEPT_ALIGNMENT;
    }

    let total: f32 = concepts
        .iter()
        .map(|concept| {
            taxonomy
                .lookup(concept.category, &concept.name)
                .map_or(UNKNOWN_CONCEPT_ALIGNMENT, |entry| entry.alignment)
        })
        .sum();
    total / concepts.len() as f32
}

/// Average of two sub-averages: mean concept confidence and mean selected
/// weight, each defaulting to 0.5 when its list is empty.
pub(crate) fn confidence_score(
    concepts: &[ParsedConcept],
    selected: &[EnhancementCandidate],
) -> f32 {
    let concept_confidence = mean(concepts.iter().map(|c| c.confidence));
    let selection_confidence = mean(selected.iter().map(|c| c.weight));
    (concept_confidence + selection_confidence) / 2.0
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let mut total = 0.0f32;
    let mut count = 0usize;
    for value in values {
        total += value;
        count += 1;
    }
    if count == 0 {
        EMPTY_LIST_CONFIDENCE
    } else {
        total / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptloom_taxonomy::Category;

    fn concept(category: Category, name: &str, confidence: f32) -> ParsedConcept {
        ParsedConcept {
            category,
            name: name.to_string(),
            confidence,
            matched_text: name.to_string(),
            position: 0,
            context_tokens: Vec::new(),
        }
    }

    fn candidate(weight: f32) -> EnhancementCandidate {
        EnhancementCandidate {
            category: Category::Style,
            name: "lifestyle".to_string(),
            similarity: weight,
            brand_alignment: 0.95,
            text: String::new(),
            weight,
        }
    }

    #[test]
    fn alignment_averages_taxonomy_scores() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let concepts = vec![
            concept(Category::Style, "lifestyle", 0.8),
            concept(Category::Color, "brand_pink", 0.4),
        ];
        let score = brand_alignment_score(&taxonomy, &concepts);
        assert!((score - (0.95 + 0.8) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn alignment_defaults_without_concepts() {
        let taxonomy = Taxonomy::builtin().unwrap();
        assert_eq!(brand_alignment_score(&taxonomy, &[]), 0.7);
    }

    #[test]
    fn unknown_concepts_score_neutral_alignment() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let score =
            brand_alignment_score(&taxonomy, &[concept(Category::Style, "noir", 0.8)]);
        assert_eq!(score, 0.5);
    }

    #[test]
    fn confidence_mixes_both_sub_averages() {
        let concepts = vec![concept(Category::Style, "lifestyle", 0.8)];
        let selected = vec![candidate(0.6), candidate(0.4)];
        let score = confidence_score(&concepts, &selected);
        assert!((score - (0.8 + 0.5) / 2.0).abs() < 1e-6);
    }

    #[test]
    fn empty_lists_fall_back_to_half() {
        assert_eq!(confidence_score(&[], &[]), 0.5);
    }
}
