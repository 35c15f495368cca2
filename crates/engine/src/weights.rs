use promptloom_parser::ParsedConcept;
use promptloom_taxonomy::{normalized_name, Taxonomy};

use crate::candidate::EnhancementCandidate;
use crate::config::WeightBoosts;

/// Rewrite candidate weights with relatedness and alignment boosts plus the
/// conflict penalty.
///
/// Each multiplier applies at most once to the original weight; the combined
/// result is clamped to [0, 1]. Candidate order is untouched.
pub(crate) fn apply_dynamic_weights(
    candidates: &mut [EnhancementCandidate],
    concepts: &[ParsedConcept],
    taxonomy: &Taxonomy,
    boosts: &WeightBoosts,
) {
    let names: Vec<String> = candidates.iter().map(|c| c.name.clone()).collect();

    for (idx, candidate) in candidates.iter_mut().enumerate() {
        let mut weight = candidate.weight;

        let related_sources = concepts
            .iter()
            .filter(|concept| is_related(taxonomy, concept, candidate))
            .count();
        if related_sources >= boosts.related_min_sources {
            weight *= boosts.related;
        }

        if candidate.brand_alignment > boosts.alignment_floor {
            weight *= boosts.alignment;
        }

        let conflicted = names
            .iter()
            .enumerate()
            .any(|(other, name)| other != idx && taxonomy.is_conflicting(&candidate.name, name));
        if conflicted {
            weight *= boosts.conflict_penalty;
        }

        candidate.weight = weight.min(1.0);
    }
}

/// A concept is related to a candidate when it names the same taxonomy entry
/// or when its evidence lists mention the candidate's name.
fn is_related(
    taxonomy: &Taxonomy,
    concept: &ParsedConcept,
    candidate: &EnhancementCandidate,
) -> bool {
    if concept.category == candidate.category && concept.name == candidate.name {
        return true;
    }

    let needle = normalized_name(&candidate.name);
    let Some(entry) = taxonomy.lookup(concept.category, &concept.name) else {
        return false;
    };
    entry
        .synonyms
        .iter()
        .chain(entry.cues.iter())
        .chain(entry.mood_terms.iter())
        .any(|term| term.to_lowercase().contains(&needle))
}
