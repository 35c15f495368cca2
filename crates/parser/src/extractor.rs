use promptloom_taxonomy::{normalized_name, Category, ConceptEntry, Taxonomy};

use crate::concept::ParsedConcept;
use crate::scoring::{CategoryScoring, ScoringConfig};
use crate::tokenizer::context_window;

/// Scans a prompt against the taxonomy and emits scored concept matches.
///
/// Extraction is read-only and infallible: an empty result is the normal
/// "nothing matched" outcome, never an error. Categories are independent, so
/// per-category extraction may run in any order with identical results.
pub struct ConceptExtractor {
    scoring: ScoringConfig,
}

impl ConceptExtractor {
    #[must_use]
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    /// Run every category extractor and concatenate the matches.
    #[must_use]
    pub fn extract_all(
        &self,
        taxonomy: &Taxonomy,
        prompt: &str,
        tokens: &[String],
    ) -> Vec<ParsedConcept> {
        let mut concepts = Vec::new();
        for category in Category::ALL {
            concepts.extend(self.extract(taxonomy, category, prompt, tokens));
        }
        log::debug!("extracted {} concept matches from prompt", concepts.len());
        concepts
    }

    /// Extract matches for a single category.
    #[must_use]
    pub fn extract(
        &self,
        taxonomy: &Taxonomy,
        category: Category,
        prompt: &str,
        tokens: &[String],
    ) -> Vec<ParsedConcept> {
        let lowered = prompt.to_lowercase();
        let scoring = self.scoring.for_category(category);

        let mut concepts = Vec::new();
        for (name, entry) in taxonomy.concepts(category) {
            if let Some(concept) =
                score_concept(category, name, entry, scoring, prompt, &lowered, tokens)
            {
                concepts.push(concept);
            }
        }
        concepts
    }
}

fn score_concept(
    category: Category,
    name: &str,
    entry: &ConceptEntry,
    scoring: &CategoryScoring,
    prompt: &str,
    lowered: &str,
    tokens: &[String],
) -> Option<ParsedConcept> {
    let mut score = 0.0f32;
    let mut matched: Vec<String> = Vec::new();

    let display = normalized_name(name);
    if lowered.contains(&display) {
        score += scoring.direct_bonus;
        matched.push(display.clone());
    }

    // Multiple synonym hits compound, rewarding richer textual evidence.
    // Lighting mood terms count as synonym-strength evidence.
    for synonym in entry.synonyms.iter().chain(entry.mood_terms.iter()) {
        if lowered.contains(&synonym.to_lowercase()) {
            score += scoring.synonym_bonus;
            matched.push(synonym.clone());
        }
    }

    for cue in &entry.cues {
        let words: Vec<String> = cue
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            continue;
        }
        let hits = words
            .iter()
            .filter(|word| tokens.contains(word))
            .count();
        if hits == words.len() {
            score += scoring.cue_full_bonus;
            matched.push(cue.clone());
        } else if hits > 0 {
            score += scoring.cue_partial_bonus;
            matched.push(cue.clone());
        }
    }

    let confidence = score.min(1.0);
    if confidence <= scoring.threshold {
        return None;
    }

    let first_term = matched.first().map_or_else(|| display.clone(), Clone::clone);
    // Character offset, not byte offset, so non-ASCII prefixes do not skew it.
    let position = lowered
        .find(&first_term.to_lowercase())
        .map_or(0, |byte| lowered[..byte].chars().count());

    Some(ParsedConcept {
        category,
        name: name.to_string(),
        confidence,
        matched_text: matched.join(", "),
        position,
        context_tokens: context_window(prompt, &first_term),
    })
}
