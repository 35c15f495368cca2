use promptloom_parser::ParsedConcept;
use promptloom_taxonomy::Taxonomy;

use crate::candidate::EnhancementCandidate;

/// Append the selected candidates' text to the original prompt.
///
/// Enhancements are strictly appended: the result always starts with the
/// original prompt verbatim. With nothing selected, the taxonomy's fallback
/// phrase is appended instead.
pub(crate) fn build_enhanced_prompt(
    taxonomy: &Taxonomy,
    original: &str,
    selected: &[EnhancementCandidate],
) -> String {
    let texts: Vec<&str> = selected
        .iter()
        .map(|candidate| candidate.text.as_str())
        .filter(|text| !text.trim().is_empty())
        .collect();

    if texts.is_empty() {
        format!("{original}, {}", taxonomy.defaults().fallback_text)
    } else {
        format!("{original}, {}", texts.join(", "))
    }
}

/// Combine the base negative phrase with per-concept additions.
///
/// Additions iterate in taxonomy (BTreeMap) order, keeping output
/// deterministic for a fixed concept set.
pub(crate) fn build_negative_prompt(taxonomy: &Taxonomy, concepts: &[ParsedConcept]) -> String {
    let defaults = taxonomy.defaults();
    let mut extras: Vec<&str> = Vec::new();
    for (name, additions) in &defaults.negative_additions {
        if concepts.iter().any(|concept| concept.name == *name) {
            extras.extend(additions.iter().map(String::as_str));
        }
    }

    if extras.is_empty() {
        defaults.base_negative.clone()
    } else {
        format!("{}, {}", defaults.base_negative, extras.join(", "))
    }
}
