use serde::{Deserialize, Serialize};

/// Per-axis importance weights carried by style concepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisWeights {
    pub color: f32,
    pub composition: f32,
    pub mood: f32,
    pub lighting: f32,
}

impl AxisWeights {
    pub(crate) fn in_bounds(&self) -> bool {
        [self.color, self.composition, self.mood, self.lighting]
            .iter()
            .all(|w| (0.0..=1.0).contains(w))
    }
}

/// A single taxonomy concept: textual evidence lists plus its static
/// brand-alignment score.
///
/// `hex_values` is populated for color concepts and `mood_terms` for lighting
/// concepts; both default to empty everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEntry {
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub cues: Vec<String>,
    pub alignment: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<AxisWeights>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hex_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mood_terms: Vec<String>,
}

/// Human-readable form of a concept name, used for direct-mention matching.
///
/// Brand-prefixed names like `brand_green` match on their visible part
/// ("green"), and underscores become spaces (`natural_soft` -> "natural soft").
#[must_use]
pub fn normalized_name(name: &str) -> String {
    let trimmed = name.strip_prefix("brand_").unwrap_or(name);
    trimmed.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::normalized_name;

    #[test]
    fn normalizes_brand_prefix_and_underscores() {
        assert_eq!(normalized_name("brand_green"), "green");
        assert_eq!(normalized_name("natural_soft"), "natural soft");
        assert_eq!(normalized_name("lifestyle"), "lifestyle");
    }
}
