use promptloom_taxonomy::Category;
use serde::Deserialize;

/// Evidence bonuses and acceptance threshold for one category.
///
/// The defaults are empirically tuned; only their relative ordering
/// (direct > synonym > cue) is load-bearing for scoring behavior.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CategoryScoring {
    /// Added once when the concept's normalized name appears in the prompt.
    pub direct_bonus: f32,
    /// Added per synonym found as a substring of the prompt.
    pub synonym_bonus: f32,
    /// Added per cue phrase with at least one word in the token list.
    pub cue_partial_bonus: f32,
    /// Added instead when every word of the cue phrase is present.
    pub cue_full_bonus: f32,
    /// Minimum clamped score required to emit a concept.
    pub threshold: f32,
}

impl CategoryScoring {
    #[must_use]
    pub const fn new(
        direct_bonus: f32,
        synonym_bonus: f32,
        cue_partial_bonus: f32,
        cue_full_bonus: f32,
        threshold: f32,
    ) -> Self {
        Self {
            direct_bonus,
            synonym_bonus,
            cue_partial_bonus,
            cue_full_bonus,
            threshold,
        }
    }
}

impl Default for CategoryScoring {
    fn default() -> Self {
        Self::new(0.8, 0.6, 0.3, 0.3, 0.2)
    }
}

/// Per-category extraction parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub style: CategoryScoring,
    pub mood: CategoryScoring,
    pub composition: CategoryScoring,
    pub color: CategoryScoring,
    pub lighting: CategoryScoring,
    pub subject: CategoryScoring,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            style: CategoryScoring::new(0.8, 0.6, 0.3, 0.3, 0.2),
            mood: CategoryScoring::new(0.9, 0.6, 0.35, 0.35, 0.25),
            composition: CategoryScoring::new(0.8, 0.6, 0.35, 0.35, 0.2),
            color: CategoryScoring::new(0.9, 0.4, 0.3, 0.3, 0.2),
            lighting: CategoryScoring::new(0.8, 0.4, 0.3, 0.7, 0.2),
            subject: CategoryScoring::new(0.8, 0.6, 0.45, 0.45, 0.3),
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub fn for_category(&self, category: Category) -> &CategoryScoring {
        match category {
            Category::Style => &self.style,
            Category::Mood => &self.mood,
            Category::Composition => &self.composition,
            Category::Color => &self.color,
            Category::Lighting => &self.lighting,
            Category::Subject => &self.subject,
        }
    }
}
