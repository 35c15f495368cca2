use promptloom_parser::ScoringConfig;
use serde::Deserialize;

/// Dynamic weight-adjustment multipliers.
///
/// All adjustments are multiplicative over the candidate's original weight
/// and independent of each other; the result is clamped to [0, 1].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeightBoosts {
    /// Applied when at least `related_min_sources` parsed concepts point at
    /// the same or a related candidate.
    pub related: f32,
    pub related_min_sources: usize,
    /// Applied when brand alignment exceeds `alignment_floor`.
    pub alignment: f32,
    pub alignment_floor: f32,
    /// Applied when any other candidate in the set conflicts with this one.
    pub conflict_penalty: f32,
}

impl Default for WeightBoosts {
    fn default() -> Self {
        Self {
            related: 1.3,
            related_min_sources: 2,
            alignment: 1.2,
            alignment_floor: 0.8,
            conflict_penalty: 0.8,
        }
    }
}

/// Engine construction-time configuration.
///
/// Each pipeline stage is individually toggleable; a disabled stage becomes a
/// pass-through (disabled conflict resolution simply truncates to
/// `max_enhancements`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub enable_semantic_parsing: bool,
    pub enable_dynamic_weighting: bool,
    pub enable_conflict_resolution: bool,
    /// Candidates below this similarity (originating confidence) are dropped.
    pub similarity_threshold: f32,
    /// Hard cap on selected enhancements.
    pub max_enhancements: usize,
    pub boosts: WeightBoosts,
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enable_semantic_parsing: true,
            enable_dynamic_weighting: true,
            enable_conflict_resolution: true,
            similarity_threshold: 0.3,
            max_enhancements: 8,
            boosts: WeightBoosts::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_enable_every_stage() {
        let config = EngineConfig::default();
        assert!(config.enable_semantic_parsing);
        assert!(config.enable_dynamic_weighting);
        assert!(config.enable_conflict_resolution);
        assert_eq!(config.max_enhancements, 8);
    }

    #[test]
    fn partial_json_overrides_keep_remaining_defaults() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"max_enhancements": 2, "boosts": {"related": 1.5}}"#,
        )
        .unwrap();
        assert_eq!(config.max_enhancements, 2);
        assert_eq!(config.boosts.related, 1.5);
        assert_eq!(config.boosts.conflict_penalty, 0.8);
        assert!(config.enable_conflict_resolution);
    }
}
