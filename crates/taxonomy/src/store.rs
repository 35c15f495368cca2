use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::category::Category;
use crate::concept::ConceptEntry;

const BUILTIN_GREEN_BRAND: &str = include_str!("../../../taxonomies/green_brand.json");

pub type Result<T> = std::result::Result<T, TaxonomyError>;

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("taxonomy schema_version {0} is not supported (expected 1)")]
    UnsupportedSchema(u32),

    #[error("concept {category}/{name}: {field} {value} is outside [0, 1]")]
    ScoreOutOfRange {
        category: Category,
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("default candidate references unknown concept {category}/{name}")]
    UnknownDefault { category: Category, name: String },

    #[error("invalid conflict pair ({0:?}, {1:?})")]
    InvalidConflict(String, String),
}

/// A synthetic enhancement injected when extraction finds no concepts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefaultCandidate {
    pub category: Category,
    pub name: String,
    pub weight: f32,
    pub text: String,
}

/// Domain baseline texts: fallback enhancement, negative-prompt base and
/// per-concept negative additions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxonomyDefaults {
    pub candidates: Vec<DefaultCandidate>,
    pub fallback_text: String,
    pub base_negative: String,
    #[serde(default)]
    pub negative_additions: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTaxonomy {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(default)]
    name: Option<String>,
    categories: BTreeMap<Category, BTreeMap<String, ConceptEntry>>,
    #[serde(default)]
    conflicts: Vec<(String, String)>,
    defaults: TaxonomyDefaults,
}

/// Immutable domain taxonomy: category tables, conflict pairs and defaults.
///
/// Loaded and validated once, then shared read-only (typically behind an
/// `Arc`) across concurrent enhancement calls.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    name: String,
    categories: BTreeMap<Category, BTreeMap<String, ConceptEntry>>,
    conflicts: Vec<(String, String)>,
    defaults: TaxonomyDefaults,
}

impl Taxonomy {
    /// Parse and validate a taxonomy from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawTaxonomy = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Load a taxonomy from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The built-in green-brand taxonomy shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_GREEN_BRAND)
    }

    fn from_raw(raw: RawTaxonomy) -> Result<Self> {
        if let Some(version) = raw.schema_version {
            if version != 1 {
                return Err(TaxonomyError::UnsupportedSchema(version));
            }
        }

        let taxonomy = Self {
            name: raw.name.unwrap_or_else(|| "default".to_string()),
            categories: raw.categories,
            conflicts: raw.conflicts,
            defaults: raw.defaults,
        };
        taxonomy.validate()?;

        log::debug!(
            "loaded taxonomy '{}' with {} concepts across {} categories",
            taxonomy.name,
            taxonomy
                .categories
                .values()
                .map(BTreeMap::len)
                .sum::<usize>(),
            taxonomy.categories.len()
        );
        Ok(taxonomy)
    }

    fn validate(&self) -> Result<()> {
        for (&category, entries) in &self.categories {
            for (name, entry) in entries {
                check_score(category, name, "alignment", entry.alignment)?;
                if let Some(weights) = &entry.weights {
                    if !weights.in_bounds() {
                        return Err(TaxonomyError::ScoreOutOfRange {
                            category,
                            name: name.clone(),
                            field: "weights",
                            value: weights.color,
                        });
                    }
                }
            }
        }

        for candidate in &self.defaults.candidates {
            let known = self
                .lookup(candidate.category, &candidate.name)
                .is_some();
            if !known {
                return Err(TaxonomyError::UnknownDefault {
                    category: candidate.category,
                    name: candidate.name.clone(),
                });
            }
            check_score(
                candidate.category,
                &candidate.name,
                "default weight",
                candidate.weight,
            )?;
        }

        for (a, b) in &self.conflicts {
            if a.is_empty() || b.is_empty() || a == b {
                return Err(TaxonomyError::InvalidConflict(a.clone(), b.clone()));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate the concepts of one category in stable (name) order.
    pub fn concepts(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&str, &ConceptEntry)> {
        self.categories
            .get(&category)
            .into_iter()
            .flatten()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    #[must_use]
    pub fn lookup(&self, category: Category, name: &str) -> Option<&ConceptEntry> {
        self.categories.get(&category)?.get(name)
    }

    #[must_use]
    pub fn conflicts(&self) -> &[(String, String)] {
        &self.conflicts
    }

    /// Conflict pairs are category-agnostic and symmetric.
    #[must_use]
    pub fn is_conflicting(&self, a: &str, b: &str) -> bool {
        self.conflicts
            .iter()
            .any(|(first, second)| (a == first && b == second) || (a == second && b == first))
    }

    #[must_use]
    pub fn defaults(&self) -> &TaxonomyDefaults {
        &self.defaults
    }

    /// Highest brand-alignment score present anywhere in the taxonomy.
    #[must_use]
    pub fn max_alignment(&self) -> f32 {
        self.categories
            .values()
            .flat_map(BTreeMap::values)
            .map(|entry| entry.alignment)
            .fold(0.0, f32::max)
    }
}

fn check_score(category: Category, name: &str, field: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TaxonomyError::ScoreOutOfRange {
            category,
            name: name.to_string(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal(alignment: f32) -> String {
        format!(
            r#"{{
                "categories": {{
                    "style": {{
                        "lifestyle": {{
                            "synonyms": ["casual"],
                            "cues": ["soft natural lighting"],
                            "alignment": {alignment}
                        }}
                    }}
                }},
                "defaults": {{
                    "candidates": [
                        {{"category": "style", "name": "lifestyle", "weight": 0.8, "text": "baseline"}}
                    ],
                    "fallback_text": "baseline styling",
                    "base_negative": "low quality"
                }}
            }}"#
        )
    }

    #[test]
    fn builtin_taxonomy_parses_and_validates() {
        let taxonomy = Taxonomy::builtin().unwrap();
        assert_eq!(taxonomy.name(), "green_brand");
        assert!(taxonomy.lookup(Category::Style, "lifestyle").is_some());
        assert!(taxonomy.lookup(Category::Color, "brand_green").is_some());
        assert!(taxonomy.is_conflicting("corporate", "lifestyle"));
        assert!(taxonomy.is_conflicting("lifestyle", "corporate"));
        assert!(!taxonomy.is_conflicting("lifestyle", "hopeful"));
        assert_eq!(taxonomy.max_alignment(), 1.0);
        assert_eq!(taxonomy.defaults().candidates.len(), 2);
    }

    #[test]
    fn rejects_alignment_out_of_bounds() {
        let err = Taxonomy::from_json_str(&minimal(1.4)).unwrap_err();
        assert!(matches!(err, TaxonomyError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn rejects_axis_weights_out_of_bounds() {
        let json = minimal(0.9).replace(
            "\"alignment\": 0.9",
            "\"alignment\": 0.9, \"weights\": {\"color\": 1.5, \"composition\": 0.5, \"mood\": 0.5, \"lighting\": 0.5}",
        );
        let err = Taxonomy::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            TaxonomyError::ScoreOutOfRange { field: "weights", .. }
        ));
    }

    #[test]
    fn rejects_unknown_default_candidate() {
        let json = minimal(0.9).replace("\"name\": \"lifestyle\"", "\"name\": \"missing\"");
        let err = Taxonomy::from_json_str(&json).unwrap_err();
        assert!(matches!(err, TaxonomyError::UnknownDefault { .. }));
    }

    #[test]
    fn rejects_self_conflict_pairs() {
        let json = minimal(0.9).replace(
            "\"defaults\"",
            "\"conflicts\": [[\"lifestyle\", \"lifestyle\"]], \"defaults\"",
        );
        let err = Taxonomy::from_json_str(&json).unwrap_err();
        assert!(matches!(err, TaxonomyError::InvalidConflict(_, _)));
    }

    #[test]
    fn rejects_unsupported_schema_version() {
        let json = minimal(0.9).replace("\"categories\"", "\"schema_version\": 2, \"categories\"");
        let err = Taxonomy::from_json_str(&json).unwrap_err();
        assert!(matches!(err, TaxonomyError::UnsupportedSchema(2)));
    }

    #[test]
    fn concepts_iterate_in_name_order() {
        let taxonomy = Taxonomy::builtin().unwrap();
        let names: Vec<&str> = taxonomy
            .concepts(Category::Style)
            .map(|(name, _)| name)
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
