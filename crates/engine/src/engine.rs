use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use promptloom_parser::{dedupe_and_rank, tokenize, ConceptExtractor, ParsedConcept};
use promptloom_taxonomy::{Category, Taxonomy, TaxonomyError};

use crate::assemble::{build_enhanced_prompt, build_negative_prompt};
use crate::candidate::{build_candidates, default_candidates, EnhancementCandidate};
use crate::config::EngineConfig;
use crate::conflict::resolve_conflicts;
use crate::error::{EngineError, Result};
use crate::result::{
    DomainContext, EnhancedPromptResult, EnhancementDetail, EnhancementMetadata,
};
use crate::score::{brand_alignment_score, confidence_score};
use crate::weights::apply_dynamic_weights;

const FALLBACK_WEIGHT: f32 = 0.7;
const FALLBACK_ALIGNMENT_SCORE: f32 = 0.8;
const FALLBACK_CONFIDENCE_SCORE: f32 = 0.6;

/// The weighted prompt-enhancement engine.
///
/// Each call is a pure pipeline over an immutable taxonomy snapshot:
/// tokenize, extract per category, rank, build candidates, adjust weights,
/// resolve conflicts, assemble and score. The engine holds no per-call state,
/// so concurrent calls need no coordination.
pub struct Engine {
    taxonomy: Arc<Taxonomy>,
    config: EngineConfig,
    extractor: ConceptExtractor,
}

impl Engine {
    #[must_use]
    pub fn new(taxonomy: Arc<Taxonomy>, config: EngineConfig) -> Self {
        let extractor = ConceptExtractor::new(config.scoring.clone());
        Self {
            taxonomy,
            config,
            extractor,
        }
    }

    /// Construct an engine over the built-in taxonomy.
    pub fn with_builtin(config: EngineConfig) -> std::result::Result<Self, TaxonomyError> {
        Ok(Self::new(Arc::new(Taxonomy::builtin()?), config))
    }

    #[must_use]
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Enhance a prompt. Infallible by contract: any internal pipeline error
    /// is logged and converted into the default fallback result.
    #[must_use]
    pub fn enhance(
        &self,
        prompt: &str,
        context: Option<&DomainContext>,
    ) -> EnhancedPromptResult {
        let started = Instant::now();
        match self.run(prompt, context, started) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("enhancement failed, using fallback: {err}");
                self.fallback_result(prompt, context, started)
            }
        }
    }

    fn run(
        &self,
        prompt: &str,
        context: Option<&DomainContext>,
        started: Instant,
    ) -> Result<EnhancedPromptResult> {
        if prompt.trim().is_empty() {
            return Err(EngineError::EmptyPrompt);
        }

        let tokens = tokenize(prompt);
        let concepts = if self.config.enable_semantic_parsing {
            dedupe_and_rank(self.extractor.extract_all(&self.taxonomy, prompt, &tokens))
        } else {
            Vec::new()
        };
        log::debug!("{} ranked concepts for prompt", concepts.len());

        // Synthetic baseline candidates guarantee a non-empty selection when
        // extraction finds nothing; they bypass the similarity filter.
        let fallback_used = concepts.is_empty();
        let mut candidates = if fallback_used {
            default_candidates(&self.taxonomy)
        } else {
            let mut built = build_candidates(&self.taxonomy, &concepts)?;
            built.retain(|c| c.similarity >= self.config.similarity_threshold);
            built
        };
        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        if self.config.enable_dynamic_weighting {
            apply_dynamic_weights(
                &mut candidates,
                &concepts,
                &self.taxonomy,
                &self.config.boosts,
            );
        }

        // The configured cap is honored verbatim when concepts were detected;
        // the default-candidate path clamps to one so the output never loses
        // its guaranteed baseline enhancement.
        let cap = if fallback_used {
            self.config.max_enhancements.max(1)
        } else {
            self.config.max_enhancements
        };
        let selected: Vec<EnhancementCandidate> = if self.config.enable_conflict_resolution {
            resolve_conflicts(&self.taxonomy, &candidates, cap)
        } else {
            candidates.iter().take(cap).cloned().collect()
        };
        log::debug!(
            "selected {} of {} candidates",
            selected.len(),
            candidates.len()
        );

        let enhanced_prompt = build_enhanced_prompt(&self.taxonomy, prompt, &selected);
        let negative_prompt = build_negative_prompt(&self.taxonomy, &concepts);
        let brand_alignment = brand_alignment_score(&self.taxonomy, &concepts);
        let confidence = confidence_score(&concepts, &selected);

        let enhancement_details: Vec<EnhancementDetail> = selected
            .iter()
            .map(|candidate| EnhancementDetail {
                category: candidate.category,
                concept: candidate.name.clone(),
                text: candidate.text.clone(),
                weight: candidate.weight,
                reasoning: self.reasoning_for(candidate, &concepts, context),
            })
            .collect();

        Ok(EnhancedPromptResult {
            original_prompt: prompt.to_string(),
            enhanced_prompt,
            metadata: EnhancementMetadata {
                processing_time_ms: started.elapsed().as_millis() as u64,
                concepts_found: concepts.len(),
                enhancements_applied: enhancement_details.len(),
                fallback_used,
            },
            applied_concepts: concepts,
            enhancement_details,
            brand_alignment_score: brand_alignment,
            confidence_score: confidence,
            negative_prompt,
        })
    }

    fn reasoning_for(
        &self,
        candidate: &EnhancementCandidate,
        concepts: &[ParsedConcept],
        context: Option<&DomainContext>,
    ) -> String {
        let detected = concepts.iter().any(|concept| {
            concept.category == candidate.category && concept.name == candidate.name
        });
        if detected {
            format!(
                "enhanced based on detected {}: {}",
                candidate.category, candidate.name
            )
        } else {
            let domain = context.map_or_else(|| self.taxonomy.name(), |c| c.name.as_str());
            format!(
                "applied {domain} {} guidelines for brand consistency",
                candidate.category
            )
        }
    }

    /// Hard-coded guaranteed-success result, bypassing all scoring nuance.
    fn fallback_result(
        &self,
        prompt: &str,
        context: Option<&DomainContext>,
        started: Instant,
    ) -> EnhancedPromptResult {
        let defaults = self.taxonomy.defaults();
        let (category, concept) = defaults
            .candidates
            .first()
            .map_or((Category::Style, "baseline"), |c| {
                (c.category, c.name.as_str())
            });
        let domain = context.map_or_else(|| self.taxonomy.name(), |c| c.name.as_str());

        EnhancedPromptResult {
            original_prompt: prompt.to_string(),
            enhanced_prompt: format!("{prompt}, {}", defaults.fallback_text),
            applied_concepts: Vec::new(),
            enhancement_details: vec![EnhancementDetail {
                category,
                concept: concept.to_string(),
                text: defaults.fallback_text.clone(),
                weight: FALLBACK_WEIGHT,
                reasoning: format!("applied default {domain} branding after pipeline failure"),
            }],
            brand_alignment_score: FALLBACK_ALIGNMENT_SCORE,
            confidence_score: FALLBACK_CONFIDENCE_SCORE,
            negative_prompt: defaults.base_negative.clone(),
            metadata: EnhancementMetadata {
                processing_time_ms: started.elapsed().as_millis() as u64,
                concepts_found: 0,
                enhancements_applied: 1,
                fallback_used: true,
            },
        }
    }
}
