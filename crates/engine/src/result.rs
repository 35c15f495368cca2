use promptloom_parser::ParsedConcept;
use promptloom_taxonomy::Category;
use serde::{Deserialize, Serialize};

/// One selected enhancement with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementDetail {
    pub category: Category,
    pub concept: String,
    pub text: String,
    pub weight: f32,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementMetadata {
    pub processing_time_ms: u64,
    pub concepts_found: usize,
    pub enhancements_applied: usize,
    pub fallback_used: bool,
}

/// The engine's output: always fully populated, never partial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedPromptResult {
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub applied_concepts: Vec<ParsedConcept>,
    pub enhancement_details: Vec<EnhancementDetail>,
    pub brand_alignment_score: f32,
    pub confidence_score: f32,
    pub negative_prompt: String,
    pub metadata: EnhancementMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualIdentity {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
}

/// Optional caller-supplied domain identity.
///
/// Currently only the name feeds baseline reasoning text; the remaining
/// fields are accepted for API stability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainContext {
    pub name: String,
    #[serde(default)]
    pub primary_values: Vec<String>,
    #[serde(default)]
    pub visual_identity: VisualIdentity,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default)]
    pub content_guidelines: Vec<String>,
}
