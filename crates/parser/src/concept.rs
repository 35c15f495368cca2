use promptloom_taxonomy::Category;
use serde::Serialize;

/// A scored concept match produced by extraction.
///
/// Owned by a single enhancement call; the engine discards it when the call
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedConcept {
    pub category: Category,
    pub name: String,
    /// Accumulated evidence score, clamped to [0, 1].
    pub confidence: f32,
    /// Comma-joined matched terms in encounter order.
    pub matched_text: String,
    /// Character offset of the first matched term in the prompt.
    pub position: usize,
    /// Tokens surrounding the first match, stop words excluded.
    pub context_tokens: Vec<String>,
}
