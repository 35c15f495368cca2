mod concept;
mod extractor;
mod ranker;
mod scoring;
mod tokenizer;

pub use concept::ParsedConcept;
pub use extractor::ConceptExtractor;
pub use ranker::dedupe_and_rank;
pub use scoring::{CategoryScoring, ScoringConfig};
pub use tokenizer::{context_window, is_stop_word, tokenize};
