use promptloom_taxonomy::{Category, TaxonomyError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Internal pipeline error.
///
/// Never escapes `Engine::enhance`: the public call site converts every
/// variant into the documented fallback result.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("empty prompt")]
    EmptyPrompt,

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("ranked concept {category}/{name} is missing from the taxonomy")]
    UnknownConcept { category: Category, name: String },
}
