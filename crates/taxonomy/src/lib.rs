mod category;
mod concept;
mod store;

pub use category::Category;
pub use concept::{normalized_name, AxisWeights, ConceptEntry};
pub use store::{
    DefaultCandidate, Result, Taxonomy, TaxonomyDefaults, TaxonomyError,
};
