mod assemble;
mod candidate;
mod config;
mod conflict;
mod engine;
mod error;
mod result;
mod score;
mod weights;

pub use candidate::EnhancementCandidate;
pub use config::{EngineConfig, WeightBoosts};
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use result::{
    DomainContext, EnhancedPromptResult, EnhancementDetail, EnhancementMetadata,
    VisualIdentity,
};
