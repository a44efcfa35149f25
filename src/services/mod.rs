pub mod analysis;
pub mod catalog;
pub mod inference;

pub use analysis::StyleAnalyzer;
pub use catalog::{CatalogLookup, StaticCatalog};
pub use inference::{InferenceProvider, OpenAiProvider, VisionRequest};
