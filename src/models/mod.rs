pub mod analysis;
pub mod catalog;

pub use analysis::{AnalysisResponse, AnalysisResult, BodyMetrics};
pub use catalog::{ProductItem, RecommendationRequest, RecommendationResponse};
