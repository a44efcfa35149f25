pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{analysis_router, recommendation_router};
pub use state::{AnalysisState, RecommendationState};
