use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::{AnalysisState, RecommendationState};

/// Room for the text fields and multipart boundaries around the photo
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the analysis service router
pub fn analysis_router(state: AnalysisState) -> Router {
    let body_limit = state.max_image_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    // Browsers reject `*` together with credentials, so the request is mirrored instead
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    with_common_layers(router, cors)
}

/// Creates the recommendation service router
pub fn recommendation_router(state: RecommendationState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommendations", post(handlers::recommend))
        .with_state(state);

    with_common_layers(router, cors)
}

fn with_common_layers(router: Router, cors: CorsLayer) -> Router {
    // Request IDs are assigned first so the trace span can pick them up
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(cors),
    )
}
