use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{AnalysisResponse, BodyMetrics, RecommendationRequest, RecommendationResponse},
};

use super::{AnalysisState, RecommendationState};

const PHOTO_REQUIRED: &str = "Image (photo) is required";

// Upload parsing

/// Photo part of the multipart form
#[derive(Debug)]
pub struct PhotoUpload {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Raw `/analyze` form, before validation
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub photo: Option<PhotoUpload>,
}

/// A validated analysis request
#[derive(Debug)]
pub struct AnalysisUpload {
    pub image: Bytes,
    pub image_mime: String,
    pub metrics: BodyMetrics,
}

async fn read_form(mut multipart: Multipart) -> AppResult<AnalyzeForm> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "photo" => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read image: {}", e)))?;
                form.photo = Some(PhotoUpload {
                    content_type,
                    bytes,
                });
            }
            "height" | "weight" => {
                let value = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read field '{}': {}", name, e))
                })?;
                if name == "height" {
                    form.height = Some(value);
                } else {
                    form.weight = Some(value);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn parse_metric(name: &str, value: Option<&str>) -> AppResult<f64> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Field '{}' is required", name)))?;

    let number: f64 = value
        .parse()
        .map_err(|_| AppError::Validation(format!("Field '{}' must be a number", name)))?;

    if !number.is_finite() || number <= 0.0 {
        return Err(AppError::Validation(format!(
            "Field '{}' must be a positive number",
            name
        )));
    }

    Ok(number)
}

/// Checks the form in a fixed order: photo, its type, its size, then the metrics.
pub fn validate_form(form: AnalyzeForm, max_image_bytes: usize) -> AppResult<AnalysisUpload> {
    let photo = form
        .photo
        .ok_or_else(|| AppError::Validation(PHOTO_REQUIRED.to_string()))?;

    let image_mime = photo
        .content_type
        .filter(|ct| ct.starts_with("image/"))
        .ok_or_else(|| AppError::Validation("Uploaded file must be an image".to_string()))?;

    if photo.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded image is empty".to_string()));
    }

    if photo.bytes.len() > max_image_bytes {
        return Err(AppError::Validation(format!(
            "Image too large. Max size is {} bytes",
            max_image_bytes
        )));
    }

    let metrics = BodyMetrics {
        height: parse_metric("height", form.height.as_deref())?,
        weight: parse_metric("weight", form.weight.as_deref())?,
    };

    Ok(AnalysisUpload {
        image: photo.bytes,
        image_mime,
        metrics,
    })
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Analyze a photo plus height and weight
pub async fn analyze(
    State(state): State<AnalysisState>,
    Extension(request_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    // Anything that is not multipart cannot carry a photo
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(request_id = %request_id, rejection = %rejection, "Not a multipart request");
        AppError::Validation(PHOTO_REQUIRED.to_string())
    })?;

    let form = read_form(multipart).await?;
    let upload = validate_form(form, state.max_image_bytes).inspect_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Rejected analysis request");
    })?;

    tracing::info!(
        request_id = %request_id,
        image_bytes = upload.image.len(),
        mime = %upload.image_mime,
        provider = state.analyzer.provider_name(),
        "Processing analysis request"
    );

    let analysis = state
        .analyzer
        .analyze(&upload.image, &upload.image_mime, upload.metrics)
        .await
        .map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Analysis failed");
            AppError::from(e)
        })?;

    Ok(Json(AnalysisResponse::success(analysis)))
}

/// Products matching a previously computed analysis
pub async fn recommend(
    State(state): State<RecommendationState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::info!(request_id = %request_id, rejection = %rejection, "Rejected recommendation request");
        AppError::Validation(rejection.body_text())
    })?;

    tracing::info!(
        request_id = %request_id,
        catalog = state.catalog.name(),
        categories = request.categories.len(),
        style_hint = request.style_hint.as_deref().unwrap_or("-"),
        "Processing recommendation request"
    );

    let items = state.catalog.lookup(&request).await?;

    Ok(Json(RecommendationResponse { items }))
}
