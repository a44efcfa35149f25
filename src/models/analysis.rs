use serde::{Deserialize, Serialize};

/// Height and weight as submitted with the photo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
}

/// Normalized styling analysis returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub body_type: String,
    pub face_shape: String,
    /// Hex colors, 3 to 6 entries
    pub color_palette: Vec<String>,
    /// Short garment suggestions, at most 10
    pub recommendations: Vec<String>,
}

/// Envelope of a successful `/analyze` call
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub analysis: AnalysisResult,
}

impl AnalysisResponse {
    pub fn success(analysis: AnalysisResult) -> Self {
        Self {
            status: "success".to_string(),
            analysis,
        }
    }
}
