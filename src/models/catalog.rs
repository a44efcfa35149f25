use serde::{Deserialize, Serialize};

/// Analysis forwarded by the client to ask for matching products
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub body_type: String,
    pub face_shape: String,
    pub color_palette: Vec<String>,
    /// Free-text suggestions from the analysis, accepted so the result can be forwarded as is
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub style_hint: Option<String>,
    pub categories: Vec<String>,
}

/// A single product from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductItem {
    pub name: String,
    pub store: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub items: Vec<ProductItem>,
}
