use crate::{
    error::AppResult,
    models::{ProductItem, RecommendationRequest},
};

/// Trait for product catalog backends
///
/// The recommendation endpoint only depends on this capability, so a real matching
/// engine can replace `StaticCatalog` without changing the handler.
#[async_trait::async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, request: &RecommendationRequest) -> AppResult<Vec<ProductItem>>;

    /// Catalog name for logging
    fn name(&self) -> &'static str;
}

/// Fixed catalog slice returned for every analysis
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    items: Vec<ProductItem>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            items: vec![
                ProductItem {
                    name: "White slim-fit Oxford shirt".to_string(),
                    store: "Zara".to_string(),
                    category: "shirt".to_string(),
                    url: "https://example.com/zara/camisa-oxford-blanca".to_string(),
                },
                ProductItem {
                    name: "Dark blue slim jeans".to_string(),
                    store: "Uniqlo".to_string(),
                    category: "jeans".to_string(),
                    url: "https://example.com/uniqlo/vaqueros-slim-azul-oscuro".to_string(),
                },
            ],
        }
    }
}

#[async_trait::async_trait]
impl CatalogLookup for StaticCatalog {
    async fn lookup(&self, _request: &RecommendationRequest) -> AppResult<Vec<ProductItem>> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
