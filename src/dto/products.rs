use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::Product;

/// Catalog upsert payload. An input carrying the id of an existing product
/// replaces it in place; otherwise a fresh identity is assigned and the
/// product is appended. Field validation happens here, before the catalog
/// service is invoked.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub images: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub videos: Option<Vec<String>>,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Product name is required".into()));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::BadRequest(
                "Product price must not be negative".into(),
            ));
        }
        let has_primary_image = self
            .images
            .first()
            .is_some_and(|image| !image.trim().is_empty());
        if !has_primary_image {
            return Err(AppError::BadRequest(
                "Product needs a non-empty primary image".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<String>,
}
