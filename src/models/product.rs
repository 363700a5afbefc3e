use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::{check_len, check_positive_id, check_price};

pub const SKU_MIN: usize = 3;
pub const SKU_MAX: usize = 10;
pub const PRODUCT_NAME_MIN: usize = 3;
pub const PRODUCT_NAME_MAX: usize = 75;

/// Label reported for a product whose `category_id` resolves to nothing.
pub const NO_CATEGORY_LABEL: &str = "Uncategorized";

/// Stored product record, also the create payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Stored uppercase; unique regardless of case.
    #[schema(min_length = 3, max_length = 10, example = "AAA")]
    pub sku: String,
    #[schema(min_length = 3, max_length = 75, example = "Hammer")]
    pub name: String,
    /// Must be greater than 0.
    #[schema(example = 9.99)]
    pub price: f64,
    /// ID of an existing category.
    #[schema(example = 1)]
    pub category_id: i64,
}

impl Product {
    pub fn validate(&self) -> AppResult<()> {
        check_len("sku", &self.sku, SKU_MIN, SKU_MAX)?;
        check_len("name", &self.name, PRODUCT_NAME_MIN, PRODUCT_NAME_MAX)?;
        check_price(self.price)
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &ProductUpdate) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
    }
}

/// SKUs are compared and stored in uppercase.
pub fn canonical_sku(sku: &str) -> String {
    sku.to_uppercase()
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Only the fields present are applied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
}

impl ProductUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            check_len("name", name, PRODUCT_NAME_MIN, PRODUCT_NAME_MAX)?;
        }
        if let Some(price) = self.price {
            check_price(price)?;
        }
        if let Some(category_id) = self.category_id {
            check_positive_id("category_id", category_id)?;
        }
        Ok(())
    }
}

// ── Responses ────────────────────────────────────────────────────────────────

/// Product joined with its category name for list responses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
}
