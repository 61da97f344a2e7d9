use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FieldError;

/// A catalog product as returned by the backend.
///
/// The purchase price travels under the misspelled wire name
/// `purchasPrice`; the backend contract is frozen on that spelling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "purchasPrice")]
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    #[serde(default)]
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub views_counter: i64,
    #[serde(default)]
    pub search_counter: i64,
    #[serde(default)]
    pub is_verified: bool,
}

impl Product {
    /// Selling price after the percentage discount is applied.
    pub fn final_price(&self) -> Decimal {
        final_price(self.selling_price, self.discount_percentage)
    }
}

pub fn final_price(selling_price: Decimal, discount_percentage: Decimal) -> Decimal {
    selling_price - selling_price * discount_percentage / Decimal::ONE_HUNDRED
}

/// One page of products in the backend's page envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub content: Vec<Product>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default, rename = "number")]
    pub page: u32,
}

/// Sort orders offered by the catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    Views,
    Searches,
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
}

/// In-memory filter applied to a loaded page of products.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub sort: ProductSort,
}

impl CatalogFilter {
    /// Filters and orders `products` without touching the backend.
    ///
    /// The text search matches title or description, case-insensitively.
    /// All sorts are stable so equal keys keep their incoming order. The
    /// price sorts compare the listed selling price; discounts only affect
    /// the displayed final price.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matched: Vec<Product> = products
            .iter()
            .filter(|product| {
                self.category_id
                    .map_or(true, |id| product.category_id == Some(id))
            })
            .filter(|product| match &needle {
                Some(needle) => {
                    product.title.to_lowercase().contains(needle)
                        || product
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(needle))
                }
                None => true,
            })
            .cloned()
            .collect();

        match self.sort {
            ProductSort::Views => matched.sort_by(|a, b| b.views_counter.cmp(&a.views_counter)),
            ProductSort::Searches => {
                matched.sort_by(|a, b| b.search_counter.cmp(&a.search_counter))
            }
            ProductSort::PriceLow => {
                matched.sort_by(|a, b| a.selling_price.cmp(&b.selling_price))
            }
            ProductSort::PriceHigh => {
                matched.sort_by(|a, b| b.selling_price.cmp(&a.selling_price))
            }
            ProductSort::Newest => matched.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        matched
    }
}

/// Product fields the operator edits before create or update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "purchasPrice")]
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub discount_percentage: Decimal,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub category_id: Option<i64>,
}

impl ProductDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "title is required"));
        }
        if self.category_id.is_none() {
            errors.push(FieldError::new("categoryId", "category is required"));
        }
        if self.purchase_price <= Decimal::ZERO {
            errors.push(FieldError::new(
                "purchasPrice",
                "purchase price must be greater than zero",
            ));
        }
        if self.selling_price <= Decimal::ZERO {
            errors.push(FieldError::new(
                "sellingPrice",
                "selling price must be greater than zero",
            ));
        } else if self.purchase_price > Decimal::ZERO && self.selling_price < self.purchase_price {
            errors.push(FieldError::new(
                "sellingPrice",
                "selling price cannot be below the purchase price",
            ));
        }
        if self.quantity < 0 {
            errors.push(FieldError::new("quantity", "quantity cannot be negative"));
        }
        if self.discount_percentage < Decimal::ZERO
            || self.discount_percentage > Decimal::ONE_HUNDRED
        {
            errors.push(FieldError::new(
                "discountPercentage",
                "discount must be between 0 and 100",
            ));
        }

        errors
    }
}
