use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::{
        criteria::SortDirection,
        pagination::{DEFAULT_PAGE_SIZE, PageRequest},
    },
    product::entities::{CategoryMinimal, Product, ProductSummary, fields},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortProperty {
    #[default]
    AddedAt,
    Name,
    SalePrice,
}

impl ProductSortProperty {
    pub fn property_name(&self) -> &'static str {
        match self {
            ProductSortProperty::AddedAt => fields::ADDED_AT,
            ProductSortProperty::Name => fields::NAME,
            ProductSortProperty::SalePrice => fields::SALE_PRICE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    pub page: u32,
    pub size: u32,
    pub sort_by_property: Option<ProductSortProperty>,
    pub sort_direction: Option<SortDirection>,
    pub enabled: Option<bool>,
    pub added_at_from: Option<DateTime<Utc>>,
    pub added_at_to: Option<DateTime<Utc>>,
    /// Lower bound on the sale price.
    pub price_from: Option<f64>,
    /// Upper bound on the sale price.
    pub price_to: Option<f64>,
    pub has_discount: Option<bool>,
    pub in_stock: Option<bool>,
    pub categories_id: Vec<Uuid>,
    pub term: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by_property: None,
            sort_direction: None,
            enabled: None,
            added_at_from: None,
            added_at_to: None,
            price_from: None,
            price_to: None,
            has_discount: None,
            in_stock: None,
            categories_id: Vec::new(),
            term: None,
        }
    }
}

impl ProductFilter {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }

    pub fn sort_by_property_or_default(&self) -> ProductSortProperty {
        self.sort_by_property.unwrap_or_default()
    }

    pub fn sort_direction_or_default(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailOutput {
    pub id: Uuid,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub brand: String,
    pub regular_price: f64,
    pub sale_price: f64,
    pub in_stock: bool,
    pub enabled: bool,
    pub quantity_in_stock: i64,
    pub has_discount: bool,
    pub discount_percentage_rounded: i64,
    pub description: Option<String>,
    pub category_id: Uuid,
}

impl From<Product> for ProductDetailOutput {
    fn from(product: Product) -> Self {
        Self {
            in_stock: product.in_stock(),
            has_discount: product.has_discount(),
            discount_percentage_rounded: product.discount_percentage_rounded(),
            id: product.id,
            added_at: product.added_at,
            name: product.name,
            brand: product.brand,
            regular_price: product.regular_price,
            sale_price: product.sale_price,
            enabled: product.enabled,
            quantity_in_stock: product.quantity_in_stock,
            description: product.description,
            category_id: product.category_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummaryOutput {
    pub id: Uuid,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub brand: String,
    pub regular_price: f64,
    pub sale_price: f64,
    pub in_stock: bool,
    pub enabled: bool,
    pub quantity_in_stock: i64,
    pub has_discount: bool,
    pub discount_percentage_rounded: i64,
    pub short_description: String,
    pub category: CategoryMinimal,
}

impl From<ProductSummary> for ProductSummaryOutput {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id,
            added_at: summary.added_at,
            name: summary.name,
            brand: summary.brand,
            regular_price: summary.regular_price,
            sale_price: summary.sale_price,
            in_stock: summary.in_stock,
            enabled: summary.enabled,
            quantity_in_stock: summary.quantity_in_stock,
            has_discount: summary.has_discount,
            discount_percentage_rounded: summary.discount_percentage_rounded,
            short_description: summary.short_description,
            category: summary.category,
        }
    }
}
