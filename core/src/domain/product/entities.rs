use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted field names of the `products` collection.
pub mod fields {
    pub const ID: &str = "_id";
    pub const NAME: &str = "name";
    pub const ENABLED: &str = "enabled";
    pub const ADDED_AT: &str = "addedAt";
    pub const REGULAR_PRICE: &str = "regularPrice";
    pub const SALE_PRICE: &str = "salePrice";
    pub const QUANTITY_IN_STOCK: &str = "quantityInStock";
    pub const CATEGORY_ID: &str = "categoryId";
    /// Text-search relevance added by the summary pipeline.
    pub const SCORE: &str = "score";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub description: Option<String>,
    pub regular_price: f64,
    pub sale_price: f64,
    pub enabled: bool,
    pub quantity_in_stock: i64,
    pub added_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub category_id: Uuid,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.sale_price < self.regular_price
    }

    pub fn in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }

    pub fn discount_percentage_rounded(&self) -> i64 {
        discount_percentage_rounded(self.regular_price, self.sale_price)
    }
}

/// Discount over the regular price, rounded to the nearest whole percent.
pub fn discount_percentage_rounded(regular_price: f64, sale_price: f64) -> i64 {
    if sale_price >= regular_price || regular_price <= 0.0 {
        return 0;
    }
    ((1.0 - sale_price / regular_price) * 100.0).round() as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMinimal {
    pub id: Uuid,
    pub name: String,
}

/// Row produced by the product summary aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: Uuid,
    pub added_at: DateTime<Utc>,
    pub name: String,
    pub brand: String,
    pub regular_price: f64,
    pub sale_price: f64,
    pub enabled: bool,
    pub quantity_in_stock: i64,
    pub discount_percentage_rounded: i64,
    pub has_discount: bool,
    pub in_stock: bool,
    pub short_description: String,
    pub category: CategoryMinimal,
    pub score: Option<f64>,
}
