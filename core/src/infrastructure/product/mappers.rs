use mongodb::bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::entities::{CategoryMinimal, Product, ProductSummary, discount_percentage_rounded},
};
use crate::infrastructure::db::mappers::{to_optional_utc, to_utc, to_uuid};

/// Stored shape of a document in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: Option<String>,
    pub regular_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub quantity_in_stock: i64,
    pub added_at: BsonDateTime,
    #[serde(default)]
    pub updated_at: Option<BsonDateTime>,
    pub category_id: BsonUuid,
}

impl TryFrom<ProductDocument> for Product {
    type Error = CoreError;

    fn try_from(document: ProductDocument) -> Result<Self, Self::Error> {
        Ok(Product {
            id: to_uuid(document.id),
            name: document.name,
            brand: document.brand,
            description: document.description,
            regular_price: document.regular_price,
            sale_price: document.sale_price,
            enabled: document.enabled,
            quantity_in_stock: document.quantity_in_stock,
            added_at: to_utc(document.added_at)?,
            updated_at: to_optional_utc(document.updated_at)?,
            category_id: to_uuid(document.category_id),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMinimalDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub name: String,
}

/// Row shape emitted by the summary projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub added_at: BsonDateTime,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub regular_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub quantity_in_stock: i64,
    pub has_discount: bool,
    pub in_stock: bool,
    #[serde(default)]
    pub short_description: String,
    pub category: CategoryMinimalDocument,
    #[serde(default)]
    pub score: Option<f64>,
}

impl TryFrom<ProductSummaryDocument> for ProductSummary {
    type Error = CoreError;

    fn try_from(document: ProductSummaryDocument) -> Result<Self, Self::Error> {
        Ok(ProductSummary {
            id: to_uuid(document.id),
            added_at: to_utc(document.added_at)?,
            name: document.name,
            brand: document.brand,
            regular_price: document.regular_price,
            sale_price: document.sale_price,
            enabled: document.enabled,
            quantity_in_stock: document.quantity_in_stock,
            discount_percentage_rounded: discount_percentage_rounded(
                document.regular_price,
                document.sale_price,
            ),
            has_discount: document.has_discount,
            in_stock: document.in_stock,
            short_description: document.short_description,
            category: CategoryMinimal {
                id: to_uuid(document.category.id),
                name: document.category.name,
            },
            score: document.score,
        })
    }
}
