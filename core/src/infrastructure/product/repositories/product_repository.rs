use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document},
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{criteria::Criteria, entities::app_errors::CoreError, pagination::PageRequest},
    product::{
        entities::{Product, ProductSummary},
        ports::ProductRepository,
    },
};
use crate::infrastructure::{
    db::criteria::{id_document, query_document},
    product::{
        mappers::{ProductDocument, ProductSummaryDocument},
        pipeline::summary_pipeline,
    },
};

pub const PRODUCTS_COLLECTION: &str = "products";

#[derive(Debug, Clone)]
pub struct MongoProductRepository {
    pub collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }
}

impl ProductRepository for MongoProductRepository {
    async fn get_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = self
            .collection
            .find_one(id_document(product_id))
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::from(e)
            })?
            .map(Product::try_from)
            .transpose()
            .map_err(|e| {
                error!("Failed to map product: {}", e);
                e
            })?;

        Ok(product)
    }

    async fn count(&self, criteria: Criteria) -> Result<u64, CoreError> {
        self.collection
            .count_documents(query_document(&criteria))
            .await
            .map_err(|e| {
                error!("Failed to count products: {}", e);
                CoreError::from(e)
            })
    }

    async fn find_summaries(
        &self,
        criteria: Criteria,
        page: PageRequest,
    ) -> Result<Vec<ProductSummary>, CoreError> {
        let cursor = self
            .collection
            .aggregate(summary_pipeline(&criteria, page))
            .await
            .map_err(|e| {
                error!("Failed to aggregate product summaries: {}", e);
                CoreError::from(e)
            })?;

        let rows = cursor.try_collect::<Vec<Document>>().await.map_err(|e| {
            error!("Failed to read product summaries cursor: {}", e);
            CoreError::from(e)
        })?;

        rows.into_iter()
            .map(|row| {
                bson::from_document::<ProductSummaryDocument>(row)
                    .map_err(|e| CoreError::Decode(e.to_string()))
                    .and_then(ProductSummary::try_from)
                    .map_err(|e| {
                        error!("Failed to decode product summary: {}", e);
                        e
                    })
            })
            .collect()
    }
}
