use futures::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    category::{entities::Category, ports::CategoryRepository},
    common::{criteria::Criteria, entities::app_errors::CoreError, pagination::PageRequest},
};
use crate::infrastructure::{
    category::mappers::CategoryDocument,
    db::criteria::{id_document, query_document, sort_document},
};

pub const CATEGORIES_COLLECTION: &str = "categories";

#[derive(Debug, Clone)]
pub struct MongoCategoryRepository {
    pub collection: Collection<CategoryDocument>,
}

impl MongoCategoryRepository {
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection(CATEGORIES_COLLECTION),
        }
    }
}

impl CategoryRepository for MongoCategoryRepository {
    async fn get_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        let category = self
            .collection
            .find_one(id_document(category_id))
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::from(e)
            })?
            .map(Category::try_from)
            .transpose()
            .map_err(|e| {
                error!("Failed to map category: {}", e);
                e
            })?;

        Ok(category)
    }

    async fn count(&self, criteria: Criteria) -> Result<u64, CoreError> {
        self.collection
            .count_documents(query_document(&criteria))
            .await
            .map_err(|e| {
                error!("Failed to count categories: {}", e);
                CoreError::from(e)
            })
    }

    async fn find_page(
        &self,
        criteria: Criteria,
        page: PageRequest,
    ) -> Result<Vec<Category>, CoreError> {
        let cursor = self
            .collection
            .find(query_document(&criteria))
            .sort(sort_document(&criteria.sort))
            .skip(page.offset())
            .limit(page.limit())
            .await
            .map_err(|e| {
                error!("Failed to find categories: {}", e);
                CoreError::from(e)
            })?;

        let categories = cursor
            .try_collect::<Vec<CategoryDocument>>()
            .await
            .map_err(|e| {
                error!("Failed to read categories cursor: {}", e);
                CoreError::from(e)
            })?
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<Category>, CoreError>>()
            .map_err(|e| {
                error!("Failed to map categories: {}", e);
                e
            })?;

        Ok(categories)
    }
}
