use mongodb::bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use serde::{Deserialize, Serialize};

use crate::domain::{category::entities::Category, common::entities::app_errors::CoreError};
use crate::infrastructure::db::mappers::{to_optional_utc, to_uuid};

/// Stored shape of a document in the `categories` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: BsonUuid,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<BsonDateTime>,
    #[serde(default)]
    pub updated_at: Option<BsonDateTime>,
}

impl TryFrom<CategoryDocument> for Category {
    type Error = CoreError;

    fn try_from(document: CategoryDocument) -> Result<Self, Self::Error> {
        Ok(Category {
            id: to_uuid(document.id),
            name: document.name,
            enabled: document.enabled,
            created_at: to_optional_utc(document.created_at)?,
            updated_at: to_optional_utc(document.updated_at)?,
        })
    }
}
