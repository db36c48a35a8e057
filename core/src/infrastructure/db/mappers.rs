use chrono::{DateTime, Utc};
use mongodb::bson::{DateTime as BsonDateTime, Uuid as BsonUuid};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub fn to_uuid(id: BsonUuid) -> Uuid {
    Uuid::from_bytes(id.bytes())
}

/// Fails with `CoreError::Decode` for BSON dates outside chrono's range.
pub fn to_utc(value: BsonDateTime) -> Result<DateTime<Utc>, CoreError> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).ok_or_else(|| {
        CoreError::Decode(format!(
            "date {}ms is out of range",
            value.timestamp_millis()
        ))
    })
}

pub fn to_optional_utc(value: Option<BsonDateTime>) -> Result<Option<DateTime<Utc>>, CoreError> {
    value.map(to_utc).transpose()
}
