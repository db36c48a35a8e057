//! Aggregation pipeline for product summaries.
//!
//! Stage order: text match and score, structural match, category lookup,
//! unwind, sort, summary projection, skip, limit.

use mongodb::bson::{Document, doc};

use crate::domain::{
    common::{criteria::Criteria, pagination::PageRequest},
    product::entities::fields,
};
use crate::infrastructure::{
    category::repositories::category_repository::CATEGORIES_COLLECTION,
    db::criteria::{clauses_document, sort_document, text_document},
};

pub const SHORT_DESCRIPTION_LENGTH: i32 = 50;

pub fn summary_pipeline(criteria: &Criteria, page: PageRequest) -> Vec<Document> {
    let mut stages = Vec::new();

    if let Some(text) = &criteria.text {
        stages.push(doc! { "$match": text_document(text) });
        stages.push(doc! { "$addFields": { "score": { "$meta": "textScore" } } });
    }

    if let Some(clauses) = clauses_document(&criteria.clauses) {
        stages.push(doc! { "$match": clauses });
    }

    stages.extend([
        doc! {
            "$lookup": {
                "from": CATEGORIES_COLLECTION,
                "localField": fields::CATEGORY_ID,
                "foreignField": "_id",
                "as": "category",
            }
        },
        doc! { "$unwind": "$category" },
        doc! { "$sort": sort_document(&criteria.sort) },
        summary_projection(),
        doc! { "$skip": page.offset() as i64 },
        doc! { "$limit": page.limit() },
    ]);

    stages
}

fn summary_projection() -> Document {
    doc! {
        "$project": {
            "_id": 1,
            "addedAt": 1,
            "name": 1,
            "brand": 1,
            "regularPrice": 1,
            "salePrice": 1,
            "enabled": 1,
            "quantityInStock": 1,
            "score": 1,
            "category": {
                "_id": "$category._id",
                "name": "$category.name",
            },
            "hasDiscount": { "$lt": ["$salePrice", "$regularPrice"] },
            "inStock": { "$gt": ["$quantityInStock", 0] },
            "shortDescription": {
                "$substrCP": [
                    { "$ifNull": ["$description", ""] },
                    0,
                    SHORT_DESCRIPTION_LENGTH,
                ]
            },
        }
    }
}
