//! Rendering of domain criteria into MongoDB query documents.

use mongodb::bson::{Binary, Bson, DateTime as BsonDateTime, Document, doc, spec::BinarySubtype};
use uuid::Uuid;

use crate::domain::common::criteria::{
    Clause, ClauseValue, Criteria, FieldComparison, SortDirection, SortSpec, TextMatch,
};
use crate::domain::product::entities::fields;

pub fn uuid_bson(id: Uuid) -> Bson {
    Bson::Binary(Binary {
        subtype: BinarySubtype::Uuid,
        bytes: id.as_bytes().to_vec(),
    })
}

/// Filter matching a single document by primary identifier.
pub fn id_document(id: Uuid) -> Document {
    field_document("_id", uuid_bson(id))
}

pub fn value_bson(value: &ClauseValue) -> Bson {
    match value {
        ClauseValue::Bool(value) => Bson::Boolean(*value),
        ClauseValue::Int(value) => Bson::Int64(*value),
        ClauseValue::Float(value) => Bson::Double(*value),
        ClauseValue::DateTime(value) => {
            Bson::DateTime(BsonDateTime::from_millis(value.timestamp_millis()))
        }
        ClauseValue::Uuid(value) => uuid_bson(*value),
    }
}

fn field_document(field: &str, condition: impl Into<Bson>) -> Document {
    let mut document = Document::new();
    document.insert(field, condition);
    document
}

pub fn clause_document(clause: &Clause) -> Document {
    match clause {
        Clause::Eq { field, value } => field_document(field, value_bson(value)),
        Clause::Gt { field, value } => {
            field_document(field, doc! { "$gt": value_bson(value) })
        }
        Clause::Gte { field, value } => {
            field_document(field, doc! { "$gte": value_bson(value) })
        }
        Clause::Lte { field, value } => {
            field_document(field, doc! { "$lte": value_bson(value) })
        }
        Clause::Between { field, from, to } => field_document(
            field,
            doc! { "$gte": value_bson(from), "$lte": value_bson(to) },
        ),
        Clause::Pattern { field, pattern } => field_document(
            field,
            doc! { "$regex": pattern.as_str(), "$options": "i" },
        ),
        Clause::In { field, values } => field_document(
            field,
            doc! { "$in": values.iter().map(value_bson).collect::<Vec<Bson>>() },
        ),
        Clause::CompareFields {
            left,
            comparison,
            right,
        } => {
            let operator = match comparison {
                FieldComparison::LessThan => "$lt",
                FieldComparison::Equal => "$eq",
            };
            doc! {
                "$expr": field_document(operator, vec![format!("${left}"), format!("${right}")]),
            }
        }
    }
}

/// All clauses AND-ed together, or `None` when there is nothing to match on.
pub fn clauses_document(clauses: &[Clause]) -> Option<Document> {
    if clauses.is_empty() {
        return None;
    }

    let clauses: Vec<Document> = clauses.iter().map(clause_document).collect();
    Some(doc! { "$and": clauses })
}

pub fn text_document(text: &TextMatch) -> Document {
    doc! { "$text": { "$search": text.term.as_str() } }
}

/// Filter used for counting and plain `find` queries.
pub fn query_document(criteria: &Criteria) -> Document {
    let mut query = criteria
        .text
        .as_ref()
        .map(text_document)
        .unwrap_or_default();

    if !criteria.clauses.is_empty() {
        let clauses: Vec<Document> = criteria.clauses.iter().map(clause_document).collect();
        query.insert("$and", clauses);
    }

    query
}

/// Sort keys for `sort`, with `_id` appended so paging is deterministic.
pub fn sort_document(sort: &SortSpec) -> Document {
    let mut document = match sort {
        SortSpec::Field {
            property,
            direction,
        } => {
            let order = match direction {
                SortDirection::Asc => 1,
                SortDirection::Desc => -1,
            };
            field_document(property, order)
        }
        SortSpec::Relevance => field_document(fields::SCORE, -1),
    };
    document.insert(fields::ID, 1);
    document
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_equality_and_comparison_clauses() {
        let eq = Clause::Eq {
            field: "enabled",
            value: true.into(),
        };
        let gt = Clause::Gt {
            field: "quantityInStock",
            value: 0i64.into(),
        };

        assert_eq!(clause_document(&eq), doc! { "enabled": true });
        assert_eq!(
            clause_document(&gt),
            doc! { "quantityInStock": { "$gt": 0i64 } }
        );
    }

    #[test]
    fn test_range_clauses() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let gte = Clause::Gte {
            field: "addedAt",
            value: from.into(),
        };
        let between = Clause::Between {
            field: "salePrice",
            from: 10.0_f64.into(),
            to: 20.0_f64.into(),
        };

        assert_eq!(
            clause_document(&gte),
            doc! { "addedAt": { "$gte": BsonDateTime::from_millis(from.timestamp_millis()) } }
        );
        assert_eq!(
            clause_document(&between),
            doc! { "salePrice": { "$gte": 10.0, "$lte": 20.0 } }
        );
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let pattern = Clause::Pattern {
            field: "name",
            pattern: "note".to_string(),
        };

        assert_eq!(
            clause_document(&pattern),
            doc! { "name": { "$regex": "note", "$options": "i" } }
        );
    }

    #[test]
    fn test_membership_renders_binary_uuids() {
        let id = Uuid::new_v4();
        let membership = Clause::In {
            field: "categoryId",
            values: vec![id.into()],
        };

        assert_eq!(
            clause_document(&membership),
            doc! { "categoryId": { "$in": [uuid_bson(id)] } }
        );
    }

    #[test]
    fn test_field_comparison_uses_expr() {
        let discounted = Clause::CompareFields {
            left: "salePrice",
            comparison: FieldComparison::LessThan,
            right: "regularPrice",
        };

        assert_eq!(
            clause_document(&discounted),
            doc! { "$expr": { "$lt": ["$salePrice", "$regularPrice"] } }
        );
    }

    #[test]
    fn test_query_document_combines_text_and_clauses() {
        let criteria = Criteria {
            clauses: vec![Clause::Eq {
                field: "enabled",
                value: true.into(),
            }],
            text: Some(TextMatch {
                term: "notebook".to_string(),
            }),
            sort: SortSpec::Relevance,
        };

        assert_eq!(
            query_document(&criteria),
            doc! {
                "$text": { "$search": "notebook" },
                "$and": [{ "enabled": true }],
            }
        );
    }

    #[test]
    fn test_unfiltered_query_is_empty() {
        let criteria = Criteria {
            clauses: Vec::new(),
            text: None,
            sort: SortSpec::Relevance,
        };

        assert_eq!(query_document(&criteria), Document::new());
        assert_eq!(clauses_document(&criteria.clauses), None);
    }

    #[test]
    fn test_sort_documents() {
        assert_eq!(
            sort_document(&SortSpec::Field {
                property: "name",
                direction: SortDirection::Desc,
            }),
            doc! { "name": -1, "_id": 1 }
        );
        assert_eq!(
            sort_document(&SortSpec::Relevance),
            doc! { "score": -1, "_id": 1 }
        );
    }

    #[test]
    fn test_sort_ends_with_id_tiebreaker() {
        let sort = sort_document(&SortSpec::Field {
            property: "addedAt",
            direction: SortDirection::Asc,
        });

        assert_eq!(
            sort.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["addedAt", "_id"]
        );
    }
}
