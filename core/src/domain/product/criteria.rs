use crate::domain::{
    common::criteria::{
        Clause, ClauseValue, Criteria, FieldComparison, SortSpec, TextMatch, collect_clauses,
        range,
    },
    product::{entities::fields, value_objects::ProductFilter},
};

/// Which side of the discount split a filter selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountCondition {
    Discounted,
    FullPrice,
}

impl From<bool> for DiscountCondition {
    fn from(has_discount: bool) -> Self {
        if has_discount {
            DiscountCondition::Discounted
        } else {
            DiscountCondition::FullPrice
        }
    }
}

impl DiscountCondition {
    pub fn clause(self) -> Clause {
        let comparison = match self {
            DiscountCondition::Discounted => FieldComparison::LessThan,
            DiscountCondition::FullPrice => FieldComparison::Equal,
        };
        Clause::CompareFields {
            left: fields::SALE_PRICE,
            comparison,
            right: fields::REGULAR_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCondition {
    InStock,
    OutOfStock,
}

impl From<bool> for StockCondition {
    fn from(in_stock: bool) -> Self {
        if in_stock {
            StockCondition::InStock
        } else {
            StockCondition::OutOfStock
        }
    }
}

impl StockCondition {
    pub fn clause(self) -> Clause {
        match self {
            StockCondition::InStock => Clause::Gt {
                field: fields::QUANTITY_IN_STOCK,
                value: ClauseValue::Int(0),
            },
            StockCondition::OutOfStock => Clause::Eq {
                field: fields::QUANTITY_IN_STOCK,
                value: ClauseValue::Int(0),
            },
        }
    }
}

pub fn compile(filter: &ProductFilter) -> Criteria {
    let text = TextMatch::from_term(filter.term.as_deref());

    let clauses = collect_clauses([
        filter.enabled.map(|enabled| Clause::Eq {
            field: fields::ENABLED,
            value: enabled.into(),
        }),
        range(fields::ADDED_AT, filter.added_at_from, filter.added_at_to),
        range(fields::SALE_PRICE, filter.price_from, filter.price_to),
        filter
            .has_discount
            .map(|has_discount| DiscountCondition::from(has_discount).clause()),
        filter
            .in_stock
            .map(|in_stock| StockCondition::from(in_stock).clause()),
        (!filter.categories_id.is_empty()).then(|| Clause::In {
            field: fields::CATEGORY_ID,
            values: filter
                .categories_id
                .iter()
                .copied()
                .map(ClauseValue::from)
                .collect(),
        }),
    ]);

    let sort = sort_with(filter, text.as_ref());

    Criteria {
        clauses,
        text,
        sort,
    }
}

fn sort_with(filter: &ProductFilter, text: Option<&TextMatch>) -> SortSpec {
    if text.is_some() {
        return SortSpec::Relevance;
    }

    SortSpec::Field {
        property: filter.sort_by_property_or_default().property_name(),
        direction: filter.sort_direction_or_default(),
    }
}
