use crate::domain::{
    category::{entities::fields, value_objects::CategoryFilter},
    common::criteria::{Clause, Criteria, SortSpec, collect_clauses},
};

pub fn compile(filter: &CategoryFilter) -> Criteria {
    let name = filter
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let clauses = collect_clauses([
        filter.enabled.map(|enabled| Clause::Eq {
            field: fields::ENABLED,
            value: enabled.into(),
        }),
        name.map(|name| Clause::Pattern {
            field: fields::NAME,
            pattern: regex::escape(name),
        }),
    ]);

    Criteria {
        clauses,
        text: None,
        sort: sort_with(filter),
    }
}

fn sort_with(filter: &CategoryFilter) -> SortSpec {
    SortSpec::Field {
        property: filter.sort_by_property_or_default().property_name(),
        direction: filter.sort_direction_or_default(),
    }
}
