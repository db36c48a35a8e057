use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    category::entities::{Category, fields},
    common::{
        criteria::SortDirection,
        pagination::{DEFAULT_PAGE_SIZE, PageRequest},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategorySortProperty {
    #[default]
    Name,
}

impl CategorySortProperty {
    pub fn property_name(&self) -> &'static str {
        match self {
            CategorySortProperty::Name => fields::NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilter {
    pub page: u32,
    pub size: u32,
    pub sort_by_property: Option<CategorySortProperty>,
    pub sort_direction: Option<SortDirection>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by_property: None,
            sort_direction: None,
            name: None,
            enabled: None,
        }
    }
}

impl CategoryFilter {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }

    pub fn sort_by_property_or_default(&self) -> CategorySortProperty {
        self.sort_by_property.unwrap_or_default()
    }

    pub fn sort_direction_or_default(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetailOutput {
    pub id: Uuid,
    pub name: String,
    pub enabled: bool,
}

impl From<Category> for CategoryDetailOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            enabled: category.enabled,
        }
    }
}
