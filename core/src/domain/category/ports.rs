use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    category::{
        entities::Category,
        value_objects::{CategoryDetailOutput, CategoryFilter},
    },
    common::{
        criteria::Criteria,
        entities::app_errors::CoreError,
        pagination::{PageModel, PageRequest},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CategoryQueryService: Send + Sync {
    fn filter(
        &self,
        filter: CategoryFilter,
    ) -> impl Future<Output = Result<PageModel<CategoryDetailOutput>, CoreError>> + Send;

    fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<CategoryDetailOutput, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn get_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    /// Number of categories matching the criteria, ignoring sort and paging.
    fn count(&self, criteria: Criteria) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// One sorted page of categories matching the criteria.
    fn find_page(
        &self,
        criteria: Criteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}
