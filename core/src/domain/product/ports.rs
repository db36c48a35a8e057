use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::{
        criteria::Criteria,
        entities::app_errors::CoreError,
        pagination::{PageModel, PageRequest},
    },
    product::{
        entities::{Product, ProductSummary},
        value_objects::{ProductDetailOutput, ProductFilter, ProductSummaryOutput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductQueryService: Send + Sync {
    fn filter(
        &self,
        filter: ProductFilter,
    ) -> impl Future<Output = Result<PageModel<ProductSummaryOutput>, CoreError>> + Send;

    fn find_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<ProductDetailOutput, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn get_by_id(
        &self,
        product_id: Uuid,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    /// Number of products matching the structural and text criteria.
    fn count(&self, criteria: Criteria) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// One page of summaries, joined with their category and sorted by the
    /// criteria's `SortSpec`.
    fn find_summaries(
        &self,
        criteria: Criteria,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<ProductSummary>, CoreError>> + Send;
}
