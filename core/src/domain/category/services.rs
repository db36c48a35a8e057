use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    category::{
        criteria,
        ports::{CategoryQueryService, CategoryRepository},
        value_objects::{CategoryDetailOutput, CategoryFilter},
    },
    common::{
        entities::app_errors::CoreError,
        pagination::{PageModel, paginate},
        services::Service,
    },
    product::ports::ProductRepository,
};

impl<C, P> CategoryQueryService for Service<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    #[instrument(skip(self))]
    async fn filter(
        &self,
        filter: CategoryFilter,
    ) -> Result<PageModel<CategoryDetailOutput>, CoreError> {
        let request = filter.page_request();
        request.validate()?;

        let criteria = criteria::compile(&filter);
        let total_elements = self.category_repository.count(criteria.clone()).await?;

        let page = paginate(total_elements, request, || {
            self.category_repository.find_page(criteria, request)
        })
        .await?;

        tracing::debug!(
            total_elements,
            total_pages = page.total_pages,
            returned = page.content.len(),
            "Filtered categories"
        );

        Ok(page.map(CategoryDetailOutput::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, category_id: Uuid) -> Result<CategoryDetailOutput, CoreError> {
        let category = self
            .category_repository
            .get_by_id(category_id)
            .await?
            .ok_or(CoreError::CategoryNotFound(category_id))?;

        Ok(CategoryDetailOutput::from(category))
    }
}
