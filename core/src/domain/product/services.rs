use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        pagination::{PageModel, paginate},
        services::Service,
    },
    product::{
        criteria,
        ports::{ProductQueryService, ProductRepository},
        value_objects::{ProductDetailOutput, ProductFilter, ProductSummaryOutput},
    },
};

impl<C, P> ProductQueryService for Service<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    #[instrument(skip(self))]
    async fn filter(
        &self,
        filter: ProductFilter,
    ) -> Result<PageModel<ProductSummaryOutput>, CoreError> {
        let request = filter.page_request();
        request.validate()?;

        let criteria = criteria::compile(&filter);
        let total_elements = self.product_repository.count(criteria.clone()).await?;

        let page = paginate(total_elements, request, || {
            self.product_repository.find_summaries(criteria, request)
        })
        .await?;

        tracing::debug!(
            total_elements,
            total_pages = page.total_pages,
            returned = page.content.len(),
            "Filtered products"
        );

        Ok(page.map(ProductSummaryOutput::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, product_id: Uuid) -> Result<ProductDetailOutput, CoreError> {
        let product = self
            .product_repository
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;

        Ok(ProductDetailOutput::from(product))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        category::ports::MockCategoryRepository,
        common::{criteria::SortSpec, pagination::PageRequest},
        product::{
            entities::{CategoryMinimal, Product, ProductSummary},
            ports::MockProductRepository,
            value_objects::ProductSortProperty,
        },
    };

    fn summary(name: &str) -> ProductSummary {
        ProductSummary {
            id: Uuid::new_v4(),
            added_at: Utc::now(),
            name: name.to_string(),
            brand: "Acme".to_string(),
            regular_price: 120.0,
            sale_price: 100.0,
            enabled: true,
            quantity_in_stock: 4,
            discount_percentage_rounded: 17,
            has_discount: true,
            in_stock: true,
            short_description: "A light notebook".to_string(),
            category: CategoryMinimal {
                id: Uuid::new_v4(),
                name: "Notebooks".to_string(),
            },
            score: Some(1.5),
        }
    }

    fn product() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Notebook".to_string(),
            brand: "Acme".to_string(),
            description: Some("A light notebook".to_string()),
            regular_price: 200.0,
            sale_price: 150.0,
            enabled: true,
            quantity_in_stock: 0,
            added_at: Utc::now(),
            updated_at: None,
            category_id: Uuid::new_v4(),
        }
    }

    fn service(
        products: MockProductRepository,
    ) -> Service<MockCategoryRepository, MockProductRepository> {
        Service::new(MockCategoryRepository::new(), products)
    }

    #[tokio::test]
    async fn test_filter_short_circuits_on_zero_count() {
        let mut products = MockProductRepository::new();
        products
            .expect_count()
            .times(1)
            .returning(|_| Box::pin(async { Ok(0) }));
        products.expect_find_summaries().never();

        let filter = ProductFilter {
            page: 3,
            size: 10,
            in_stock: Some(true),
            ..Default::default()
        };

        let page = service(products).filter(filter).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_filter_with_term_uses_relevance_sort() {
        let mut products = MockProductRepository::new();
        products
            .expect_count()
            .withf(|criteria| criteria.text.is_some())
            .times(1)
            .returning(|_| Box::pin(async { Ok(21) }));
        products
            .expect_find_summaries()
            .withf(|criteria, page| {
                criteria.sort == SortSpec::Relevance && *page == PageRequest::new(1, 10)
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(vec![summary("Notebook Pro")]) }));

        let filter = ProductFilter {
            page: 1,
            size: 10,
            term: Some("notebook".to_string()),
            sort_by_property: Some(ProductSortProperty::Name),
            ..Default::default()
        };

        let page = service(products).filter(filter).await.unwrap();

        assert_eq!(page.total_elements, 21);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 1);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Notebook Pro");
        assert_eq!(page.content[0].category.name, "Notebooks");
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let mut products = MockProductRepository::new();
        products
            .expect_count()
            .times(1)
            .returning(|_| {
                Box::pin(async { Err(CoreError::Decode("bad document".to_string())) })
            });
        products.expect_find_summaries().never();

        let result = service(products).filter(ProductFilter::default()).await;

        assert!(matches!(result, Err(CoreError::Decode(_))));
    }

    #[tokio::test]
    async fn test_find_by_id_maps_derived_flags() {
        let found = product();
        let id = found.id;

        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .withf(move |product_id| *product_id == id)
            .times(1)
            .returning(move |_| {
                let found = found.clone();
                Box::pin(async move { Ok(Some(found)) })
            });

        let output = service(products).find_by_id(id).await.unwrap();

        assert_eq!(output.id, id);
        assert!(output.has_discount);
        assert!(!output.in_stock);
        assert_eq!(output.discount_percentage_rounded, 25);
    }

    #[tokio::test]
    async fn test_find_by_id_fails_with_not_found() {
        let id = Uuid::new_v4();

        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(products).find_by_id(id).await;

        assert!(matches!(result, Err(CoreError::ProductNotFound(missing)) if missing == id));
    }
}
