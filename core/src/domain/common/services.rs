use std::sync::Arc;

use crate::domain::{category::ports::CategoryRepository, product::ports::ProductRepository};

#[derive(Clone)]
pub struct Service<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    pub(crate) category_repository: Arc<C>,
    pub(crate) product_repository: Arc<P>,
}

impl<C, P> Service<C, P>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    pub fn new(category_repository: C, product_repository: P) -> Self {
        Self {
            category_repository: Arc::new(category_repository),
            product_repository: Arc::new(product_repository),
        }
    }
}
