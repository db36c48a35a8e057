pub mod mappers;
pub mod pipeline;
pub mod repositories;

pub use repositories::product_repository::MongoProductRepository;
