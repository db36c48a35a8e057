pub mod mappers;
pub mod repositories;

pub use repositories::category_repository::MongoCategoryRepository;
