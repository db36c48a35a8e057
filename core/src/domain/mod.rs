pub mod category;
pub mod common;
pub mod product;
