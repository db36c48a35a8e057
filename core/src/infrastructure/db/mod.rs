pub mod criteria;
pub mod mappers;
pub mod mongo;
