pub mod errors;
pub mod house;
pub mod pagination;
pub mod property;
