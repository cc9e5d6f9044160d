pub mod criteria;
pub mod entity;
pub mod projection;
pub mod repository;
pub mod search;
pub mod specifications;
pub mod value_objects;

pub use criteria::SearchCriteria;
pub use entity::PropertyRecord;
pub use repository::PropertySource;
pub use search::search_page;
pub use value_objects::{PropertyId, PropertyType};
