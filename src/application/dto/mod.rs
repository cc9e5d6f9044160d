pub mod pagination;
pub mod properties;

pub use pagination::PropertyPageDto;
pub use properties::{PropertyDto, PropertyTypeDto};
