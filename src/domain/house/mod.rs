pub mod entity;
pub mod location;
pub mod rating;
pub mod repository;

pub use entity::House;
pub use location::Location;
pub use rating::RatingAnalysis;
pub use repository::HouseRepository;
