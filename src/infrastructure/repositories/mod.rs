// src/infrastructure/repositories/mod.rs
mod error;
mod house_property_source;
mod in_memory;
mod postgres_house;

pub use error::map_sqlx;
pub use house_property_source::HousePropertySource;
pub use in_memory::InMemoryPropertySource;
pub use postgres_house::PostgresHouseRepository;
