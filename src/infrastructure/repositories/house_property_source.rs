use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::house::HouseRepository;
use crate::domain::property::{PropertyRecord, PropertySource};
use async_trait::async_trait;
use std::sync::Arc;

/// Property source backed by stored houses, projected on every read.
#[derive(Clone)]
pub struct HousePropertySource {
    houses: Arc<dyn HouseRepository>,
    clock: Arc<dyn Clock>,
}

impl HousePropertySource {
    pub fn new(houses: Arc<dyn HouseRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { houses, clock }
    }
}

#[async_trait]
impl PropertySource for HousePropertySource {
    async fn list_all(&self) -> DomainResult<Vec<PropertyRecord>> {
        let houses = self.houses.find_all().await?;
        let as_of = self.clock.now();
        houses
            .iter()
            .map(|house| {
                PropertyRecord::from_house(house, as_of).map_err(|err| {
                    tracing::error!(
                        house_id = house.id,
                        error = %err,
                        "stored house cannot be projected"
                    );
                    DomainError::Persistence(format!(
                        "stored house {} is invalid: {err}",
                        house.id
                    ))
                })
            })
            .collect()
    }
}
