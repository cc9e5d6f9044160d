use crate::domain::errors::DomainResult;
use crate::domain::house::entity::House;
use async_trait::async_trait;

#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// All houses with their location and rating analyses, ordered by id.
    async fn find_all(&self) -> DomainResult<Vec<House>>;
}
