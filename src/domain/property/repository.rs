use crate::domain::errors::DomainResult;
use crate::domain::property::entity::PropertyRecord;
use async_trait::async_trait;

/// Supplier of the full, unfiltered candidate set. Every call returns an
/// independent snapshot in a stable order.
#[async_trait]
pub trait PropertySource: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<PropertyRecord>>;
}
