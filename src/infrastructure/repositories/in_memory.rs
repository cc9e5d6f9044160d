use crate::domain::errors::DomainResult;
use crate::domain::property::{PropertyRecord, PropertySource};
use async_trait::async_trait;
use std::sync::Arc;

/// Fixed, immutable record set. Each read hands out a fresh copy.
#[derive(Clone, Default)]
pub struct InMemoryPropertySource {
    records: Arc<[PropertyRecord]>,
}

impl InMemoryPropertySource {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

#[async_trait]
impl PropertySource for InMemoryPropertySource {
    async fn list_all(&self) -> DomainResult<Vec<PropertyRecord>> {
        Ok(self.records.to_vec())
    }
}
