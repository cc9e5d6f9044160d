// tests/support/sources.rs
use super::fixtures::fixed_created_at;
use async_trait::async_trait;
use chrono::Utc;
use realestate_search::domain::errors::{DomainError, DomainResult};
use realestate_search::domain::house::{House, HouseRepository};
use realestate_search::domain::property::{PropertyRecord, PropertySource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source whose backing store is unreachable.
pub struct FailingSource;

#[async_trait]
impl PropertySource for FailingSource {
    async fn list_all(&self) -> DomainResult<Vec<PropertyRecord>> {
        Err(DomainError::Persistence("listing store unavailable".into()))
    }
}

/// Wraps fixed records and counts how often it was read.
pub struct CountingSource {
    records: Vec<PropertyRecord>,
    reads: AtomicUsize,
}

impl CountingSource {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PropertySource for CountingSource {
    async fn list_all(&self) -> DomainResult<Vec<PropertyRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// House store returning a fixed list, projected through `HousePropertySource`.
pub struct StoredHouses(pub Vec<House>);

#[async_trait]
impl HouseRepository for StoredHouses {
    async fn find_all(&self) -> DomainResult<Vec<House>> {
        Ok(self.0.clone())
    }
}

/// A minimal stored house with the given id.
pub fn stored_house(id: i64) -> House {
    let stored = fixed_created_at().with_timezone(&Utc);
    House {
        id,
        location: None,
        name: format!("Stored house {id}"),
        listing_status: "FOR_SALE".into(),
        year_built: Some(2001),
        square_footage: Some(1_400),
        num_bedrooms: Some(3),
        num_bathrooms: Some(2.0),
        property_type: Some("House".into()),
        heating_type: None,
        rating_analyses: vec![],
        created_at: stored,
        updated_at: stored,
    }
}
