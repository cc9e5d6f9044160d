// src/domain/property/entity.rs
use crate::domain::property::value_objects::{PropertyId, PropertyType};
use chrono::{DateTime, FixedOffset};

/// Read-only listing projection handed to clients. Optional fields stay `None`
/// when the source has no value; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub features: Vec<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}
