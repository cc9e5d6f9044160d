use crate::domain::property::{PropertyRecord, PropertyType};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyTypeDto {
    House,
    Apartment,
    Villa,
    Condo,
    Townhouse,
    Commercial,
}

impl From<PropertyType> for PropertyTypeDto {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::House => Self::House,
            PropertyType::Apartment => Self::Apartment,
            PropertyType::Villa => Self::Villa,
            PropertyType::Condo => Self::Condo,
            PropertyType::Townhouse => Self::Townhouse,
            PropertyType::Commercial => Self::Commercial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub property_type: Option<PropertyTypeDto>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub features: Vec<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<PropertyRecord> for PropertyDto {
    fn from(record: PropertyRecord) -> Self {
        Self {
            id: record.id.into(),
            title: record.title,
            description: record.description,
            location: record.location,
            price: record.price,
            property_type: record.property_type.map(Into::into),
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            area: record.area,
            features: record.features,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
