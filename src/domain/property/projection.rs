// src/domain/property/projection.rs
use crate::domain::errors::DomainResult;
use crate::domain::house::House;
use crate::domain::property::entity::PropertyRecord;
use crate::domain::property::value_objects::{PropertyId, PropertyType};
use chrono::{DateTime, Utc};

const SCORE_THRESHOLD: i32 = 70;
const SCHOOL_RATING_THRESHOLD: f64 = 4.0;
const NEW_CONSTRUCTION_YEARS: i32 = 10;

impl PropertyRecord {
    /// Project a stored house into the client-facing record. `as_of` anchors
    /// the age-derived features; timestamps come from the house itself.
    pub fn from_house(house: &House, as_of: DateTime<Utc>) -> DomainResult<Self> {
        Ok(Self {
            id: PropertyId::new(house.id)?,
            title: house.name.clone(),
            description: describe(house),
            location: house.location.as_ref().map(|l| l.full_address()),
            price: house
                .latest_rating()
                .and_then(|rating| rating.last_sold_price),
            property_type: house.property_type.as_deref().and_then(classify),
            bedrooms: house.num_bedrooms.and_then(|n| u32::try_from(n).ok()),
            bathrooms: house.num_bathrooms.and_then(whole_bathrooms),
            area: house.square_footage.map(f64::from),
            features: features(house, as_of),
            created_at: house.created_at.fixed_offset(),
            updated_at: house.updated_at.fixed_offset(),
        })
    }
}

/// Integer part of a decimal bathroom count. Negative, non-finite or
/// out-of-range counts are treated as unknown.
fn whole_bathrooms(count: f64) -> Option<u32> {
    let whole = count.trunc();
    if !(0.0..=f64::from(u32::MAX)).contains(&whole) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = whole as u32;
    Some(whole)
}

fn classify(raw: &str) -> Option<PropertyType> {
    match raw.parse() {
        Ok(kind) => Some(kind),
        Err(_) => {
            tracing::warn!(property_type = raw, "unknown property type on stored house");
            None
        }
    }
}

fn describe(house: &House) -> String {
    let mut parts = Vec::new();
    if let Some(bedrooms) = house.num_bedrooms {
        parts.push(format!("{bedrooms}-bedroom"));
    }
    if let Some(kind) = &house.property_type {
        parts.push(kind.to_lowercase());
    }
    if let Some(city) = house.location.as_ref().and_then(|l| l.city.as_ref()) {
        parts.push(format!("in {city}"));
    }
    parts.join(" ")
}

fn features(house: &House, as_of: DateTime<Utc>) -> Vec<String> {
    let mut features = Vec::new();
    if let Some(heating) = &house.heating_type {
        features.push(heating.to_lowercase().replace('_', " "));
    }
    if let Some(location) = &house.location {
        if location.walk_score.is_some_and(|s| s > SCORE_THRESHOLD) {
            features.push("walkable".to_string());
        }
        if location.transit_score.is_some_and(|s| s > SCORE_THRESHOLD) {
            features.push("good_transit".to_string());
        }
        if location
            .school_rating_avg
            .is_some_and(|r| r > SCHOOL_RATING_THRESHOLD)
        {
            features.push("good_schools".to_string());
        }
    }
    if house
        .age_in_years(as_of)
        .is_some_and(|age| age < NEW_CONSTRUCTION_YEARS)
    {
        features.push("new_construction".to_string());
    }
    features
}
