// tests/support/fixtures.rs
use chrono::{DateTime, Duration, FixedOffset};
use once_cell::sync::Lazy;
use realestate_search::domain::property::{PropertyId, PropertyRecord, PropertyType};

/// Deterministic listing timestamp shared by every fixture record.
static FIXED_CREATED_AT: Lazy<DateTime<FixedOffset>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-15T10:30:00+01:00")
        .expect("invalid RFC3339 in tests/support/fixtures.rs")
});

pub fn fixed_created_at() -> DateTime<FixedOffset> {
    *FIXED_CREATED_AT
}

pub fn record(
    id: i64,
    title: &str,
    location: &str,
    price: Option<f64>,
    property_type: PropertyType,
    bedrooms: Option<u32>,
) -> PropertyRecord {
    let created_at = fixed_created_at() + Duration::days(id);
    PropertyRecord {
        id: PropertyId::new(id).expect("fixture ids are positive"),
        title: title.to_string(),
        description: format!("{title} in {location}"),
        location: Some(location.to_string()),
        price,
        property_type: Some(property_type),
        bedrooms,
        bathrooms: bedrooms.map(|b| b.saturating_sub(1).max(1)),
        area: Some(1_200.0 + 100.0 * f64::from(i32::try_from(id).expect("fixture ids are small"))),
        features: vec!["parking".to_string(), "garden".to_string()],
        created_at,
        updated_at: created_at + Duration::days(2),
    }
}

/// Seven priced listings, exactly one of them a HOUSE.
pub fn seven_listings() -> Vec<PropertyRecord> {
    vec![
        record(1, "Modern Family Home", "Austin, TX", Some(350_000.0), PropertyType::House, Some(4)),
        record(2, "Downtown Loft", "Seattle, WA", Some(280_000.0), PropertyType::Apartment, Some(2)),
        record(3, "Beachfront Villa", "Miami, FL", Some(450_000.0), PropertyType::Villa, Some(5)),
        record(4, "Cozy Condo", "Denver, CO", Some(180_000.0), PropertyType::Condo, Some(1)),
        record(5, "Garden Townhouse", "Portland, OR", Some(320_000.0), PropertyType::Townhouse, Some(3)),
        record(6, "Bay View Apartment", "San Francisco, CA", Some(550_000.0), PropertyType::Apartment, Some(2)),
        record(7, "Corner Retail Space", "New York, NY", Some(780_000.0), PropertyType::Commercial, None),
    ]
}

/// The seven listings plus one without a known sale price.
pub fn listings_with_unpriced() -> Vec<PropertyRecord> {
    let mut records = seven_listings();
    records.push(record(8, "Unlisted Cottage", "Boise, ID", None, PropertyType::House, Some(2)));
    records
}

/// `count` generated listings with ids 1..=count, for large-page checks.
pub fn many_listings(count: u16) -> Vec<PropertyRecord> {
    (1..=count)
        .map(|n| {
            record(
                i64::from(n),
                &format!("Listing {n}"),
                "Austin, TX",
                Some(100_000.0 + f64::from(n)),
                PropertyType::Condo,
                Some(2),
            )
        })
        .collect()
}
