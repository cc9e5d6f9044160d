// src/domain/house/entity.rs
use crate::domain::house::location::Location;
use crate::domain::house::rating::RatingAnalysis;
use chrono::{DateTime, Datelike, Utc};

/// A stored listing as the relational source knows it, before it is
/// projected into the client-facing `PropertyRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub id: i64,
    pub location: Option<Location>,
    pub name: String,
    pub listing_status: String,
    pub year_built: Option<i32>,
    pub square_footage: Option<i32>,
    pub num_bedrooms: Option<i32>,
    pub num_bathrooms: Option<f64>,
    pub property_type: Option<String>,
    pub heating_type: Option<String>,
    pub rating_analyses: Vec<RatingAnalysis>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl House {
    pub fn age_in_years(&self, as_of: DateTime<Utc>) -> Option<i32> {
        self.year_built.map(|year| as_of.year() - year)
    }

    pub fn is_for_sale(&self) -> bool {
        self.listing_status.eq_ignore_ascii_case("FOR_SALE")
            || self.listing_status.eq_ignore_ascii_case("ACTIVE")
    }

    /// Newest analysis by timestamp; analyses without a timestamp rank below
    /// any dated one. Ties keep the earliest analysis in storage order.
    pub fn latest_rating(&self) -> Option<&RatingAnalysis> {
        self.rating_analyses
            .iter()
            .fold(None, |best: Option<&RatingAnalysis>, analysis| match best {
                Some(current) if analysis.rating_timestamp <= current.rating_timestamp => {
                    Some(current)
                }
                _ => Some(analysis),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn analysis(id: i64, timestamp: Option<DateTime<Utc>>) -> RatingAnalysis {
        RatingAnalysis {
            id,
            house_id: 1,
            overall_score: Some(4.0),
            user_rating_count: None,
            price_to_sqft_ratio: None,
            market_comp_score: None,
            last_sold_price: Some(250_000.0),
            time_on_market_days: None,
            rating_timestamp: timestamp,
        }
    }

    fn house() -> House {
        let created = at("2024-01-01T00:00:00Z");
        House {
            id: 1,
            location: None,
            name: "Elm cottage".into(),
            listing_status: "for_sale".into(),
            year_built: Some(2018),
            square_footage: Some(1200),
            num_bedrooms: Some(2),
            num_bathrooms: Some(1.5),
            property_type: Some("House".into()),
            heating_type: None,
            rating_analyses: vec![],
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn latest_rating_prefers_newest_timestamp() {
        let now = at("2024-05-01T00:00:00Z");
        let mut house = house();
        house.rating_analyses = vec![
            analysis(1, Some(now - Duration::days(10))),
            analysis(2, None),
            analysis(3, Some(now)),
        ];
        assert_eq!(house.latest_rating().map(|r| r.id), Some(3));
    }

    #[test]
    fn undated_rating_is_used_only_when_nothing_is_dated() {
        let mut house = house();
        assert!(house.latest_rating().is_none());
        house.rating_analyses = vec![analysis(2, None)];
        assert_eq!(house.latest_rating().map(|r| r.id), Some(2));
    }

    #[test]
    fn equal_timestamps_keep_first_stored_rating() {
        let mut house = house();
        house.rating_analyses = vec![analysis(1, None), analysis(2, None)];
        assert_eq!(house.latest_rating().map(|r| r.id), Some(1));

        let now = at("2024-05-01T00:00:00Z");
        house.rating_analyses = vec![
            analysis(4, Some(now - Duration::days(3))),
            analysis(5, Some(now)),
            analysis(6, Some(now)),
        ];
        assert_eq!(house.latest_rating().map(|r| r.id), Some(5));
    }

    #[test]
    fn age_is_measured_against_given_date() {
        let house = house();
        assert_eq!(house.age_in_years(at("2024-03-01T00:00:00Z")), Some(6));
        let unknown = House {
            year_built: None,
            ..house
        };
        assert_eq!(unknown.age_in_years(at("2024-03-01T00:00:00Z")), None);
    }

    #[test]
    fn for_sale_accepts_active_statuses() {
        let mut house = house();
        assert!(house.is_for_sale());
        house.listing_status = "ACTIVE".into();
        assert!(house.is_for_sale());
        house.listing_status = "SOLD".into();
        assert!(!house.is_for_sale());
    }
}
