// src/domain/house/rating.rs
use chrono::{DateTime, Duration, Utc};

const STALE_AFTER_DAYS: i32 = 90;
const RECENT_WITHIN_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingAnalysis {
    pub id: i64,
    pub house_id: i64,
    pub overall_score: Option<f64>,
    pub user_rating_count: Option<i32>,
    pub price_to_sqft_ratio: Option<f64>,
    pub market_comp_score: Option<f64>,
    pub last_sold_price: Option<f64>,
    pub time_on_market_days: Option<i32>,
    pub rating_timestamp: Option<DateTime<Utc>>,
}

impl RatingAnalysis {
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        self.rating_timestamp
            .is_some_and(|at| at > now - Duration::days(RECENT_WITHIN_DAYS))
    }

    pub fn is_stale(&self) -> bool {
        self.time_on_market_days
            .is_some_and(|days| days > STALE_AFTER_DAYS)
    }

    pub fn rating_description(&self) -> &'static str {
        let Some(score) = self.overall_score else {
            return "No rating";
        };
        match score {
            s if s >= 4.5 => "Excellent",
            s if s >= 4.0 => "Very Good",
            s if s >= 3.5 => "Good",
            s if s >= 3.0 => "Fair",
            s if s >= 2.0 => "Poor",
            _ => "Very Poor",
        }
    }
}
