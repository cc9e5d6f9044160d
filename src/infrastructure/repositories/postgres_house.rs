// src/infrastructure/repositories/postgres_house.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::house::{House, HouseRepository, Location, RatingAnalysis};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

const SELECT_HOUSES: &str = "SELECT h.house_id::int8 AS id, h.name, h.listing_status, h.year_built,
        h.square_footage, h.num_bedrooms, h.num_bathrooms::float8 AS num_bathrooms,
        h.property_type, h.heating_type, h.created_at, h.updated_at,
        l.location_id::int8 AS location_id, l.street_address, l.city, l.state_province,
        l.zip_postal_code, l.latitude::float8 AS latitude, l.longitude::float8 AS longitude,
        l.school_rating_avg::float8 AS school_rating_avg, l.walk_score, l.transit_score
     FROM house h
     LEFT JOIN location l ON l.location_id = h.location_id
     ORDER BY h.house_id";

const SELECT_RATINGS: &str = "SELECT analysis_id::int8 AS id, house_id::int8 AS house_id,
        overall_score::float8 AS overall_score, user_rating_count,
        price_to_sqft_ratio::float8 AS price_to_sqft_ratio,
        market_comp_score::float8 AS market_comp_score,
        last_sold_price::float8 AS last_sold_price, time_on_market_days, rating_timestamp
     FROM rating_analysis
     WHERE house_id::int8 = ANY($1)
     ORDER BY analysis_id";

#[derive(Clone)]
pub struct PostgresHouseRepository {
    pool: PgPool,
}

impl PostgresHouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HouseRow {
    id: i64,
    name: String,
    listing_status: String,
    year_built: Option<i32>,
    square_footage: Option<i32>,
    num_bedrooms: Option<i32>,
    num_bathrooms: Option<f64>,
    property_type: Option<String>,
    heating_type: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    location_id: Option<i64>,
    street_address: Option<String>,
    city: Option<String>,
    state_province: Option<String>,
    zip_postal_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    school_rating_avg: Option<f64>,
    walk_score: Option<i32>,
    transit_score: Option<i32>,
}

impl HouseRow {
    fn into_house(self, rating_analyses: Vec<RatingAnalysis>) -> House {
        let location = self.location_id.map(|id| Location {
            id,
            street_address: self.street_address,
            city: self.city,
            state_province: self.state_province,
            zip_postal_code: self.zip_postal_code,
            latitude: self.latitude,
            longitude: self.longitude,
            school_rating_avg: self.school_rating_avg,
            walk_score: self.walk_score,
            transit_score: self.transit_score,
        });

        House {
            id: self.id,
            location,
            name: self.name,
            listing_status: self.listing_status,
            year_built: self.year_built,
            square_footage: self.square_footage,
            num_bedrooms: self.num_bedrooms,
            num_bathrooms: self.num_bathrooms,
            property_type: self.property_type,
            heating_type: self.heating_type,
            rating_analyses,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RatingRow {
    id: i64,
    house_id: i64,
    overall_score: Option<f64>,
    user_rating_count: Option<i32>,
    price_to_sqft_ratio: Option<f64>,
    market_comp_score: Option<f64>,
    last_sold_price: Option<f64>,
    time_on_market_days: Option<i32>,
    rating_timestamp: Option<DateTime<Utc>>,
}

impl From<RatingRow> for RatingAnalysis {
    fn from(row: RatingRow) -> Self {
        Self {
            id: row.id,
            house_id: row.house_id,
            overall_score: row.overall_score,
            user_rating_count: row.user_rating_count,
            price_to_sqft_ratio: row.price_to_sqft_ratio,
            market_comp_score: row.market_comp_score,
            last_sold_price: row.last_sold_price,
            time_on_market_days: row.time_on_market_days,
            rating_timestamp: row.rating_timestamp,
        }
    }
}

#[async_trait]
impl HouseRepository for PostgresHouseRepository {
    async fn find_all(&self) -> DomainResult<Vec<House>> {
        let rows = sqlx::query_as::<_, HouseRow>(SELECT_HOUSES)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if rows.is_empty() {
            tracing::debug!("no houses stored");
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let ratings = sqlx::query_as::<_, RatingRow>(SELECT_RATINGS)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut by_house: HashMap<i64, Vec<RatingAnalysis>> = HashMap::new();
        for rating in ratings {
            by_house
                .entry(rating.house_id)
                .or_default()
                .push(rating.into());
        }

        let houses: Vec<House> = rows
            .into_iter()
            .map(|row| {
                let analyses = by_house.remove(&row.id).unwrap_or_default();
                row.into_house(analyses)
            })
            .collect();

        tracing::debug!(count = houses.len(), "loaded houses");
        Ok(houses)
    }
}
