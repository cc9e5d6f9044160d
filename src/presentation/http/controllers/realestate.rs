// src/presentation/http/controllers/realestate.rs
use crate::application::{dto::PropertyPageDto, queries::properties::SearchPropertiesQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::params::{lenient_int, lenient_price};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RealEstateSearchParams {
    /// Zero-based page index. Negative values are treated as 0.
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
    /// Page length, 20 when omitted. Values below 1 are treated as 1.
    #[serde(default, deserialize_with = "lenient_int")]
    pub size: Option<i64>,
    /// Case-insensitive substring of the listing address.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub max_price: Option<f64>,
    /// HOUSE, APARTMENT, VILLA, CONDO, TOWNHOUSE or COMMERCIAL in any case.
    /// Unknown names disable the type filter.
    #[serde(default)]
    pub property_type: Option<String>,
}

impl From<RealEstateSearchParams> for SearchPropertiesQuery {
    fn from(params: RealEstateSearchParams) -> Self {
        Self {
            page: params.page,
            size: params.size,
            location: params.location,
            min_price: params.min_price,
            max_price: params.max_price,
            property_type: params.property_type,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/realestate",
    params(RealEstateSearchParams),
    responses(
        (status = 200, description = "One page of matching listings.", body = PropertyPageDto),
        (status = 500, description = "Listing store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "RealEstate"
)]
pub async fn search_realestate(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RealEstateSearchParams>,
) -> HttpResult<Json<PropertyPageDto>> {
    state
        .services
        .property_queries
        .search_properties(params.into())
        .await
        .into_http()
        .map(Json)
}
