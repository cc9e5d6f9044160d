// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitSettings};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::realestate,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

pub fn build_router(state: HttpState, config: &AppConfig) -> Router {
    build_router_with_options(state, RouterOptions::from(config))
}

pub fn build_router_with_options(state: HttpState, options: RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/realestate", get(realestate::search_realestate));

    let router = match options.rate_limit {
        Some(settings) => match rate_limit_layer(settings) {
            Some(layer) => router.layer(layer),
            None => {
                tracing::warn!(?settings, "rate limit settings rejected, limiter disabled");
                router
            }
        },
        None => router,
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
