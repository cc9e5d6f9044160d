// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use crate::config::RateLimitSettings;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client-IP token bucket. Returns `None` when the settings describe an
/// empty bucket, which the governor builder refuses.
pub fn rate_limit_layer(
    settings: RateLimitSettings,
) -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.per_second);
    builder.burst_size(settings.burst_size);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
