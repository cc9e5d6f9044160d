// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::properties::PropertyQueryService, domain::property::PropertySource,
};

pub struct ApplicationServices {
    pub property_queries: Arc<PropertyQueryService>,
}

impl ApplicationServices {
    pub fn new(property_source: Arc<dyn PropertySource>, max_page_size: Option<u32>) -> Self {
        let property_queries = Arc::new(match max_page_size {
            Some(max) => PropertyQueryService::with_max_page_size(property_source, max),
            None => PropertyQueryService::new(property_source),
        });

        Self { property_queries }
    }
}
