use std::sync::Arc;

use crate::domain::property::PropertySource;

pub struct PropertyQueryService {
    pub(super) source: Arc<dyn PropertySource>,
    pub(super) max_page_size: Option<u32>,
}

impl PropertyQueryService {
    /// Service that honours any requested page size.
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            source,
            max_page_size: None,
        }
    }

    /// Service that caps requested page sizes at `max_page_size` (at least 1).
    pub fn with_max_page_size(source: Arc<dyn PropertySource>, max_page_size: u32) -> Self {
        Self {
            source,
            max_page_size: Some(max_page_size.max(1)),
        }
    }
}
