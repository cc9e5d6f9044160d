mod search;
mod service;

pub use search::SearchPropertiesQuery;
pub use service::PropertyQueryService;
