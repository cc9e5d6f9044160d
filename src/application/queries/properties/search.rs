use super::PropertyQueryService;
use crate::{
    application::{dto::PropertyPageDto, error::ApplicationResult},
    domain::{
        pagination::{DEFAULT_PAGE_SIZE, PageRequest},
        property::{PropertyType, SearchCriteria, search_page},
    },
};

/// Raw search parameters as the transport received them. Nothing here has
/// been validated yet.
#[derive(Debug, Clone, Default)]
pub struct SearchPropertiesQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<String>,
}

impl SearchPropertiesQuery {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            location: self
                .location
                .clone()
                .filter(|location| !location.trim().is_empty()),
            min_price: self.min_price,
            max_price: self.max_price,
            property_type: PropertyType::parse_filter(self.property_type.as_deref()),
        }
    }
}

impl PropertyQueryService {
    pub async fn search_properties(
        &self,
        query: SearchPropertiesQuery,
    ) -> ApplicationResult<PropertyPageDto> {
        tracing::info!(
            page = ?query.page,
            size = ?query.size,
            location = ?query.location,
            min_price = ?query.min_price,
            max_price = ?query.max_price,
            property_type = ?query.property_type,
            "searching properties"
        );

        let request = self.page_request(&query);
        let criteria = query.criteria();

        let records = self.source.list_all().await?;
        let page = search_page(&criteria, request, &records);

        tracing::debug!(
            candidates = records.len(),
            matched = page.total_elements(),
            returned = page.number_of_elements(),
            "property search complete"
        );

        Ok(page.into())
    }

    pub(super) fn page_request(&self, query: &SearchPropertiesQuery) -> PageRequest {
        let size = query.size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE));
        let size = self
            .max_page_size
            .map_or(size, |max| size.min(i64::from(max)));
        PageRequest::new(query.page.unwrap_or(0), size)
    }
}
