use crate::domain::pagination::Page;
use crate::domain::property::PropertyRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::properties::PropertyDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPageDto {
    pub content: Vec<PropertyDto>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<PropertyRecord>> for PropertyPageDto {
    fn from(page: Page<PropertyRecord>) -> Self {
        let page = page.map(PropertyDto::from);
        Self {
            page: page.page(),
            size: page.size(),
            total_elements: page.total_elements(),
            total_pages: page.total_pages(),
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            content: page.into_content(),
        }
    }
}
