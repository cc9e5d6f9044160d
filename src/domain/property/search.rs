// src/domain/property/search.rs
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::property::criteria::SearchCriteria;
use crate::domain::property::entity::PropertyRecord;

/// Filter `records` by `criteria` and cut out the page described by `request`.
///
/// Relative order of `records` is preserved and `total_elements` counts every
/// match before slicing. The input is only read; matching records are cloned
/// into the result.
pub fn search_page(
    criteria: &SearchCriteria,
    request: PageRequest,
    records: &[PropertyRecord],
) -> Page<PropertyRecord> {
    let filtered: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    Page::slice(filtered, request)
}
