// src/domain/property/criteria.rs
use crate::domain::property::entity::PropertyRecord;
use crate::domain::property::specifications::{LocationSpec, PriceRangeSpec, PropertyTypeSpec};
use crate::domain::property::value_objects::PropertyType;

/// Optional filters applied before pagination. Every field set narrows the
/// result; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub property_type: Option<PropertyType>,
}

impl SearchCriteria {
    pub fn no_filter() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn has_filters(&self) -> bool {
        self.location
            .as_deref()
            .is_some_and(|location| !location.trim().is_empty())
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.property_type.is_some()
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        LocationSpec::new(self.location.as_deref()).is_satisfied_by(record)
            && PropertyTypeSpec::new(self.property_type).is_satisfied_by(record)
            && PriceRangeSpec::new(self.min_price, self.max_price).is_satisfied_by(record)
    }
}
