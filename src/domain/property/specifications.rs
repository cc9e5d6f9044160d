use crate::domain::property::entity::PropertyRecord;
use crate::domain::property::value_objects::PropertyType;

/// Case-insensitive substring match on the record's location. A blank needle
/// matches everything; a record without a location never matches a needle.
pub struct LocationSpec<'a> {
    needle: Option<&'a str>,
}

impl<'a> LocationSpec<'a> {
    pub fn new(needle: Option<&'a str>) -> Self {
        Self {
            needle: needle.filter(|value| !value.trim().is_empty()),
        }
    }

    pub fn is_satisfied_by(&self, record: &PropertyRecord) -> bool {
        let Some(needle) = self.needle else {
            return true;
        };
        record
            .location
            .as_deref()
            .is_some_and(|location| location.to_lowercase().contains(&needle.to_lowercase()))
    }
}

pub struct PropertyTypeSpec {
    wanted: Option<PropertyType>,
}

impl PropertyTypeSpec {
    pub fn new(wanted: Option<PropertyType>) -> Self {
        Self { wanted }
    }

    pub fn is_satisfied_by(&self, record: &PropertyRecord) -> bool {
        match self.wanted {
            Some(wanted) => record.property_type == Some(wanted),
            None => true,
        }
    }
}

/// Inclusive price bounds. An unpriced record only passes an unbounded query.
pub struct PriceRangeSpec {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRangeSpec {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn is_satisfied_by(&self, record: &PropertyRecord) -> bool {
        let Some(price) = record.price else {
            return !self.is_bounded();
        };
        if self.min.is_some_and(|min| price < min) {
            return false;
        }
        if self.max.is_some_and(|max| price > max) {
            return false;
        }
        true
    }
}
