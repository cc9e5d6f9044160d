use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub i64);

impl PropertyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "property id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PropertyId> for i64 {
    fn from(value: PropertyId) -> Self {
        value.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Condo,
    Townhouse,
    Commercial,
}

impl PropertyType {
    pub const ALL: [Self; 6] = [
        Self::House,
        Self::Apartment,
        Self::Villa,
        Self::Condo,
        Self::Townhouse,
        Self::Commercial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Apartment => "APARTMENT",
            Self::Villa => "VILLA",
            Self::Condo => "CONDO",
            Self::Townhouse => "TOWNHOUSE",
            Self::Commercial => "COMMERCIAL",
        }
    }

    /// Interpret a caller-supplied type filter. Blank or unknown names mean
    /// "no type filter" instead of an error.
    pub fn parse_filter(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(kind) => Some(kind),
            Err(_) => {
                tracing::debug!(property_type = raw, "ignoring unknown property type filter");
                None
            }
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::Validation(format!("unknown property type: {value}")))
    }
}
