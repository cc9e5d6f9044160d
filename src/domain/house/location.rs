// src/domain/house/location.rs

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub id: i64,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub zip_postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub school_rating_avg: Option<f64>,
    pub walk_score: Option<i32>,
    pub transit_score: Option<i32>,
}

impl Location {
    /// "street, city, state zip" with missing parts left out.
    pub fn full_address(&self) -> String {
        let mut address = String::new();
        if let Some(street) = &self.street_address {
            address.push_str(street);
        }
        if let Some(city) = &self.city {
            if !address.is_empty() {
                address.push_str(", ");
            }
            address.push_str(city);
        }
        if let Some(state) = &self.state_province {
            if !address.is_empty() {
                address.push_str(", ");
            }
            address.push_str(state);
        }
        if let Some(zip) = &self.zip_postal_code {
            if !address.is_empty() {
                address.push(' ');
            }
            address.push_str(zip);
        }
        address
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_address_joins_present_parts() {
        let location = Location {
            street_address: Some("12 Elm St".into()),
            city: Some("Austin".into()),
            state_province: Some("TX".into()),
            zip_postal_code: Some("78701".into()),
            ..Location::default()
        };
        assert_eq!(location.full_address(), "12 Elm St, Austin, TX 78701");
    }

    #[test]
    fn full_address_skips_missing_parts() {
        let location = Location {
            city: Some("Austin".into()),
            zip_postal_code: Some("78701".into()),
            ..Location::default()
        };
        assert_eq!(location.full_address(), "Austin 78701");
        assert_eq!(Location::default().full_address(), "");
    }

    #[test]
    fn coordinates_need_both_axes() {
        let mut location = Location {
            latitude: Some(30.26),
            ..Location::default()
        };
        assert!(!location.has_coordinates());
        location.longitude = Some(-97.74);
        assert!(location.has_coordinates());
    }
}
