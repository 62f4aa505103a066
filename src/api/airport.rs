//! Airport code lookup — the one route backed by a real handler.

use serde::{Deserialize, Serialize};

/// A resolved airport code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportCode {
    pub city: String,
    pub code: String,
}

/// City → IATA code table.
const AIRPORTS: &[(&str, &str)] = &[
    ("calgary", "YYC"),
    ("edmonton", "YEG"),
    ("halifax", "YHZ"),
    ("london", "LHR"),
    ("montreal", "YUL"),
    ("new york", "JFK"),
    ("ottawa", "YOW"),
    ("paris", "CDG"),
    ("tokyo", "NRT"),
    ("toronto", "YYZ"),
    ("vancouver", "YVR"),
    ("winnipeg", "YWG"),
];

/// Look up the airport code for a city, case-insensitively.
pub fn lookup(city: &str) -> Option<AirportCode> {
    let needle = city.trim().to_lowercase();
    AIRPORTS
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, code)| AirportCode {
            city: city.trim().to_string(),
            code: (*code).to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city() {
        let airport = lookup("Edmonton").unwrap();
        assert_eq!(airport.code, "YEG");
        assert_eq!(airport.city, "Edmonton");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("PARIS").unwrap().code, "CDG");
        assert_eq!(lookup("paris").unwrap().code, "CDG");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(lookup("  Toronto ").unwrap().code, "YYZ");
    }

    #[test]
    fn unknown_city_is_none() {
        assert!(lookup("Atlantis").is_none());
    }
}
