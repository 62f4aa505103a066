//! Fixed response templates for the mock routes.
//!
//! Each mock answers with the same payload regardless of input. The bodies
//! are carried as opaque JSON documents, not typed structs: a mock is a
//! stand-in for a future backend, and its wire format (field names
//! included) belongs to that backend, not to this crate.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// A declaratively configured mock route.
#[derive(Debug, Clone, Copy)]
pub struct MockRoute {
    pub method: &'static str,
    /// Route template in axum syntax
    pub path: &'static str,
    pub status: u16,
    /// Response template, served verbatim
    pub body: &'static str,
}

impl MockRoute {
    /// Build the fixed response this mock always answers with.
    pub fn response(&self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// GET /member/{memberNumber} — member profile.
///
/// Field names (`exiryDate` included) match the upstream payload.
pub const GET_MEMBER: MockRoute = MockRoute {
    method: "GET",
    path: "/member/:member_number",
    status: 200,
    body: r#"{"id": 2175107, "firstName": "Eric", "lastName": "Bach", "addressLine1": "123 Main St", "addressLine2": "Apt 101", "city": "Edmonton", "province": "AB", "postalCode": "T5T5T5", "creditCard":{"name":"Eric Bach","number":"4216*******0823","exiryDate":"06/28","type":"VISA"}}"#,
};

/// GET /rewards/balance/{memberId} — reward dollar balance.
pub const GET_REWARD_BALANCE: MockRoute = MockRoute {
    method: "GET",
    path: "/rewards/balance/:member_id",
    status: 200,
    body: r#"{"memberId": 2175107, "balance": 153.87}"#,
};

/// GET /flights/{departureId}/{arrivalId}/{date} — available itineraries.
pub const GET_AVAILABLE_FLIGHTS: MockRoute = MockRoute {
    method: "GET",
    path: "/flights/:departure_id/:arrival_id/:date",
    status: 200,
    body: r#"[{"id":123,"flights":[{"id":"WS258","airline":"WestJet","departureid":"YEG","departureTime":"2024-03-31T23:00:00:00Z","arrivalId":"YYC","arrivalTime":"2024-03-31T23:45:00Z","price":234.24},{"id":"WS19","airline":"WestJet","departureid":"YYC","departureTime":"2024-04-01T03:19:00:00Z","arrivalId":"CDG","arrivalTime":"2024-04-01T11:12:00Z","price":383.19}]},{"id":346,"flights":[{"id":"WS239","airline":"WestJet","departureid":"YEG","departureTime":"2024-03-31T12:15:00:00Z","arrivalId":"YYC","arrivalTime":"2024-03-31T13:00:00Z","price":184.24},{"id":"WS19","airline":"WestJet","departureid":"YYC","departureTime":"2024-04-01T03:19:00:00Z","arrivalId":"CDG","arrivalTime":"2024-04-01T11:12:00Z","price":383.19}]}]"#,
};

/// POST /flights/bookings — booking confirmation.
pub const BOOK_FLIGHT: MockRoute = MockRoute {
    method: "POST",
    path: "/flights/bookings",
    status: 200,
    body: r#"{"referenceNumber": "UJH35S"}"#,
};

/// All mock routes, for wiring and for payload checks.
pub const ALL: &[&MockRoute] = &[
    &GET_MEMBER,
    &GET_REWARD_BALANCE,
    &GET_AVAILABLE_FLIGHTS,
    &BOOK_FLIGHT,
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn every_template_is_valid_json() {
        for route in ALL {
            let parsed: Result<Value, _> = serde_json::from_str(route.body);
            assert!(parsed.is_ok(), "invalid template for {}", route.path);
        }
    }

    #[test]
    fn member_profile_fields() {
        let profile: Value = serde_json::from_str(GET_MEMBER.body).unwrap();
        assert_eq!(profile["id"], 2175107);
        assert_eq!(profile["firstName"], "Eric");
        assert_eq!(profile["creditCard"]["type"], "VISA");
    }

    #[test]
    fn balance_matches_member() {
        let balance: Value = serde_json::from_str(GET_REWARD_BALANCE.body).unwrap();
        assert_eq!(balance["memberId"], 2175107);
        assert_eq!(balance["balance"], 153.87);
    }

    #[test]
    fn flight_results_are_itinerary_list() {
        let flights: Value = serde_json::from_str(GET_AVAILABLE_FLIGHTS.body).unwrap();
        let itineraries = flights.as_array().unwrap();
        assert_eq!(itineraries.len(), 2);
        for itinerary in itineraries {
            assert!(itinerary["id"].is_number());
            assert!(!itinerary["flights"].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn booking_has_reference_number() {
        let booking: Value = serde_json::from_str(BOOK_FLIGHT.body).unwrap();
        assert_eq!(booking["referenceNumber"], "UJH35S");
    }
}
