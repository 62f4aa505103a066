//! HTTP client for the travel API.
//!
//! Responses are kept as opaque JSON values; the mock routes own their wire
//! format and the concierge only picks out the fields it presents.

use serde_json::Value;
use thiserror::Error;

/// Errors from travel API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {path}")]
    Status { status: u16, path: String },
}

/// Client for the travel API.
#[derive(Debug, Clone)]
pub struct TravelApi {
    base_url: String,
    http: reqwest::Client,
}

impl TravelApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /member/{memberNumber}
    pub async fn member(&self, member_number: &str) -> Result<Value, ApiError> {
        self.get_json(&format!("/member/{member_number}")).await
    }

    /// GET /rewards/balance/{memberId}
    pub async fn reward_balance(&self, member_id: &str) -> Result<Value, ApiError> {
        self.get_json(&format!("/rewards/balance/{member_id}"))
            .await
    }

    /// GET /airport/{city}
    pub async fn airport_code(&self, city: &str) -> Result<Value, ApiError> {
        // Path segment; multi-word city names need the space encoded
        let city = city.trim().replace(' ', "%20");
        self.get_json(&format!("/airport/{city}")).await
    }

    /// GET /flights/{departureId}/{arrivalId}/{date}
    pub async fn search_flights(
        &self,
        departure_id: &str,
        arrival_id: &str,
        date: &str,
    ) -> Result<Value, ApiError> {
        self.get_json(&format!("/flights/{departure_id}/{arrival_id}/{date}"))
            .await
    }

    /// POST /flights/bookings
    pub async fn book_flight(&self, booking: &Value) -> Result<Value, ApiError> {
        let path = "/flights/bookings";
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(booking).send().await?;
        Self::json_body(path, response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        Self::json_body(path, response).await
    }

    async fn json_body(path: &str, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}
