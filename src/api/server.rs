//! HTTP service for the travel routes.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::{airport, mocks};

/// Build the travel API router.
pub fn router() -> Router {
    Router::new()
        .route(mocks::GET_MEMBER.path, get(get_member))
        .route(mocks::GET_REWARD_BALANCE.path, get(get_reward_balance))
        .route("/airport/:city", get(get_airport_code))
        .route(
            mocks::GET_AVAILABLE_FLIGHTS.path,
            get(get_available_flights),
        )
        .route(mocks::BOOK_FLIGHT.path, post(book_flight))
}

/// Bind and serve until shutdown.
pub async fn serve(bind_addr: String) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "travel API listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn get_member(Path(member_number): Path<String>) -> Response {
    tracing::debug!(%member_number, "GET /member");
    mocks::GET_MEMBER.response()
}

async fn get_reward_balance(Path(member_id): Path<String>) -> Response {
    tracing::debug!(%member_id, "GET /rewards/balance");
    mocks::GET_REWARD_BALANCE.response()
}

async fn get_airport_code(Path(city): Path<String>) -> Response {
    tracing::debug!(%city, "GET /airport");
    match airport::lookup(&city) {
        Some(found) => (StatusCode::OK, Json(found)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("No airport found for {city}") })),
        )
            .into_response(),
    }
}

async fn get_available_flights(
    Path((departure_id, arrival_id, date)): Path<(String, String, String)>,
) -> Response {
    tracing::debug!(%departure_id, %arrival_id, %date, "GET /flights");
    mocks::GET_AVAILABLE_FLIGHTS.response()
}

async fn book_flight() -> Response {
    tracing::debug!("POST /flights/bookings");
    mocks::BOOK_FLIGHT.response()
}
