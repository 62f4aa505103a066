//! Mock travel-booking API.
//!
//! Five routes: four answer with fixed response templates, one (the airport
//! lookup) is backed by a real handler. [`client::TravelApi`] is the HTTP
//! client the concierge uses to call them.

pub mod airport;
pub mod client;
pub mod mocks;
pub mod server;

pub use client::{ApiError, TravelApi};
