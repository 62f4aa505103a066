//! Concierge turn pipeline.
//!
//! Parses a prompt into an intent, calls the travel API, and assembles the
//! reply text plus the per-step trace the debug panel shows. A turn that
//! cannot be served answers with the fallback reply instead of surfacing
//! an error to the conversation.

use std::future::Future;
use std::time::Instant;

use serde_json::{json, Value};

use super::intent::{self, Intent};
use crate::api::{ApiError, TravelApi};

const FALLBACK_REPLY: &str = "Sorry, please try again later.";

const HELP_REPLY: &str = "\
I can help with your travel plans. Try:
• What is the airport code for Edmonton?
• What's my rewards balance?
• Show my member profile
• Find flights from YEG to CDG on 2024-03-31
• Book the first itinerary";

/// A finished concierge turn.
#[derive(Debug, Clone)]
pub struct AgentReply {
    pub content: String,
    /// Diagnostic entries recorded while producing the reply
    pub trace: Vec<Value>,
}

/// Routes prompts to travel API calls.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    api: TravelApi,
}

impl Dispatcher {
    pub fn new(api: TravelApi) -> Self {
        Self { api }
    }

    /// Run one turn. Never fails: API errors become the fallback reply,
    /// with the failure recorded in the trace.
    pub async fn handle(&self, prompt: &str) -> AgentReply {
        let started = Instant::now();
        let intent = intent::parse(prompt);
        tracing::debug!(intent = intent.name(), "dispatching turn");

        let mut trace = vec![json!({ "step": "intent", "intent": intent.name() })];
        let content = match self.execute(&intent, &mut trace).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, "concierge turn failed");
                trace.push(json!({ "step": "error", "message": err.to_string() }));
                FALLBACK_REPLY.to_string()
            }
        };
        trace.push(json!({
            "step": "done",
            "elapsed_ms": started.elapsed().as_millis() as u64,
        }));

        AgentReply { content, trace }
    }

    async fn execute(&self, intent: &Intent, trace: &mut Vec<Value>) -> Result<String, ApiError> {
        match intent {
            Intent::MemberLookup { member_number } => {
                let path = format!("/member/{member_number}");
                let profile = self
                    .call(trace, "GET", &path, self.api.member(member_number))
                    .await?;
                Ok(describe_member(&profile))
            }
            Intent::RewardBalance { member_id } => {
                let path = format!("/rewards/balance/{member_id}");
                let balance = self
                    .call(trace, "GET", &path, self.api.reward_balance(member_id))
                    .await?;
                Ok(describe_balance(&balance))
            }
            Intent::AirportLookup { city } => {
                let path = format!("/airport/{city}");
                let airport = self
                    .call(trace, "GET", &path, self.api.airport_code(city))
                    .await?;
                Ok(describe_airport(&airport))
            }
            Intent::FlightSearch {
                departure_id,
                arrival_id,
                date,
            } => {
                let path = format!("/flights/{departure_id}/{arrival_id}/{date}");
                let results = self
                    .call(
                        trace,
                        "GET",
                        &path,
                        self.api.search_flights(departure_id, arrival_id, date),
                    )
                    .await?;
                Ok(describe_flights(&results))
            }
            Intent::BookFlight => {
                let booking = json!({ "memberId": 2175107 });
                let confirmation = self
                    .call(
                        trace,
                        "POST",
                        "/flights/bookings",
                        self.api.book_flight(&booking),
                    )
                    .await?;
                Ok(describe_booking(&confirmation))
            }
            Intent::Help => Ok(HELP_REPLY.to_string()),
        }
    }

    /// Run one API call, recording request and response trace entries.
    async fn call<F>(
        &self,
        trace: &mut Vec<Value>,
        method: &str,
        path: &str,
        request: F,
    ) -> Result<Value, ApiError>
    where
        F: Future<Output = Result<Value, ApiError>>,
    {
        trace.push(json!({ "step": "request", "method": method, "path": path }));
        let started = Instant::now();
        let result = request.await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                trace.push(json!({ "step": "response", "status": 200, "elapsed_ms": elapsed_ms }));
            }
            Err(ApiError::Status { status, .. }) => {
                trace.push(
                    json!({ "step": "response", "status": status, "elapsed_ms": elapsed_ms }),
                );
            }
            Err(_) => {}
        }
        result
    }
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("?")
        .to_string()
}

fn describe_member(profile: &Value) -> String {
    let first = text(profile, "firstName");
    let last = text(profile, "lastName");
    let city = text(profile, "city");
    let province = text(profile, "province");
    let card = profile
        .pointer("/creditCard/type")
        .and_then(Value::as_str)
        .unwrap_or("no card");
    let id = profile
        .get("id")
        .and_then(Value::as_i64)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!("Member {id}: {first} {last}, {city} {province}. {card} on file.")
}

fn describe_balance(balance: &Value) -> String {
    let member = balance
        .get("memberId")
        .and_then(Value::as_i64)
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let amount = balance.get("balance").and_then(Value::as_f64).unwrap_or(0.0);
    format!("Member {member} has a reward balance of ${amount:.2}.")
}

fn describe_airport(airport: &Value) -> String {
    let city = text(airport, "city");
    let code = text(airport, "code");
    format!("The airport code for {city} is {code}.")
}

fn describe_flights(results: &Value) -> String {
    let Some(itineraries) = results.as_array() else {
        return "No flights found.".to_string();
    };
    if itineraries.is_empty() {
        return "No flights found.".to_string();
    }

    let mut lines = vec![format!("Found {} itineraries:", itineraries.len())];
    for itinerary in itineraries {
        let id = itinerary
            .get("id")
            .and_then(Value::as_i64)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        let legs = itinerary
            .get("flights")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        // Mock payload spells the departure key in lowercase
        let origin = legs
            .first()
            .map(|leg| text(leg, "departureid"))
            .unwrap_or_else(|| "?".to_string());
        let destination = legs
            .last()
            .map(|leg| text(leg, "arrivalId"))
            .unwrap_or_else(|| "?".to_string());
        let total: f64 = legs
            .iter()
            .filter_map(|leg| leg.get("price").and_then(Value::as_f64))
            .sum();
        lines.push(format!(
            "• #{id} {origin} → {destination}, {} leg(s), ${total:.2} total",
            legs.len()
        ));
    }
    lines.join("\n")
}

fn describe_booking(confirmation: &Value) -> String {
    let reference = text(confirmation, "referenceNumber");
    format!("Booking confirmed. Reference number {reference}.")
}
