//! End-to-end tests: the travel API service over a real listener, and the
//! concierge pipeline on top of it.

use valise::agent::Dispatcher;
use valise::api::{server, TravelApi};

async fn spawn_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::router()).await.unwrap();
    });
    format!("http://{addr}")
}

fn trace_steps(reply: &valise::agent::AgentReply) -> Vec<String> {
    reply
        .trace
        .iter()
        .filter_map(|entry| entry.get("step").and_then(|step| step.as_str()))
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn member_route_ignores_its_parameter() {
    let base = spawn_api().await;

    for member_number in ["42", "2175107", "nonsense"] {
        let response = reqwest::get(format!("{base}/member/{member_number}"))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let profile: serde_json::Value = response.json().await.unwrap();
        assert_eq!(profile["id"], 2175107);
        assert_eq!(profile["firstName"], "Eric");
    }
}

#[tokio::test]
async fn balance_route_returns_fixed_payload() {
    let base = spawn_api().await;

    let balance: serde_json::Value = reqwest::get(format!("{base}/rewards/balance/7"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(balance["memberId"], 2175107);
    assert_eq!(balance["balance"], 153.87);
}

#[tokio::test]
async fn airport_route_resolves_known_cities() {
    let base = spawn_api().await;

    let airport: serde_json::Value = reqwest::get(format!("{base}/airport/Edmonton"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(airport["city"], "Edmonton");
    assert_eq!(airport["code"], "YEG");
}

#[tokio::test]
async fn airport_route_404s_unknown_cities() {
    let base = spawn_api().await;

    let response = reqwest::get(format!("{base}/airport/Atlantis")).await.unwrap();
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Atlantis"));
}

#[tokio::test]
async fn flights_route_returns_fixed_itineraries() {
    let base = spawn_api().await;

    let results: serde_json::Value = reqwest::get(format!("{base}/flights/YEG/CDG/2024-03-31"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(results.as_array().unwrap().len(), 2);
    assert_eq!(results[0]["id"], 123);
}

#[tokio::test]
async fn booking_route_confirms_with_reference() {
    let base = spawn_api().await;

    let confirmation: serde_json::Value = reqwest::Client::new()
        .post(format!("{base}/flights/bookings"))
        .json(&serde_json::json!({ "memberId": 2175107 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(confirmation["referenceNumber"], "UJH35S");
}

#[tokio::test]
async fn concierge_turn_records_a_trace() {
    let base = spawn_api().await;
    let dispatcher = Dispatcher::new(TravelApi::new(base));

    let reply = dispatcher.handle("What's my rewards balance?").await;

    assert!(reply.content.contains("$153.87"));
    assert_eq!(trace_steps(&reply), ["intent", "request", "response", "done"]);
    assert_eq!(reply.trace[0]["intent"], "reward-balance");
    assert_eq!(reply.trace[1]["path"], "/rewards/balance/2175107");
    assert_eq!(reply.trace[2]["status"], 200);
}

#[tokio::test]
async fn concierge_falls_back_on_unknown_city() {
    let base = spawn_api().await;
    let dispatcher = Dispatcher::new(TravelApi::new(base));

    let reply = dispatcher.handle("What is the airport code for Atlantis?").await;

    assert_eq!(reply.content, "Sorry, please try again later.");
    assert_eq!(
        trace_steps(&reply),
        ["intent", "request", "response", "error", "done"]
    );
    assert_eq!(reply.trace[2]["status"], 404);
}

#[tokio::test]
async fn concierge_help_needs_no_api() {
    // Nothing is listening on the base URL; help never calls out
    let dispatcher = Dispatcher::new(TravelApi::new("http://127.0.0.1:1"));

    let reply = dispatcher.handle("hello there").await;

    assert!(reply.content.starts_with("I can help"));
    assert_eq!(trace_steps(&reply), ["intent", "done"]);
}
