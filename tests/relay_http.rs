//! Relay chain behaviour over real HTTP.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use status_radar::relay::{FetchError, HttpTransport, Relay, RelayChain, RelayError, Transport};
use status_radar::status::normalize;
use status_radar::ServiceStatus;

const TARGET: &str = "https://status.example.com/api/v2/status.json";

fn chain(relays: Vec<Relay>, timeout: Duration) -> RelayChain {
    RelayChain::new(relays, Arc::new(HttpTransport::new().unwrap()), timeout)
}

fn document(indicator: &str) -> serde_json::Value {
    json!({ "status": { "indicator": indicator, "description": "From relay" } })
}

#[tokio::test]
async fn test_transport_maps_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("none")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/unavailable"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();

    let ok = transport.get_json(&format!("{}/ok", server.uri())).await.unwrap();
    assert_eq!(ok["status"]["indicator"], "none");

    let err = transport
        .get_json(&format!("{}/unavailable", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(503));

    let err = transport.get_json(&format!("{}/html", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_first_relay_error_falls_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/first"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/second"))
        .and(query_param("url", TARGET))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("minor")))
        .expect(1)
        .mount(&server)
        .await;

    let chain = chain(
        vec![
            Relay::new("first", format!("{}/first?{{url}}", server.uri())),
            Relay::new("second", format!("{}/second?url={{url}}", server.uri())),
        ],
        Duration::from_secs(5),
    );

    let normalized = chain.fetch_with(TARGET, |body| normalize(&body)).await.unwrap();
    assert_eq!(normalized.status, ServiceStatus::Degraded);
    assert_eq!(normalized.message, "From relay");
}

#[tokio::test]
async fn test_slow_relay_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(document("none"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document("major")))
        .mount(&server)
        .await;

    let chain = chain(
        vec![
            Relay::new("slow", format!("{}/slow?url={{url}}", server.uri())),
            Relay::new("fast", format!("{}/fast?url={{url}}", server.uri())),
        ],
        Duration::from_millis(200),
    );

    let started = Instant::now();
    let normalized = chain.fetch_with(TARGET, |body| normalize(&body)).await.unwrap();
    assert_eq!(normalized.status, ServiceStatus::Down);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_envelope_is_unwrapped() {
    let server = MockServer::start().await;
    let inner = document("none").to_string();
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("url", TARGET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contents": inner })))
        .mount(&server)
        .await;

    let chain = chain(
        vec![Relay::new("allorigins", format!("{}/get?url={{url}}", server.uri()))],
        Duration::from_secs(5),
    );

    let normalized = chain.fetch_with(TARGET, |body| normalize(&body)).await.unwrap();
    assert_eq!(normalized.status, ServiceStatus::Operational);
}

#[tokio::test]
async fn test_exhaustion_lists_every_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/junk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "contents": null })))
        .mount(&server)
        .await;

    let chain = chain(
        vec![
            Relay::new("limited", format!("{}/limited?{{url}}", server.uri())),
            Relay::new("junk", format!("{}/junk?{{url}}", server.uri())),
        ],
        Duration::from_secs(5),
    );

    let RelayError::Exhausted(failures) = chain
        .fetch_with(TARGET, |body| normalize(&body))
        .await
        .unwrap_err();

    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].relay, "limited");
    assert_eq!(failures[0].error, FetchError::Status(429));
    assert_eq!(failures[1].error, FetchError::Rejected);
}
