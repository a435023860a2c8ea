//! End-to-end monitor runs against local status backends.

use std::collections::HashMap;
use std::sync::Arc;

use status_radar::aggregate::FeedItem;
use status_radar::config::loader::parse_config;
use status_radar::config::{RelayConfig, ServiceConfig};
use status_radar::lifecycle::build_monitor;
use status_radar::monitor::{MonitorError, NoopObserver};
use status_radar::registry::MockProfile;
use status_radar::{RadarConfig, ServiceStatus};

mod common;

fn relay(name: &str, template: String) -> RelayConfig {
    RelayConfig {
        name: name.to_string(),
        url_template: template,
    }
}

fn service(id: &str, endpoint_url: String) -> ServiceConfig {
    ServiceConfig {
        id: id.to_string(),
        name: id.to_uppercase(),
        category: "Test".to_string(),
        description: String::new(),
        endpoint_url,
        homepage_url: String::new(),
    }
}

fn pinned_profile() -> MockProfile {
    MockProfile {
        base_latency_ms: 100,
        variance_ms: 0,
        up_probability: 1.0,
    }
}

#[tokio::test]
async fn test_live_results_after_dead_relay() {
    let backend = common::start_status_backend(|target| async move {
        if target.starts_with("/alpha") {
            (200, common::status_document("minor", "Minor Service Outage"))
        } else {
            (200, common::status_document("none", "All Systems Operational"))
        }
    })
    .await;
    let dead = common::dead_address().await;

    let mut config = RadarConfig::default();
    config.relays = vec![
        relay("dead", format!("http://{}/?{{url}}", dead)),
        relay("direct", "{raw}".to_string()),
    ];
    config.services = vec![
        service("alpha", format!("http://{}/alpha/api/v2/status.json", backend)),
        service("beta", format!("http://{}/beta/api/v2/status.json", backend)),
    ];
    config.mock_profiles = HashMap::new();

    let monitor = build_monitor(&config, Arc::new(NoopObserver)).unwrap();
    let report = monitor.refresh_all().await.unwrap();

    assert_eq!(report.accepted, 2);
    assert_eq!(report.simulated, 0);
    assert_eq!(report.summary.operational, 1);
    assert_eq!(report.summary.degraded, 1);
    assert_eq!(report.summary.checked, 2);

    let alpha = monitor.board().latest("alpha").unwrap();
    assert_eq!(alpha.status(), ServiceStatus::Degraded);
    assert_eq!(alpha.message(), "Minor Service Outage");
    assert!(!alpha.is_simulated());

    let snapshot = monitor.snapshot();
    assert_eq!(
        snapshot.feed[0],
        FeedItem::Issue {
            service_id: "alpha".into(),
            name: "ALPHA".into(),
            status: ServiceStatus::Degraded,
            message: "Minor Service Outage".into(),
        }
    );
}

#[tokio::test]
async fn test_envelope_relay() {
    let backend = common::start_status_backend(|target| async move {
        if target.starts_with("/get?url=") {
            let inner = common::status_document("none", "OK");
            (200, serde_json::json!({ "contents": inner }).to_string())
        } else {
            (404, "{}".to_string())
        }
    })
    .await;

    let mut config = RadarConfig::default();
    config.relays = vec![relay("envelope", format!("http://{}/get?url={{url}}", backend))];
    config.services = vec![service("svc", "https://status.example.com/api/v2/status.json".into())];
    config.mock_profiles = HashMap::new();

    let monitor = build_monitor(&config, Arc::new(NoopObserver)).unwrap();
    let result = monitor.check_service("svc").await.unwrap();

    assert_eq!(result.status(), ServiceStatus::Operational);
    assert_eq!(result.message(), "OK");
    assert!(!result.is_simulated());
}

#[tokio::test]
async fn test_unusable_relays_fall_back_to_simulation() {
    let backend = common::start_status_backend(|target| async move {
        if target.starts_with("/broken") {
            (503, "{}".to_string())
        } else {
            // parses as JSON but carries no status indicator
            (200, r#"{"page":{}}"#.to_string())
        }
    })
    .await;
    let dead = common::dead_address().await;

    let mut config = RadarConfig::default();
    config.relays = vec![
        relay("dead", format!("http://{}/?{{url}}", dead)),
        relay("broken", format!("http://{}/broken?{{url}}", backend)),
        relay("empty", format!("http://{}/empty?{{url}}", backend)),
    ];
    config.services = vec![
        service("a", "https://a.example.com/api/v2/status.json".into()),
        service("b", "https://b.example.com/api/v2/status.json".into()),
    ];
    config.mock_profiles = HashMap::from([
        ("a".to_string(), pinned_profile()),
        ("b".to_string(), pinned_profile()),
    ]);
    config.simulation.seed = Some(7);

    let monitor = build_monitor(&config, Arc::new(NoopObserver)).unwrap();
    let report = monitor.refresh_all().await.unwrap();

    assert_eq!(report.simulated, 2);
    assert_eq!(report.summary.operational, 2);
    assert_eq!(report.summary.average_latency_ms, Some(100));

    let a = monitor.board().latest("a").unwrap();
    assert!(a.is_simulated());
    assert_eq!(a.latency_ms(), Some(100));
    assert_eq!(monitor.board().history("a").len(), 1);
}

#[tokio::test]
async fn test_config_file_drives_monitor() {
    let backend = common::start_status_backend(|_| async move {
        (200, common::status_document("critical", "Major Outage"))
    })
    .await;

    let toml = format!(
        r#"
        [poll]
        interval_secs = 60
        relay_timeout_ms = 2000

        [[relays]]
        name = "direct"
        url_template = "{{raw}}"

        [[services]]
        id = "svc"
        name = "Service"
        category = "Test"
        description = "Local backend"
        endpoint_url = "http://{addr}/api/v2/status.json"
        homepage_url = "http://{addr}/"

        [mock_profiles.svc]
        base_latency_ms = 80
        variance_ms = 10
        up_probability = 0.9
        "#,
        addr = backend
    );
    let config = parse_config(&toml).unwrap();
    assert_eq!(config.poll.interval_secs, 60);

    let monitor = build_monitor(&config, Arc::new(NoopObserver)).unwrap();
    assert_eq!(monitor.registry().len(), 1);
    assert_eq!(monitor.registry().get("svc").unwrap().profile().base_latency_ms, 80);

    let result = monitor.check_service("svc").await.unwrap();
    assert_eq!(result.status(), ServiceStatus::Down);
    assert_eq!(result.latency_ms(), None);
    assert_eq!(result.message(), "Major Outage");

    let err = monitor.check_service("other").await.unwrap_err();
    assert_eq!(err, MonitorError::UnknownService("other".into()));
}
