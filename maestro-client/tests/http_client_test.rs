//! `HttpClient` against an in-process mock of the Maestro REST API.

#![allow(clippy::panic)]

mod common;

use maestro_client::{ClientConfig, ClientError, HttpClient, MaestroApi, WorkHealth};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// HELPERS
// =============================================================================

fn client_for(server: &MockServer, token: Option<&str>) -> HttpClient {
    let config = ClientConfig {
        http_endpoint: server.uri(),
        token: token.map(str::to_string),
        ..ClientConfig::default()
    };
    match HttpClient::new(&config) {
        Ok(client) => client,
        Err(e) => panic!("client for mock server: {e}"),
    }
}

fn page(items: Vec<Value>, page: u32, total: usize) -> Value {
    json!({
        "kind": "List",
        "page": page,
        "size": items.len(),
        "total": total,
        "items": items,
    })
}

fn bundle(id: &str, name: &str, available: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "consumer_name": "agent1",
        "version": 2,
        "manifests": [
            {
                "apiVersion": "batch/v1",
                "kind": "Job",
                "metadata": {"name": "pi", "namespace": "default"}
            }
        ],
        "status": {
            "ReconcileStatus": {
                "Conditions": [
                    {"type": "Applied", "status": "True"},
                    {"type": "Available", "status": available}
                ]
            },
            "ResourceStatus": [
                {
                    "ResourceMeta": {"kind": "Job", "name": "pi", "namespace": "default"},
                    "Conditions": [{"type": "Complete", "status": "True"}]
                }
            ]
        }
    })
}

// =============================================================================
// CONSUMERS
// =============================================================================

#[tokio::test]
async fn list_consumers_follows_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/consumers"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "c1", "name": "agent1"})],
            1,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/consumers"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "c2"})],
            2,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let consumers = require_ok!(client.list_consumers().await);

    let names: Vec<&str> = consumers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["agent1", "c2"]);
}

#[tokio::test]
async fn create_consumer_posts_name_with_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/maestro/v1/consumers"))
        .and(header("authorization", "Bearer s3cret"))
        .and(body_json(json!({"name": "agent7"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "c7", "name": "agent7"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("s3cret"));
    let created = require_ok!(client.create_consumer(" agent7 ").await);
    assert_eq!(created.id, "c7");
}

#[tokio::test]
async fn create_consumer_rejects_blank_name_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client.create_consumer("   ").await;
    assert!(matches!(result, Err(ClientError::Validation { .. })), "{result:?}");
}

#[tokio::test]
async fn conflict_surfaces_backend_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/maestro/v1/consumers"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "kind": "Error",
            "reason": "consumer agent1 already exists"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client.create_consumer("agent1").await;
    assert!(
        matches!(
            &result,
            Err(ClientError::Api { status: 409, message }) if message.contains("already exists")
        ),
        "{result:?}"
    );
}

// =============================================================================
// RESOURCE BUNDLES
// =============================================================================

#[tokio::test]
async fn list_work_filters_by_consumer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles"))
        .and(query_param("search", "consumer_name = 'agent1'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![bundle("b1", "nginx-a", "True"), bundle("b2", "redis-1", "False")],
            1,
            2,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let work = require_ok!(client.list_work("agent1").await);

    assert_eq!(work.len(), 2);
    assert_eq!(work[0].health(), WorkHealth::Healthy);
    assert_eq!(work[1].health(), WorkHealth::Degraded);
}

#[tokio::test]
async fn get_work_detail_keeps_raw_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bundle("b1", "pi-job", "True")))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let detail = require_ok!(client.get_work_detail("b1").await);

    assert_eq!(detail.name, "pi-job");
    assert_eq!(detail.manifests[0].kind, "Job");
    assert_eq!(detail.resource_status[0].conditions[0].condition_type, "Complete");
    assert_eq!(detail.raw["version"], 2);
    let yaml = require_ok!(detail.to_yaml());
    assert!(yaml.contains("consumer_name: agent1"));
}

#[tokio::test]
async fn missing_bundle_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client.get_work_detail("nope").await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()), "{result:?}");
}

#[tokio::test]
async fn get_work_by_name_resolves_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![bundle("b1", "nginx-a", "True"), bundle("b2", "pi-job", "True")],
            1,
            2,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles/b2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bundle("b2", "pi-job", "True")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let detail = require_ok!(client.get_work_by_name("agent1", "pi-job").await);
    assert_eq!(detail.id, "b2");

    let missing = client.get_work_by_name("agent1", "ghost").await;
    assert!(matches!(missing, Err(ref e) if e.is_not_found()), "{missing:?}");
}

#[tokio::test]
async fn delete_work_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/maestro/v1/resource-bundles/b1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    require_ok!(client.delete_work("b1").await);
}

#[tokio::test]
async fn transient_failure_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles/b1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/maestro/v1/resource-bundles/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bundle("b1", "pi-job", "True")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let detail = require_ok!(client.get_work_detail("b1").await);
    assert_eq!(detail.id, "b1");
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let config = ClientConfig {
        http_endpoint: "http://127.0.0.1:9".to_string(),
        max_retries: 0,
        ..ClientConfig::default()
    };
    let client = require_ok!(HttpClient::new(&config));
    let result = client.list_consumers().await;
    assert!(matches!(result, Err(ClientError::Transport { .. })), "{result:?}");
}
