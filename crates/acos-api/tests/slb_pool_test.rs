#![allow(clippy::unwrap_used)]
// Integration tests for the real-server, service-group, and member
// endpoints using wiremock. Focuses on payload shapes and the compound
// member key in per-object paths.

use std::net::IpAddr;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use acos_api::slb::{LbMethod, MemberOptions, Protocol, ServerOptions};
use acos_api::{AxapiClient, Credentials, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AxapiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = AxapiClient::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials::new("admin", "a10pass".to_owned()),
    );
    (server, client)
}

async fn mount_auth(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/axapi/v3/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authresponse": {"signature": "sess-1", "description": "admin session"}
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn not_found_envelope(code: u64, msg: &str) -> serde_json::Value {
    json!({"response": {"status": "fail", "err": {"code": code, "msg": msg}}})
}

// ── Real server ─────────────────────────────────────────────────────

#[tokio::test]
async fn create_server_posts_documented_payload() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/axapi/v3/slb/server/web1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(not_found_envelope(67_305_473, " No such Server")),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/server/"))
        .and(body_json(json!({
            "server": {
                "name": "web1",
                "host": "10.0.0.5",
                "action": "enable",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let ip: IpAddr = "10.0.0.5".parse().unwrap();
    let resp = client
        .create_server("web1", ip, &ServerOptions::default())
        .await
        .unwrap();

    assert_eq!(resp, json!({"foo": "bar"}));
}

#[tokio::test]
async fn create_server_on_existing_name_returns_exists() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/axapi/v3/slb/server/web1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/server/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let ip: IpAddr = "10.0.0.5".parse().unwrap();
    let result = client.create_server("web1", ip, &ServerOptions::default()).await;

    assert!(
        matches!(result, Err(Error::Exists { .. })),
        "expected Exists error, got: {result:?}"
    );
}

#[tokio::test]
async fn update_server_v6_with_limits() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/server/web1"))
        .and(body_json(json!({
            "server": {
                "name": "web1",
                "server-ipv6-addr": "fd00::5",
                "action": "disable",
                "conn-limit": 8_000_000,
                "weight": 4,
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let opts = ServerOptions {
        enabled: false,
        conn_limit: Some(8_000_000),
        weight: Some(4),
    };
    let ip: IpAddr = "fd00::5".parse().unwrap();
    client.update_server("web1", ip, &opts).await.unwrap();
}

#[tokio::test]
async fn delete_server_unknown_name_maps_to_not_found() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/axapi/v3/slb/server/web1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(not_found_envelope(67_305_473, " No such Server")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client.delete_server("web1").await;
    assert!(
        result.as_ref().is_err_and(Error::is_not_found),
        "expected NotFound error, got: {result:?}"
    );
}

#[tokio::test]
async fn server_oper_hits_oper_subpath() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    let body = json!({"oper": {"state": "Up"}});
    Mock::given(method("GET"))
        .and(path("/axapi/v3/slb/server/web1/oper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.server_oper("web1").await.unwrap();
    assert_eq!(resp, body);
}

// ── Service group ───────────────────────────────────────────────────

#[tokio::test]
async fn create_service_group_posts_documented_payload() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/axapi/v3/slb/service-group/sg1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(not_found_envelope(1023, "No such service group")),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/service-group/"))
        .and(body_json(json!({
            "service-group": {
                "name": "sg1",
                "protocol": "tcp",
                "lb-method": "round-robin",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_service_group("sg1", Protocol::Tcp, LbMethod::RoundRobin)
        .await
        .unwrap();

    assert_eq!(resp, json!({"foo": "bar"}));
}

#[tokio::test]
async fn update_service_group_serializes_method_strings() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/service-group/sg1"))
        .and(body_json(json!({
            "service-group": {
                "name": "sg1",
                "protocol": "udp",
                "lb-method": "weighted-rr",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_service_group("sg1", Protocol::Udp, LbMethod::WeightedRr)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_service_group_hits_object_path() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/axapi/v3/slb/service-group/sg1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_service_group("sg1").await.unwrap();
    assert_eq!(resp, json!({"foo": "bar"}));
}

// ── Members ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_member_posts_under_group_collection() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/service-group/sg1/member/"))
        .and(body_json(json!({
            "member": {
                "name": "web1",
                "port": 80,
                "member-state": "enable",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .create_member("sg1", "web1", 80, &MemberOptions::default())
        .await
        .unwrap();

    assert_eq!(resp, json!({"foo": "bar"}));
}

#[tokio::test]
async fn member_object_path_uses_compound_key() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/axapi/v3/slb/service-group/sg1/member/web1+80"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.delete_member("sg1", "web1", 80).await.unwrap();
    assert_eq!(resp, json!({"foo": "bar"}));
}

#[tokio::test]
async fn update_member_disabled_state() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("POST"))
        .and(path("/axapi/v3/slb/service-group/sg1/member/web1+80"))
        .and(body_json(json!({
            "member": {
                "name": "web1",
                "port": 80,
                "member-state": "disable",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_member("sg1", "web1", 80, &MemberOptions { enabled: false })
        .await
        .unwrap();
}

#[tokio::test]
async fn get_member_unknown_key_maps_to_not_found() {
    let (server, client) = setup().await;
    mount_auth(&server).await;

    Mock::given(method("GET"))
        .and(path("/axapi/v3/slb/service-group/sg1/member/web1+80"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(not_found_envelope(1023, "No such member")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client.get_member("sg1", "web1", 80).await;
    assert!(
        result.as_ref().is_err_and(Error::is_not_found),
        "expected NotFound error, got: {result:?}"
    );
}
