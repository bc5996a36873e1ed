// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! App clients service over the intercepted client

use std::sync::Arc;

use authgate::services::{CreateAppClientDto, UpdateAppClientDto};
use authgate::{
    ApiClient, ApiUrlConfig, AppClientDto, AppClientsService, AuthInterceptor, Session,
    SessionStore,
};
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(session: Session) -> (MockServer, SessionStore, AppClientsService) {
    let server = MockServer::start().await;
    let sessions = SessionStore::with_session(session);
    let api_url = ApiUrlConfig::new(format!("{}/p/", server.uri()));

    let client = ApiClient::with_http()
        .unwrap()
        .with_interceptor(AuthInterceptor::new(
            Arc::new(sessions.clone()),
            Arc::new(api_url.clone()),
        ));

    (server, sessions, AppClientsService::new(client, api_url))
}

fn web_client() -> AppClientDto {
    AppClientDto {
        id: "web".to_string(),
        name: "Web".to_string(),
        secret: "s3cret".to_string(),
        expires_utc: Utc.with_ymd_and_hms(2017, 1, 2, 3, 4, 5).unwrap(),
    }
}

#[tokio::test]
async fn loads_clients() {
    let (server, _, service) = setup(Session::with_token("letmein")).await;

    Mock::given(method("GET"))
        .and(path("/p/api/apps/my-app/clients"))
        .and(header("authorization", "letmein"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "web",
                "name": "Web",
                "secret": "s3cret",
                "expiresUtc": "2017-01-02T03:04:05Z"
            },
            {
                "id": "cli",
                "name": "CLI",
                "secret": "other",
                "expiresUtc": "2018-06-07T08:09:10Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let clients = service.get_clients("my-app").await.unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0], web_client());
    assert_eq!(clients[1].id, "cli");
}

#[tokio::test]
async fn load_failure_keeps_status_and_logs_out() {
    let (server, sessions, service) = setup(Session::with_token("letmein")).await;

    Mock::given(method("GET"))
        .and(path("/p/api/apps/my-app/clients"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = service.get_clients("my-app").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load clients. Please reload.");
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(sessions.logout_count(), 1);
}

#[tokio::test]
async fn adds_client() {
    let (server, _, service) = setup(Session::with_token("letmein")).await;

    Mock::given(method("POST"))
        .and(path("/p/api/apps/my-app/clients"))
        .and(body_json(json!({ "id": "web" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "web", "name": "Web", "secret": "s3cret", "expiresUtc": "2017-01-02T03:04:05Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = service
        .post_client("my-app", &CreateAppClientDto { id: "web".to_string() })
        .await
        .unwrap();

    assert_eq!(created, web_client());
}

#[tokio::test]
async fn updates_and_deletes_client() {
    let (server, _, service) = setup(Session::with_token("letmein")).await;

    Mock::given(method("PUT"))
        .and(path("/p/api/apps/my-app/clients/web"))
        .and(body_json(json!({ "name": "Renamed" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/p/api/apps/my-app/clients/web"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    service
        .update_client("my-app", "web", &UpdateAppClientDto { name: "Renamed".to_string() })
        .await
        .unwrap();
    service.delete_client("my-app", "web").await.unwrap();
}

#[tokio::test]
async fn delete_failure_is_wrapped() {
    let (server, sessions, service) = setup(Session::with_token("letmein")).await;

    Mock::given(method("DELETE"))
        .and(path("/p/api/apps/my-app/clients/web"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service.delete_client("my-app", "web").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to revoke client. Please reload.");
    assert_eq!(err.status_code(), Some(500));
    assert_eq!(sessions.logout_count(), 0);
}

#[tokio::test]
async fn creates_token_anonymously() {
    let (server, _, service) = setup(Session::with_token("letmein")).await;

    Mock::given(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/p/identity-server/connect/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(concat!(
            "grant_type=client_credentials&scope=squidex-api",
            "&client_id=my-app%3Aweb&client_secret=s3cret",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued", "token_type": "Bearer", "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = service.create_token("my-app", &web_client()).await.unwrap();

    assert_eq!(token.access_token, "issued");
    assert_eq!(token.token_type, "Bearer");
}
