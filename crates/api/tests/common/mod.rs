//! Common test utilities for integration tests.
//!
//! These run against a real PostgreSQL database named by `TEST_DATABASE_URL`.
//! When the variable is unset, [`setup`] returns `None` and tests skip.

// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fake::{faker::name::en::Name, Fake};
use realty_api::{app::create_app, config::Config};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_SCHEMA: &str = "realty_test";

fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL").ok()
}

/// Test configuration pointing at the test database and schema.
pub fn test_config(database_url: &str) -> Config {
    Config {
        server: realty_api::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        database: realty_api::config::DatabaseConfig {
            url: database_url.to_string(),
            schema: TEST_SCHEMA.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 600,
        },
        logging: realty_api::config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: realty_api::config::SecurityConfig::default(),
    }
}

/// Create a pool whose connections use the test schema.
pub async fn create_test_pool(config: &Config) -> PgPool {
    persistence::db::create_pool(&config.database.pool_config())
        .await
        .expect("Failed to connect to test database")
}

/// Create the test schema and apply migrations. Safe to call from
/// concurrently running tests.
pub async fn run_migrations(pool: &PgPool) {
    persistence::db::ensure_schema(pool, TEST_SCHEMA)
        .await
        .expect("Failed to create test schema");
    sqlx::migrate!("../persistence/src/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

/// Build the app against a migrated test database, or `None` to skip.
pub async fn setup() -> Option<(Router, PgPool)> {
    let Some(url) = test_database_url() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return None;
    };
    let config = test_config(&url);
    let pool = create_test_pool(&config).await;
    run_migrations(&pool).await;
    Some((create_app(config, pool.clone()), pool))
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a DELETE request.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Send one request and return status plus parsed body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// POST `body` to `/api/v1/<path>`, assert 201, return the new row.
pub async fn create(app: &Router, path: &str, body: Value) -> Value {
    let (status, json) = send(
        app,
        json_request(Method::POST, &format!("/api/v1/{path}"), body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "creating {path} failed: {json}");
    json
}

pub fn id_of(row: &Value, key: &str) -> i64 {
    row[key]
        .as_i64()
        .unwrap_or_else(|| panic!("Missing {key} in {row}"))
}

/// A username no other test run has used.
pub fn unique_username() -> String {
    format!("user_{}", uuid::Uuid::new_v4().simple())
}

pub fn account_body(username: &str) -> Value {
    let name: String = Name().fake();
    json!({
        "username": username,
        "password": "correct-horse-battery",
        "name": name,
        "contact_info": "+48 600 100 200",
        "birth_date": "1985-03-14",
        "gender": "female"
    })
}

fn with_fields(mut base: Value, extra: Value) -> Value {
    if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    base
}

pub async fn create_agency(app: &Router) -> i64 {
    let row = create(
        app,
        "agencies",
        json!({
            "name": "Vistula Homes",
            "address": "ul. Marszalkowska 1",
            "contact_info": "office@vistula.example",
            "commission_rate": 0.03
        }),
    )
    .await;
    id_of(&row, "id")
}

pub async fn create_owner(app: &Router) -> i64 {
    let row = create(app, "owners", account_body(&unique_username())).await;
    id_of(&row, "owners_id")
}

pub async fn create_buyer(app: &Router) -> i64 {
    let row = create(app, "buyers", account_body(&unique_username())).await;
    id_of(&row, "id")
}

pub async fn create_realtor(app: &Router, agency_id: i64) -> i64 {
    let body = with_fields(
        account_body(&unique_username()),
        json!({ "agency_id": agency_id }),
    );
    let row = create(app, "realtors", body).await;
    id_of(&row, "id")
}

pub async fn create_district(app: &Router, name: &str) -> i64 {
    let row = create(app, "districts", json!({ "name": name })).await;
    id_of(&row, "id")
}

pub async fn create_street(app: &Router, district_id: i64, name: &str) -> i64 {
    let row = create(
        app,
        "streets",
        json!({ "district_id": district_id, "name": name }),
    )
    .await;
    id_of(&row, "id")
}

pub async fn create_apartment_type(app: &Router) -> i64 {
    let row = create(
        app,
        "apartment-types",
        json!({ "num_rooms": 2, "is_furnished": true, "description": "Two rooms" }),
    )
    .await;
    id_of(&row, "id")
}

/// An apartment with only the mandatory links.
pub async fn create_apartment(app: &Router) -> i64 {
    let apartment_type_id = create_apartment_type(app).await;
    let row = create(
        app,
        "apartments",
        json!({
            "apartment_type_id": apartment_type_id,
            "apartment_number": "12A",
            "square_meters": 54.5,
            "owner_price": 650000.0
        }),
    )
    .await;
    id_of(&row, "id")
}
