//! Runs the reqwest adapter against an in-process axum server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use charsheet_domain::{Attribute, Skill};
use charsheet_player::infrastructure::CharacterApiClient;
use charsheet_player::ports::outbound::{ApiError, CharacterApiPort};
use charsheet_shared::CharacterDocument;

type Saved = Arc<Mutex<Vec<Value>>>;

fn stored_body() -> Value {
    json!({
        "body": {
            "name": "Pike",
            "attributes": {
                "Strength": 12,
                "Dexterity": 8,
                "Constitution": 12,
                "Intelligence": 12,
                "Wisdom": 14,
                "Charisma": 10
            },
            "attributeTotal": 68,
            "skills": { "Religion": 4, "Medicine": 2 },
            "skillPointsSpent": 6
        }
    })
}

async fn fetch_ok() -> Json<Value> {
    Json(stored_body())
}

async fn save_ok(State(saved): State<Saved>, Json(body): Json<Value>) -> Json<Value> {
    if let Ok(mut saved) = saved.lock() {
        saved.push(body);
    }
    Json(json!({ "statusCode": 200 }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "store unavailable")
}

async fn malformed() -> &'static str {
    "<html>not json</html>"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(stored_body())
}

async fn spawn_server() -> (SocketAddr, Saved) {
    let saved: Saved = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/character", get(fetch_ok).post(save_ok))
        .route("/broken", get(broken).post(broken))
        .route("/malformed", get(malformed).post(malformed))
        .route("/slow", get(slow))
        .with_state(saved.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, saved)
}

fn client(addr: SocketAddr, path: &str) -> CharacterApiClient {
    CharacterApiClient::new(&format!("http://{addr}{path}"), Duration::from_secs(2))
}

#[tokio::test]
async fn fetch_unwraps_the_envelope() {
    let (addr, _) = spawn_server().await;

    let document = client(addr, "/api/character")
        .fetch_character()
        .await
        .expect("fetch");

    assert_eq!(document.name, "Pike");
    assert_eq!(document.attributes.get(Attribute::Wisdom), 14);
    assert_eq!(document.attribute_total, 68);
    assert_eq!(document.skills.get(Skill::Religion), 4);
    assert_eq!(document.skills.get(Skill::Arcana), 0);
    assert_eq!(document.skill_points_spent, 6);
}

#[tokio::test]
async fn save_posts_camel_case_json() {
    let (addr, saved) = spawn_server().await;

    let document = CharacterDocument {
        name: "Scanlan".to_string(),
        attributes: charsheet_domain::Attributes::default().with(Attribute::Charisma, 15),
        attribute_total: 65,
        skills: charsheet_domain::Skills::default().with(Skill::SleightOfHand, 1),
        skill_points_spent: 1,
    };

    let response = client(addr, "/api/character/")
        .save_character(&document)
        .await
        .expect("save");
    assert_eq!(response["statusCode"], 200);

    let saved = saved.lock().expect("lock").clone();
    assert_eq!(saved.len(), 1);
    let body = &saved[0];
    assert_eq!(body["name"], "Scanlan");
    assert_eq!(body["attributeTotal"], 65);
    assert_eq!(body["skillPointsSpent"], 1);
    assert_eq!(body["attributes"]["Charisma"], 15);
    assert_eq!(body["skills"]["SleightofHand"], 1);
}

#[tokio::test]
async fn non_success_status_is_typed() {
    let (addr, _) = spawn_server().await;
    let api = client(addr, "/broken");

    let err = api.fetch_character().await.expect_err("500");
    assert_eq!(err, ApiError::status(500, "store unavailable"));

    let document = CharacterDocument::from(&charsheet_domain::CharacterSheet::new());
    let err = api.save_character(&document).await.expect_err("500");
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn missing_route_is_a_404() {
    let (addr, _) = spawn_server().await;

    let err = client(addr, "/nope").fetch_character().await.expect_err("404");
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_json_is_an_invalid_response() {
    let (addr, _) = spawn_server().await;

    let err = client(addr, "/malformed")
        .fetch_character()
        .await
        .expect_err("not json");
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let (addr, _) = spawn_server().await;
    let api = CharacterApiClient::new(&format!("http://{addr}/slow"), Duration::from_millis(200));

    let err = api.fetch_character().await.expect_err("timeout");
    assert_eq!(err, ApiError::Timeout);
}
