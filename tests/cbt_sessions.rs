//! Guided CBT sessions driven through the HTTP surface.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestApp;
use mindwell::domain::cbt::SUGGESTIONS_UNAVAILABLE;

async fn start(app: &TestApp, user_id: u64) -> String {
    let (status, body) = app.post("/cbt/sessions", json!({ "userId": user_id })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["step"], "SITUATION");
    body["id"].as_str().unwrap().to_string()
}

async fn advance(app: &TestApp, id: &str, value: &str) -> (StatusCode, Value) {
    app.post(&format!("/cbt/sessions/{}/advance", id), json!({ "value": value }))
        .await
}

async fn fill_to_thought(app: &TestApp, id: &str) {
    let (status, _) = advance(app, id, "Presenting to my boss").await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = advance(app, id, "anxious").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "THOUGHT");
}

#[tokio::test]
async fn completed_session_becomes_a_journal_entry() {
    let app = TestApp::answering(1);
    let id = start(&app, 1).await;
    fill_to_thought(&app, &id).await;

    let (status, session) = advance(&app, &id, "I will fail and everyone will judge me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["step"], "CHALLENGE_REFRAME");
    assert_eq!(session["status"], "editing");
    assert_eq!(session["diagnosis"]["thoughtPattern"], "Catastrophizing");
    assert_eq!(session["fields"]["challenge"], session["diagnosis"]["challenge"]);

    let (status, edited) = app
        .patch(
            &format!("/cbt/sessions/{}/suggestions", id),
            json!({ "reframe": "I prepared well. One talk does not decide my career." }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["fields"]["challenge"], session["fields"]["challenge"]);

    let (status, entry) = app.post(&format!("/cbt/sessions/{}/submit", id), json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["userId"], 1);
    assert_eq!(entry["situation"], "Presenting to my boss");
    assert_eq!(entry["reframe"], "I prepared well. One talk does not decide my career.");
    assert_eq!(app.store.journal_count().await, 1);

    let (status, body) = app.get(&format!("/cbt/sessions/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");

    let (_, listed) = app.get("/journal?userId=1").await;
    assert_eq!(listed[0], entry);
}

#[tokio::test]
async fn classifier_outage_still_reaches_the_last_step() {
    let app = TestApp::failing();
    let id = start(&app, 2).await;
    fill_to_thought(&app, &id).await;

    let (status, session) = advance(&app, &id, "I will fail and everyone will judge me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["step"], "CHALLENGE_REFRAME");
    assert_eq!(session["warning"], SUGGESTIONS_UNAVAILABLE);
    assert!(session.get("diagnosis").is_none());
    assert_eq!(session["fields"]["challenge"], "");

    let (status, _) = app
        .patch(
            &format!("/cbt/sessions/{}/suggestions", id),
            json!({ "challenge": "Have past talks gone badly?", "reframe": "Most of my talks went fine." }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, entry) = app.post(&format!("/cbt/sessions/{}/submit", id), json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["challenge"], "Have past talks gone badly?");
}

#[tokio::test]
async fn short_input_blocks_moving_forward() {
    let app = TestApp::answering(0);
    let id = start(&app, 1).await;

    let (status, body) = advance(&app, &id, "hi").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"][0]["field"], "situation");

    let (_, session) = app.get(&format!("/cbt/sessions/{}", id)).await;
    assert_eq!(session["step"], "SITUATION");
    assert_eq!(session["fields"]["situation"], "");
}

#[tokio::test]
async fn submitting_early_is_rejected() {
    let app = TestApp::answering(0);
    let id = start(&app, 1).await;
    fill_to_thought(&app, &id).await;

    let (status, body) = app.post(&format!("/cbt/sessions/{}/submit", id), json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
    assert_eq!(app.store.journal_count().await, 0);
}

#[tokio::test]
async fn going_back_keeps_fields_and_skips_reanalysis() {
    let app = TestApp::answering(1);
    let id = start(&app, 1).await;
    fill_to_thought(&app, &id).await;
    advance(&app, &id, "I will fail and everyone will judge me").await;

    let (status, back) = app.post(&format!("/cbt/sessions/{}/back", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(back["step"], "THOUGHT");
    assert_eq!(back["fields"]["thought"], "I will fail and everyone will judge me");

    let (status, again) = advance(&app, &id, "I might stumble, and that is survivable").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["step"], "CHALLENGE_REFRAME");
    assert_eq!(again["diagnosis"]["thoughtPattern"], "Catastrophizing");
    assert_eq!(app.provider.call_count(), 1);
}

#[tokio::test]
async fn first_step_has_no_predecessor() {
    let app = TestApp::answering(0);
    let id = start(&app, 1).await;
    let (status, _) = app.post(&format!("/cbt/sessions/{}/back", id), json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancelled_session_is_gone() {
    let app = TestApp::answering(0);
    let id = start(&app, 1).await;

    let (status, _) = app.send("DELETE", &format!("/cbt/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = advance(&app, &id, "Presenting to my boss").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_session_id_is_400() {
    let app = TestApp::answering(0);
    let (status, _) = app.get("/cbt/sessions/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
