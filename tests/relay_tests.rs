mod common;

use std::time::Duration;

use serde_json::{json, Map, Value};

use common::ScriptReply;
use novavista::relay::{interpret, Relay, RelayOutcome, RelayStatus, ScriptRelay, Verdict};

fn fields(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

// ── Encoding ────────────────────────────────────────────────────

#[tokio::test]
async fn body_always_carries_all_seven_fields() {
    let script = common::spawn_script(ScriptReply::Json(json!({ "success": true }))).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    relay.submit(&fields(json!({ "email": "ada@example.com" }))).await;

    let received = script.received();
    assert_eq!(received.len(), 1);
    let pairs = received[0].pairs();
    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        ["name", "email", "phone", "program", "message", "time", "date"]
    );
    assert_eq!(received[0].field("name").unwrap(), "");
    assert_eq!(received[0].field("email").unwrap(), "ada@example.com");
    assert_eq!(received[0].field("phone").unwrap(), "");
    assert_eq!(received[0].field("program").unwrap(), "");
    assert_eq!(received[0].field("message").unwrap(), "");
    assert!(!received[0].field("time").unwrap().is_empty());
    assert!(!received[0].field("date").unwrap().is_empty());
}

#[tokio::test]
async fn posts_form_encoded_content_type() {
    let script = common::spawn_script(ScriptReply::Json(json!({ "success": true }))).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    relay.submit(&fields(json!({ "name": "Ada" }))).await;

    let received = script.received();
    assert!(received[0]
        .content_type
        .starts_with("application/x-www-form-urlencoded"));
}

#[tokio::test]
async fn full_name_wins_and_unknown_keys_are_dropped() {
    let script = common::spawn_script(ScriptReply::Json(json!({ "success": true }))).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    relay
        .submit(&fields(json!({
            "fullName": "Ada Lovelace",
            "name": "ignored",
            "program": "degree",
            "message": "Hello & welcome",
            "form_status": "idle",
            "time": "caller time",
        })))
        .await;

    let received = &script.received()[0];
    assert_eq!(received.field("name").unwrap(), "Ada Lovelace");
    assert_eq!(received.field("program").unwrap(), "degree");
    assert_eq!(received.field("message").unwrap(), "Hello & welcome");
    assert!(received.field("form_status").is_none());
    assert_ne!(received.field("time").unwrap(), "caller time");
}

#[tokio::test]
async fn empty_full_name_falls_back_to_name() {
    let script = common::spawn_script(ScriptReply::Json(json!({ "success": true }))).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    relay
        .submit(&fields(json!({ "fullName": "", "name": "Grace" })))
        .await;

    assert_eq!(script.received()[0].field("name").unwrap(), "Grace");
}

// ── Response interpretation ─────────────────────────────────────

#[tokio::test]
async fn confirmed_success_returns_fresh_ids() {
    let script = common::spawn_script(ScriptReply::Json(json!({
        "success": true,
        "message": "Form submitted successfully",
    })))
    .await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();
    let raw = fields(json!({ "fullName": "Ada" }));

    let first = relay.submit(&raw).await;
    let second = relay.submit(&raw).await;

    assert_eq!(first.status, RelayStatus::Success);
    assert_eq!(second.status, RelayStatus::Success);
    let first_id = first.id.unwrap();
    let second_id = second.id.unwrap();
    assert!(!first_id.is_empty());
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn explicit_failure_returns_error_without_id() {
    let script = common::spawn_script(ScriptReply::Json(json!({
        "success": false,
        "message": "Sheet created. Please try submitting again.",
    })))
    .await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    let outcome = relay.submit(&fields(json!({ "fullName": "Ada" }))).await;

    assert_eq!(outcome, RelayOutcome::error());
    assert!(outcome.id.is_none());
}

#[tokio::test]
async fn html_reply_is_reported_as_success() {
    let script = common::spawn_script(ScriptReply::Html(
        "<html><body>Moved Temporarily</body></html>",
    ))
    .await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    let outcome = relay.submit(&fields(json!({ "fullName": "Ada" }))).await;

    assert_eq!(outcome.status, RelayStatus::Success);
    assert!(outcome.id.is_some());
}

#[tokio::test]
async fn server_error_page_is_reported_as_success() {
    let script = common::spawn_script(ScriptReply::Status(500, "Internal Server Error")).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    let outcome = relay.submit(&fields(json!({}))).await;

    assert_eq!(outcome.status, RelayStatus::Success);
}

#[tokio::test]
async fn null_reply_is_reported_as_success() {
    let script = common::spawn_script(ScriptReply::Html("null")).await;
    let relay = ScriptRelay::new(script.url(), None).unwrap();

    let outcome = relay.submit(&fields(json!({ "fullName": "Ada" }))).await;

    assert_eq!(outcome.status, RelayStatus::Success);
    assert!(outcome.id.is_some());
}

#[tokio::test]
async fn timed_out_request_is_reported_as_success() {
    let script = common::spawn_script(ScriptReply::Stall).await;
    let relay = ScriptRelay::new(script.url(), Some(Duration::from_millis(200))).unwrap();

    let outcome = relay.submit(&fields(json!({ "fullName": "Ada" }))).await;

    assert_eq!(outcome.status, RelayStatus::Success);
    assert!(outcome.id.is_some());
    assert_eq!(script.received().len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_reported_as_success() {
    let relay = ScriptRelay::new(common::dead_url().await, None).unwrap();

    let outcome = relay.submit(&fields(json!({ "fullName": "Ada" }))).await;

    assert_eq!(outcome.status, RelayStatus::Success);
    assert!(outcome.id.is_some());
}

#[test]
fn interpret_reads_only_a_boolean_true_as_confirmed() {
    assert_eq!(interpret(r#"{"success":true}"#), Verdict::Confirmed);
    assert_eq!(interpret(r#"{"success":"true"}"#), Verdict::Rejected(None));
    assert_eq!(interpret(r#"{"message":"nope"}"#), Verdict::Rejected(Some("nope".to_string())));
    assert_eq!(interpret("[]"), Verdict::Rejected(None));
    assert_eq!(interpret("42"), Verdict::Rejected(None));
    assert_eq!(interpret("null"), Verdict::NullReply);
    assert_eq!(interpret("<!DOCTYPE html><p>ok</p>"), Verdict::Unparseable);
    assert_eq!(interpret(""), Verdict::Unparseable);
}

#[test]
fn outcome_json_omits_id_on_error() {
    let error = serde_json::to_value(RelayOutcome::error()).unwrap();
    assert_eq!(error, json!({ "status": "error" }));

    let success = serde_json::to_value(RelayOutcome::success()).unwrap();
    assert_eq!(success["status"], "success");
    assert_eq!(success["id"].as_str().unwrap().len(), 9);
}
