use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn collection_url_appends_the_bank_path() {
    assert_eq!(
        collection_url("http://localhost:8080"),
        "http://localhost:8080/bank"
    );
}

#[test]
fn item_url_embeds_the_id() {
    assert_eq!(
        item_url("http://localhost:8080", "42"),
        "http://localhost:8080/bank/42"
    );
}

#[test]
fn urls_respect_a_configured_origin() {
    let config = crate::config::Config::new("https://bank.example.com/");
    assert_eq!(
        collection_url(&config.api_base),
        "https://bank.example.com/bank"
    );
    assert_eq!(
        item_url(&config.api_base, "665f1c0a"),
        "https://bank.example.com/bank/665f1c0a"
    );
}

// =============================================================
// Failure-body messages
// =============================================================

#[test]
fn failure_message_prefers_error_then_message() {
    let body = serde_json::json!({"error": "m1", "message": "m2"});
    assert_eq!(failure_message(&body).as_deref(), Some("m1"));

    let body = serde_json::json!({"message": "m2"});
    assert_eq!(failure_message(&body).as_deref(), Some("m2"));
}

#[test]
fn failure_message_ignores_unrelated_bodies() {
    assert_eq!(failure_message(&serde_json::json!({"status": 500})), None);
    assert_eq!(failure_message(&serde_json::json!({"error": ""})), None);
    assert_eq!(failure_message(&serde_json::json!([1, 2, 3])), None);
}
