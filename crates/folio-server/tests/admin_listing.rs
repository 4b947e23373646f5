use std::sync::atomic::Ordering;
use std::sync::Arc;

use folio_model::ContactMessage;
use folio_server::{AppState, DocumentStore, FakeStore};

mod support;
use support::{get, parse_body, spawn_app};

fn state_with(store: &Arc<FakeStore>) -> AppState {
    AppState::new(Some(Arc::clone(store) as Arc<dyn DocumentStore>))
}

fn contact(name: &str) -> ContactMessage {
    ContactMessage::new(name, "visitor@example.com", "A message that is long enough.")
        .expect("valid contact")
}

#[tokio::test]
async fn disconnected_store_yields_service_unavailable() {
    let store = Arc::new(FakeStore::disconnected());
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 503);
    let value = parse_body(&body);
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Database not connected");
}

#[tokio::test]
async fn empty_listing_returns_zero_count() {
    let store = Arc::new(FakeStore::default());
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 200);
    let value = parse_body(&body);
    assert_eq!(value["success"], true);
    assert_eq!(value["count"], 0);
    assert_eq!(value["data"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let store = Arc::new(FakeStore::default());
    {
        let mut contacts = store.contacts.lock().await;
        contacts.push(contact("Alice"));
        contacts.push(contact("Bob"));
        contacts.push(contact("Charlie"));
    }
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 200);
    let value = parse_body(&body);
    assert_eq!(value["count"], 3);
    assert_eq!(value["data"][0]["name"], "Charlie");
    assert_eq!(value["data"][1]["name"], "Bob");
    assert_eq!(value["data"][2]["name"], "Alice");
}

#[tokio::test]
async fn listing_never_exceeds_fifty_records() {
    let store = Arc::new(FakeStore::default());
    {
        let mut contacts = store.contacts.lock().await;
        for i in 0..55 {
            contacts.push(contact(&format!("Visitor {i:02}")));
        }
    }
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 200);
    let value = parse_body(&body);
    assert_eq!(value["count"], 50);
    let rows = value["data"].as_array().expect("array");
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0]["name"], "Visitor 54");
    assert_eq!(rows[49]["name"], "Visitor 05");
}

#[tokio::test]
async fn submitted_record_is_retrievable_with_sanitized_fields() {
    let store = Arc::new(FakeStore::default());
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, _) = support::post_json(
        addr,
        "/api/contact",
        r#"{"name":"Al <x>","email":"A@B.CO","message":"Hello <there>, testing."}"#,
    )
    .await;
    assert_eq!(status, 200);

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 200);
    let value = parse_body(&body);
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["name"], "Al x");
    assert_eq!(value["data"][0]["email"], "a@b.co");
    assert_eq!(value["data"][0]["message"], "Hello there, testing.");
    assert!(value["data"][0]["createdAt"].is_string());
}

#[tokio::test]
async fn read_failure_surfaces_as_internal_error() {
    let store = Arc::new(FakeStore::default());
    store.fail_reads.store(true, Ordering::Relaxed);
    let addr = spawn_app(state_with(&store)).await;

    let (status, _, body) = get(addr, "/api/admin/contacts").await;
    assert_eq!(status, 500);
    let value = parse_body(&body);
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Failed to fetch contacts");
}
