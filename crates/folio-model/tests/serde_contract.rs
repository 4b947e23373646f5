use folio_model::{ContactMessage, PortfolioProfile};
use serde_json::Value;

#[test]
fn contact_serializes_with_camel_case_timestamps() {
    let contact = ContactMessage::new("Al", "a@b.co", "Hello there, testing.").expect("valid");
    let value = serde_json::to_value(&contact).expect("serialize");
    let object = value.as_object().expect("object");
    assert!(object.contains_key("createdAt"));
    assert!(object.contains_key("updatedAt"));
    assert!(!object.contains_key("created_at"));
    assert!(
        !object.contains_key("id"),
        "unassigned id must stay off the wire"
    );
}

#[test]
fn contact_roundtrips_through_json() {
    let contact = ContactMessage::new("Al", "a@b.co", "Hello there, testing.").expect("valid");
    let raw = serde_json::to_string(&contact).expect("serialize");
    let back: ContactMessage = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(contact, back);
}

#[test]
fn fallback_profile_uses_original_wire_keys() {
    let value = serde_json::to_value(PortfolioProfile::fallback()).expect("serialize");
    assert_eq!(value["profilePic"], "profile.jpg");
    assert_eq!(value["heroTitle"], "Hello I'm Faisal");
    assert_eq!(value["socialLinks"][0]["platform"], "facebook");
    assert_eq!(value["roles"][0]["title"], "WEB DEVELOPER");
    assert_eq!(value["about"]["imageUrl"], "faisal.jpg");
    assert_eq!(value["about"]["downloadLink"], "cv.pdf");
    assert_eq!(value["services"]["items"][1]["icon"], "fas fa-server");
    assert!(value.get("portfolio").is_none());
    assert!(value.get("resume").is_none());
}

#[test]
fn stored_profile_deserializes_with_optional_blocks() {
    let raw = r#"{
        "id": "66b2f1",
        "profilePic": "p.jpg",
        "name": "Faisal",
        "heroTitle": "Hi",
        "description": "dev",
        "socialLinks": [],
        "roles": [],
        "about": {"title": "t", "description": "d", "imageUrl": "i", "downloadLink": "l"},
        "services": {"title": "s", "items": []},
        "resume": {"title": "Resume", "description": "cv", "downloadLink": "cv.pdf"}
    }"#;
    let profile: PortfolioProfile = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(profile.id.as_deref(), Some("66b2f1"));
    assert!(profile.portfolio.is_none());

    let value: Value = serde_json::to_value(&profile).expect("serialize");
    assert_eq!(value["id"], "66b2f1");

    let resume = profile.resume.expect("resume block");
    assert_eq!(resume.download_link, "cv.pdf");
}
