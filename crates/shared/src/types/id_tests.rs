use super::*;
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn test_generated_ids_are_distinct() {
    assert_ne!(GeneratorId::new(), GeneratorId::new());
}

#[test]
fn test_from_uuid_round_trips() {
    let uuid = Uuid::new_v4();
    assert_eq!(ApiKeyId::from_uuid(uuid).into_inner(), uuid);
    assert_eq!(ApiKeyId::from(uuid), ApiKeyId::from_uuid(uuid));
}

#[test]
fn test_display_matches_uuid() {
    let uuid = Uuid::new_v4();
    assert_eq!(UserId::from_uuid(uuid).to_string(), uuid.to_string());
}

#[test]
fn test_from_str() {
    let uuid = Uuid::new_v4();
    let id = GeneratorId::from_str(&uuid.to_string()).unwrap();
    assert_eq!(id.into_inner(), uuid);
    assert!(GeneratorId::from_str("gen-1").is_err());
}

#[test]
fn test_serializes_transparently() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&FuelIssueId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));
}
