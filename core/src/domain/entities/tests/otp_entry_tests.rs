//! Unit tests for the OTP cache payload

use crate::domain::entities::otp_entry::{OtpEntry, PendingRegistration};

#[test]
fn test_cache_value_round_trip_with_pending() {
    let entry = OtpEntry::new(
        "123456".to_string(),
        Some(PendingRegistration {
            first_name: "Ali".to_string(),
            last_name: "Valiyev".to_string(),
            password_hash: "hash".to_string(),
        }),
    );
    let raw = entry.to_cache_value().unwrap();
    assert_eq!(OtpEntry::from_cache_value(&raw), entry);
}

#[test]
fn test_missing_pending_field_defaults_to_none() {
    let entry = OtpEntry::from_cache_value(r#"{"code":"654321"}"#);
    assert_eq!(entry.code, "654321");
    assert!(entry.pending.is_none());
}

#[test]
fn test_malformed_payload_is_empty_entry() {
    let entry = OtpEntry::from_cache_value("not json");
    assert!(entry.code.is_empty());
    assert!(entry.pending.is_none());
}
