use super::paste::*;
use crate::error::NotFoundReason;

fn record(expires_at: Option<i64>, max_views: Option<u64>, current_views: u64) -> PasteRecord {
    let mut paste = PasteRecord::new(
        "abcd1234".to_string(),
        "hello".to_string(),
        1_000,
        expires_at,
        max_views,
    );
    paste.current_views = current_views;
    paste
}

#[test]
fn unlimited_record_is_always_alive() {
    let paste = record(None, None, 10_000);
    assert_eq!(paste.ensure_alive(i64::MAX), Ok(()));
}

#[test]
fn time_expiry_is_strictly_greater_than() {
    let paste = record(Some(6_000), None, 0);
    assert_eq!(paste.ensure_alive(5_999), Ok(()));
    assert_eq!(paste.ensure_alive(6_000), Ok(()));
    assert_eq!(
        paste.ensure_alive(6_001),
        Err(NotFoundReason::TimeExpired)
    );
}

#[test]
fn view_limit_exhausts_at_max() {
    assert_eq!(record(None, Some(2), 1).ensure_alive(0), Ok(()));
    assert_eq!(
        record(None, Some(2), 2).ensure_alive(0),
        Err(NotFoundReason::ViewsExhausted)
    );
}

#[test]
fn time_expiry_wins_over_view_exhaustion() {
    let paste = record(Some(10), Some(1), 1);
    assert_eq!(paste.ensure_alive(11), Err(NotFoundReason::TimeExpired));
}

#[test]
fn create_request_accepts_missing_optional_fields() {
    let req: CreatePasteRequest =
        serde_json::from_str(r#"{"content":"hi"}"#).expect("decode request");
    assert_eq!(req.content.as_deref(), Some("hi"));
    assert!(req.ttl_seconds.is_none());
    assert!(req.max_views.is_none());

    let floats: CreatePasteRequest =
        serde_json::from_str(r#"{"content":"hi","ttl_seconds":5.0,"max_views":2}"#)
            .expect("decode numeric limits");
    assert_eq!(floats.ttl_seconds, Some(5.0));
    assert_eq!(floats.max_views, Some(2.0));

    let empty: CreatePasteRequest = serde_json::from_str("{}").expect("decode empty");
    assert!(empty.content.is_none());
}

#[test]
fn record_survives_bincode_storage_encoding() {
    let paste = record(Some(99), Some(3), 2);
    let encoded = bincode::serialize(&paste).expect("encode");
    let decoded: PasteRecord = bincode::deserialize(&encoded).expect("decode");
    assert_eq!(decoded, paste);
}
