use std::cell::RefCell;
use std::rc::Rc;

use base64_json_sync::{
    Base64Codec, EXAMPLE_DECODED, EXAMPLE_ENCODED, ErrorKind, Json64Codec, Snapshot,
    StringCodec, SyncModel,
};

fn recorder(model: &SyncModel) -> (Rc<RefCell<Vec<String>>>, base64_json_sync::Subscription) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sub = {
        let log = Rc::clone(&log);
        model.subscribe(move |m: &SyncModel| {
            log.borrow_mut()
                .push(m.snapshot().to_json().expect("snapshot serializes"));
        })
    };
    (log, sub)
}

#[test]
fn typing_session_keeps_fields_in_step() {
    let mut model = SyncModel::example();
    let (log, _sub) = recorder(&model);

    // A user typing JSON one keystroke at a time.
    let target = "{\"a\":1}";
    for end in 1..=target.len() {
        model.set_decoded_text(&target[..end]);
    }

    assert_eq!(log.borrow().len(), target.len());
    assert_eq!(model.encoded_text(), "eyJhIjoxfQ==");
    assert!(model.error().is_none());

    // Every intermediate prefix except the last is malformed JSON and left
    // the encoded side at its last good value.
    let first: serde_json::Value = serde_json::from_str(&log.borrow()[0]).unwrap();
    assert_eq!(first["code"], -3);
    assert_eq!(first["encoded"], EXAMPLE_ENCODED);
}

#[test]
fn editing_encoded_side_round_trips() {
    let mut model = SyncModel::example();
    let payload = "{\"name\":\"Zoë\",\"tags\":[\"ünïcödé\",\"✓\"]}";
    let encoded = Base64Codec.encode(payload).unwrap();

    model.set_encoded_text(encoded.clone());
    assert_eq!(model.decoded_text(), payload);
    assert!(model.error().is_none());

    model.set_decoded_text(payload);
    assert_eq!(model.encoded_text(), encoded);
}

#[test]
fn errors_are_isolated_per_field() {
    let mut model = SyncModel::example();

    model.set_encoded_text("not base64!");
    assert_eq!(model.error().map(|e| e.kind()), Some(ErrorKind::InvalidBase64));
    assert_eq!(model.decoded_text(), EXAMPLE_DECODED);

    model.set_decoded_text("{not json");
    assert_eq!(model.error().map(|e| e.kind()), Some(ErrorKind::InvalidJson));
    assert_eq!(model.encoded_text(), "not base64!");

    model.set_decoded_text("{\"a\":1}");
    assert!(model.error().is_none());
    assert_eq!(model.encoded_text(), "eyJhIjoxfQ==");
}

#[test]
fn non_utf8_payload_reports_invalid_utf8() {
    let mut model = SyncModel::example();
    model.set_encoded_text("gA==");
    assert_eq!(model.error().map(|e| e.kind()), Some(ErrorKind::InvalidUtf8));
    assert_eq!(model.decoded_text(), EXAMPLE_DECODED);
}

#[test]
fn snapshot_reflects_state() {
    let mut model = SyncModel::example();
    assert_eq!(
        model.snapshot(),
        Snapshot::new(EXAMPLE_ENCODED, EXAMPLE_DECODED, None)
    );

    model.set_encoded_text("%%%");
    let snap = model.snapshot();
    assert_eq!(snap.code, ErrorKind::InvalidBase64);
    assert_ne!(snap.status_line(), "No Error");
}

#[test]
fn custom_codec_drives_the_same_transitions() {
    let mut model = SyncModel::with_codec(Base64Codec, "aGk=", "hi");
    model.set_decoded_text("not json, still fine");
    assert!(model.error().is_none());
    assert_eq!(
        Base64Codec.decode(model.encoded_text()).unwrap(),
        "not json, still fine"
    );

    let json = Json64Codec::default();
    assert!(json.encode("not json, still fine").is_err());
}

#[test]
fn bare_scalars_are_not_documents() {
    let mut model = SyncModel::example();

    model.set_decoded_text("42");
    assert_eq!(model.error().map(|e| e.kind()), Some(ErrorKind::InvalidJson));
    assert_eq!(model.encoded_text(), EXAMPLE_ENCODED);

    // "null"
    model.set_encoded_text("bnVsbA==");
    assert_eq!(model.error().map(|e| e.kind()), Some(ErrorKind::InvalidJson));
    assert_eq!(model.decoded_text(), "42");
}

#[test]
fn deeply_nested_documents_sync() {
    let mut model = SyncModel::example();
    let nested = format!("{}{}", "[".repeat(200), "]".repeat(200));

    model.set_decoded_text(nested.clone());
    assert!(model.error().is_none(), "{:?}", model.error());
    assert_eq!(model.encoded_text(), Base64Codec.encode(&nested).unwrap());

    // The status line stays short even for a long document.
    model.set_encoded_text(format!("!{}", model.encoded_text()));
    let status = model.snapshot().status_line().to_string();
    assert!(status.len() < 200, "status line is {} bytes", status.len());
}
