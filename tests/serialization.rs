#![cfg(any(debug_assertions, feature = "check-assumptions"))]

use assuming::prelude::*;
use serde_json::json;

mod util;
use util::only_failure;

#[test]
fn failure_serializes_to_json() {
    let r = RecordingReporter::new();
    let pending = vec![3_u8];
    assume_empty!(in &r; pending, "flush {}", "done");
    let f = only_failure(&r);

    let value = serde_json::to_value(&f).unwrap();
    assert_eq!(value["kind"], json!("Empty"));
    assert_eq!(value["expectation"], json!("pending will be empty"));
    assert_eq!(value["values"], json!([{ "name": "size of pending", "value": "1" }]));
    assert_eq!(value["context"], json!("flush done"));
    assert_eq!(value["location"]["file"], json!(file!()));
    assert_eq!(value["location"]["line"], json!(f.location.line));
}

#[test]
fn compare_kind_carries_operator() {
    let r = RecordingReporter::new();
    assume_ge!(in &r; 1_i32, 2_i32);
    let f = only_failure(&r);
    let value = serde_json::to_value(f.kind).unwrap();
    assert_eq!(value, json!({ "Compare": { "operator": ">=" } }));
}

#[test]
fn failure_is_a_std_error() {
    let r = RecordingReporter::new();
    let open = false;
    assume!(in &r; open);
    let err: Box<dyn std::error::Error> = Box::new(only_failure(&r));
    let text = err.to_string();
    assert!(text.starts_with("assumption failed at "), "{text}");
    assert!(text.ends_with(": open will evaluate to true"), "{text}");
}
