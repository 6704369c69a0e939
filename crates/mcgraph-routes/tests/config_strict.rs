#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use serde_json::json;

use mcgraph_core::protocol::{Request, UpdateRequest};
use mcgraph_routes::config;
use mcgraph_routes::{ExptimeAction, NullRoute};

#[test]
fn deny_unknown_fields() {
    let bad = json!({
        "type": "ModifyExptimeRoute",
        "target": "PoolRoute|main",
        "exptime": 30,
        "acton": "min" // typo should fail
    });

    let err = config::make_modify_exptime_route(Arc::new(NullRoute), &bad).err().unwrap();
    assert_eq!(err.result_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_settings_default_to_set() {
    let s = config::modify_exptime_settings(&json!({ "exptime": 30 })).expect("must parse");
    assert_eq!(s.exptime, 30);
    assert_eq!(s.action, ExptimeAction::Set);
}

#[test]
fn full_node_object() {
    let s = config::modify_exptime_settings(&json!({
        "type": "ModifyExptimeRoute",
        "target": { "type": "PoolRoute", "pool": "main" },
        "exptime": 60,
        "action": "min"
    }))
    .expect("must parse");
    assert_eq!(s.action, ExptimeAction::Min);
    assert!(s.target.is_some());
}

#[test]
fn rejected_settings() {
    let cases = [
        json!({ "action": "set" }),                                // no exptime
        json!({ "exptime": "30" }),                                // not an integer
        json!({ "exptime": 1.5 }),                                 // not an integer
        json!({ "exptime": 4_294_967_296_i64 }),                   // out of range
        json!({ "exptime": 30, "action": "max" }),                 // unknown action
        json!({ "exptime": 0, "action": "min" }),                  // min against never
        json!({ "exptime": -1 }),                                  // negative
        json!({ "type": "HashRoute", "exptime": 30 }),             // wrong node type
    ];

    for v in cases {
        let err = config::make_modify_exptime_route(Arc::new(NullRoute), &v).err();
        let err = err.unwrap_or_else(|| panic!("must fail: {v}"));
        assert_eq!(err.result_code().as_str(), "INVALID_CONFIG", "case={v}");
    }
}

#[tokio::test]
async fn built_route_rewrites() {
    common::init_tracing();
    let child = Arc::new(common::RecordingRoute::new("child"));
    let route =
        config::make_modify_exptime_route(child.clone(), &json!({ "exptime": 0, "action": "set" }))
            .unwrap();
    assert_eq!(route.route_name(), "modify-exptime|set|exptime=0");

    let req: Request = UpdateRequest::set("k", "v", 30).into();
    route.route(&req).await.unwrap();
    assert_eq!(child.requests()[0].exptime(), Some(0));
}
