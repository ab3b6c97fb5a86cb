use serde_json::json;

use super::ClientError;
use super::response::{ExecutionStatus, check_query, check_status};

#[test]
fn success_status_passes() {
    let status = check_status(&json!({ "code": 200, "message": "SUCCESS_STATUS" }))
        .expect("200 is success");
    assert!(status.is_success());
    assert_eq!(status.message(), "SUCCESS_STATUS");
}

#[test]
fn failure_status_becomes_remote_error() {
    let err = check_status(&json!({ "code": 509, "message": "root.sg9 is not a database" }))
        .expect_err("509 is a failure");
    match err {
        ClientError::RemoteError { code, message } => {
            assert_eq!(code, 509);
            assert_eq!(message, "root.sg9 is not a database");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn missing_code_is_malformed() {
    let err = check_status(&json!({ "message": "no code" })).expect_err("code required");
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

#[test]
fn null_message_is_tolerated() {
    let status = ExecutionStatus::from_json(&json!({ "code": 200, "message": null })).unwrap();
    assert_eq!(status.message(), "");
}

#[test]
fn query_results_without_code_pass() {
    check_query(&json!({ "timestamps": [1], "values": [[1]] })).expect("data payload");
}

#[test]
fn query_results_with_failure_code_fail() {
    let err = check_query(&json!({ "code": 700, "message": "syntax error" }))
        .expect_err("failure code");
    assert!(matches!(err, ClientError::RemoteError { code: 700, .. }));
}

#[test]
fn query_results_must_be_objects() {
    let err = check_query(&json!([1, 2])).expect_err("array is not a result");
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}
