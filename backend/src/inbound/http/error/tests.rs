//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

const TRACE_ID: &str = "3d0f2a6c-7b1e-4f58-a9c2-5e8d1b4f7a90";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("mutex poisoned at deposit_store.rs")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}))
}

#[rstest]
#[case(Error::invalid_request("Invalid request data"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("Token not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("Token is already in use"), StatusCode::CONFLICT)]
#[case(Error::invalid_token("Invalid token number"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::already_in_use("Token is already in use"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> serde_json::Value {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(
    #[from(internal_error_case)] internal_error: Error,
    expected_trace_id: String,
) {
    let body = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(
        body,
        json!({
            "error": "Internal server error",
            "code": "internal_error",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn deposit_failures_keep_service_message() {
    let body = assert_error_response(
        Error::already_in_use("Token is already in use"),
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;

    assert_eq!(body["error"], "Token is already in use");
    assert_eq!(body["code"], "already_in_use");
}

#[rstest]
#[actix_web::test]
async fn details_survive_for_client_errors(expected_trace_id: String) {
    let error = Error::invalid_request("Invalid photo data")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "sangatPhoto"}));

    let body = assert_error_response(
        error,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;

    assert_eq!(body["error"], "Invalid photo data");
    assert_eq!(body["details"], json!({"field": "sangatPhoto"}));
}

#[rstest]
fn actix_errors_become_internal() {
    let actix_error = actix_web::error::ErrorBadGateway("upstream exploded");
    let error = Error::from(actix_error);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
