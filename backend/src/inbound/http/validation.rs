//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path segments and bodies are checked here so the domain service only ever
//! sees well-typed input.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, TokenNumber};

/// Message the kiosk shows for any body that fails to deserialise.
pub(crate) const INVALID_REQUEST_DATA: &str = "Invalid request data";

const PHOTO_PREFIX: &str = "data:image/";

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidTokenNumber,
    InvalidPhoto,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidTokenNumber => "invalid_token_number",
            ErrorCode::InvalidPhoto => "invalid_photo",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

/// Parse a token number path segment for lookup routes.
///
/// Non-numeric input cannot name a registered token, so it is reported as
/// `NotFound` with the route's usual message.
pub(crate) fn parse_lookup_token(
    raw: &str,
    not_found_message: &'static str,
) -> Result<TokenNumber, Error> {
    raw.parse().map_err(|_| {
        debug!(value = raw, "non-numeric token in lookup path");
        Error::not_found(not_found_message)
    })
}

/// Parse a token number path segment for mutating routes.
pub(crate) fn parse_mutation_token(raw: &str, field: FieldName) -> Result<TokenNumber, Error> {
    raw.parse().map_err(|_| {
        ValidationError::new(field.as_str(), "Invalid token number")
            .with_value(ErrorCode::InvalidTokenNumber, raw)
    })
}

/// Require a `data:image/...` URL.
pub(crate) fn validate_photo(photo: &str, field: FieldName) -> Result<(), Error> {
    if photo.starts_with(PHOTO_PREFIX) {
        Ok(())
    } else {
        Err(ValidationError::new(field.as_str(), "Invalid photo data")
            .with_code(ErrorCode::InvalidPhoto))
    }
}

/// `JsonConfig` error handler mapping body failures onto the domain envelope.
pub(crate) fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    Error::invalid_request(INVALID_REQUEST_DATA)
        .with_details(json!({
            "code": ErrorCode::MalformedBody.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}
