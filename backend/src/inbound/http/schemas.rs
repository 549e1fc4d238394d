//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa derive output"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The token is unknown or not currently in use.
    #[schema(rename = "not_found")]
    NotFound,
    /// The token already holds a deposit.
    #[schema(rename = "conflict")]
    Conflict,
    /// Deposit attempted against an unregistered token.
    #[schema(rename = "invalid_token")]
    InvalidToken,
    /// Deposit attempted against a token that already holds one.
    #[schema(rename = "already_in_use")]
    AlreadyInUse,
    /// The deposit store could not serve the request.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload. `error` carries the message the kiosk shows.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "Token not found")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::DepositedItem`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DepositedItem)]
pub struct DepositedItemSchema {
    /// Display name of the item.
    #[schema(example = "Mobile")]
    name: String,
    /// Number of items handed over.
    #[schema(minimum = 0, example = 1)]
    quantity: u32,
}

/// OpenAPI schema for [`crate::domain::DepositRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DepositRecord, rename_all = "camelCase")]
pub struct DepositRecordSchema {
    /// Depositor photo as a data URL.
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQ")]
    sangat_photo: String,
    /// Checklist lines in submission order.
    items: Vec<DepositedItemSchema>,
    /// Free-text description of unlisted items.
    others: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[schema(example = 1_700_000_000_000_i64)]
    timestamp: i64,
}

/// OpenAPI schema for [`crate::domain::TokenRecord`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TokenRecord, rename_all = "camelCase")]
pub struct TokenRecordSchema {
    /// Printed token number.
    #[schema(example = 1001)]
    token_number: i64,
    /// Secret encoded into the barcode.
    #[schema(example = "IFUD7D")]
    secret: String,
    /// Full barcode text.
    #[schema(example = "ABX_1001_IFUD7D_RSSB")]
    barcode_data: String,
    /// Whether a deposit is currently held.
    is_in_use: bool,
    /// The held deposit, omitted when idle.
    deposit: Option<DepositRecordSchema>,
}

/// OpenAPI schema for [`crate::domain::TokenStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TokenStats, rename_all = "camelCase")]
pub struct TokenStatsSchema {
    /// Tokens currently holding a deposit.
    #[schema(example = 3)]
    in_use: usize,
    /// Free slots out of twenty.
    #[schema(example = 17)]
    available: usize,
}

/// OpenAPI schema for [`crate::domain::BarcodeResolution`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BarcodeResolution, rename_all = "camelCase")]
pub struct BarcodeResolutionSchema {
    /// Whether the barcode matches a registered token.
    valid: bool,
    /// Matched token number, present only when valid.
    #[schema(example = 1001)]
    token_number: Option<i64>,
}

/// OpenAPI schema for [`crate::domain::ItemType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ItemType)]
pub struct ItemTypeSchema {
    /// Stable identifier.
    #[schema(example = "mobile")]
    id: String,
    /// Display name.
    #[schema(example = "Mobile")]
    name: String,
    /// Icon key.
    #[schema(example = "smartphone")]
    icon: String,
}
