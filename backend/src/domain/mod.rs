//! Domain primitives, ports and services for the token kiosk.
//!
//! Purpose: model the token lifecycle independently of transport and storage.
//! A token is in use exactly when the deposit store holds a record for it;
//! the registry of valid tokens never changes at runtime.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - TokenRegistry, TokenRecord, TokenStats — registry and derived views.
//! - DepositRecord — items held against an in-use token.
//! - TokenService — implementation of the driving ports.

mod barcode;
mod deposit;
pub mod error;
mod item_type;
pub mod ports;
mod token;
mod token_service;
pub mod trace_id;

pub use self::barcode::{BarcodeData, BarcodeResolution};
pub use self::deposit::{DepositRecord, DepositedItem};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::item_type::{ITEM_TYPES, ItemType};
pub use self::token::{
    TOTAL_TOKEN_SLOTS, Token, TokenNumber, TokenRecord, TokenRegistry, TokenStats,
    TokenValidationError,
};
pub use self::token_service::TokenService;
pub use self::trace_id::{TraceId, TraceIdParseError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use sewavault::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u8> {
///     Err(Error::not_found("Token not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
