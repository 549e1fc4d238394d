//! HTTP inbound adapter exposing the kiosk REST endpoints.

pub mod barcodes;
pub mod deposits;
pub mod error;
pub mod health;
pub mod item_types;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod tokens;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Upper bound on JSON bodies; photos arrive inline as data URLs.
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Build the `/api` scope with every kiosk handler and the JSON extractor
/// configuration.
///
/// Handlers read [`state::HttpState`] from app data, which the caller must
/// register.
pub fn api_scope() -> Scope {
    let json_config = web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(validation::json_error_handler);

    web::scope("/api")
        .app_data(json_config)
        .service(tokens::get_token_stats)
        .service(tokens::list_tokens)
        .service(tokens::validate_token)
        .service(tokens::get_token)
        .service(deposits::create_deposit)
        .service(deposits::delete_deposit)
        .service(barcodes::resolve_barcode)
        .service(item_types::list_item_types)
}
