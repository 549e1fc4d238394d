//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every kiosk endpoint and the schema wrappers from
//! [`crate::inbound::http::schemas`], which describe domain types without
//! coupling them to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::barcodes::ResolveBarcodeRequestBody;
use crate::inbound::http::deposits::{
    CreateDepositRequestBody, DepositItemBody, SuccessResponseBody,
};
use crate::inbound::http::schemas::{
    BarcodeResolutionSchema, DepositRecordSchema, DepositedItemSchema, ErrorCodeSchema,
    ErrorSchema, ItemTypeSchema, TokenRecordSchema, TokenStatsSchema,
};
use crate::inbound::http::tokens::ValidateTokenResponseBody;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SewaVault kiosk API",
        description = "Token validation, deposit and return endpoints for the item-deposit kiosk."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tokens::get_token_stats,
        crate::inbound::http::tokens::list_tokens,
        crate::inbound::http::tokens::validate_token,
        crate::inbound::http::tokens::get_token,
        crate::inbound::http::deposits::create_deposit,
        crate::inbound::http::deposits::delete_deposit,
        crate::inbound::http::barcodes::resolve_barcode,
        crate::inbound::http::item_types::list_item_types,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TokenRecordSchema,
        TokenStatsSchema,
        DepositRecordSchema,
        DepositedItemSchema,
        BarcodeResolutionSchema,
        ItemTypeSchema,
        ValidateTokenResponseBody,
        CreateDepositRequestBody,
        DepositItemBody,
        SuccessResponseBody,
        ResolveBarcodeRequestBody,
    )),
    tags(
        (name = "tokens", description = "Token validation and lookup"),
        (name = "deposits", description = "Deposit and return of items"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
