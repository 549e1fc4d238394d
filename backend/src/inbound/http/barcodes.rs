//! Barcode resolution handler.
//!
//! ```text
//! POST /api/barcodes/resolve
//! ```
//!
//! Scanners submit the decoded text; the kiosk uses the result to prefill
//! the token number field.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::BarcodeResolution;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BarcodeResolutionSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request payload carrying scanned barcode text.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ResolveBarcodeRequestBody {
    /// Decoded barcode text.
    #[schema(example = "ABX_1001_IFUD7D_RSSB")]
    pub barcode: String,
}

/// Match scanned text against the token registry.
#[utoipa::path(
    post,
    path = "/api/barcodes/resolve",
    request_body = ResolveBarcodeRequestBody,
    responses(
        (status = 200, description = "Resolution outcome", body = BarcodeResolutionSchema),
        (status = 400, description = "Invalid request data", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "resolveBarcode"
)]
#[post("/barcodes/resolve")]
pub async fn resolve_barcode(
    state: web::Data<HttpState>,
    payload: web::Json<ResolveBarcodeRequestBody>,
) -> ApiResult<web::Json<BarcodeResolution>> {
    let resolution = state.tokens.resolve_barcode(payload.barcode.trim()).await?;
    Ok(web::Json(resolution))
}
