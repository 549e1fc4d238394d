//! Deposit HTTP handlers.
//!
//! ```text
//! POST   /api/deposits
//! DELETE /api/deposits/{token_number}
//! ```

use actix_web::{delete, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::CreateDepositRequest;
use crate::domain::{DepositedItem, TokenNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_mutation_token, validate_photo};

/// Request payload for recording a deposit.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositRequestBody {
    /// Token the items are held against.
    #[schema(example = 1001)]
    pub token_number: i64,
    /// Depositor photo; must be a `data:image/...` URL.
    #[schema(example = "data:image/jpeg;base64,/9j/4AAQ")]
    pub sangat_photo: String,
    /// Checklist lines.
    pub items: Vec<DepositItemBody>,
    /// Free-text description of unlisted items.
    #[serde(default)]
    pub others: Option<String>,
}

/// One checklist line in a deposit request.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DepositItemBody {
    /// Display name.
    #[schema(example = "Mobile")]
    pub name: String,
    /// Quantity handed over.
    #[schema(minimum = 0, example = 1)]
    pub quantity: u32,
}

/// Acknowledgement returned by deposit mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SuccessResponseBody {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponseBody {
    const OK: Self = Self { success: true };
}

/// Path parameters for deposit routes.
#[derive(Debug, Deserialize)]
pub struct DepositPath {
    token_number: String,
}

fn parse_deposit_request(payload: CreateDepositRequestBody) -> ApiResult<CreateDepositRequest> {
    validate_photo(&payload.sangat_photo, FieldName::new("sangatPhoto"))?;
    Ok(CreateDepositRequest {
        token_number: TokenNumber::new(payload.token_number),
        sangat_photo: payload.sangat_photo,
        items: payload
            .items
            .into_iter()
            .map(|item| DepositedItem::new(item.name, item.quantity))
            .collect(),
        others: payload.others,
    })
}

/// Hold items against a token.
#[utoipa::path(
    post,
    path = "/api/deposits",
    request_body = CreateDepositRequestBody,
    responses(
        (status = 200, description = "Deposit recorded", body = SuccessResponseBody),
        (status = 400, description = "Invalid request data or photo", body = ErrorSchema),
        (status = 500, description = "Invalid token number or token already in use", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["deposits"],
    operation_id = "createDeposit"
)]
#[post("/deposits")]
pub async fn create_deposit(
    state: web::Data<HttpState>,
    payload: web::Json<CreateDepositRequestBody>,
) -> ApiResult<web::Json<SuccessResponseBody>> {
    let request = parse_deposit_request(payload.into_inner())?;
    state.deposits.create_deposit(request).await?;
    Ok(web::Json(SuccessResponseBody::OK))
}

/// Return a token's items and free it.
///
/// Succeeds for any numeric token, held or not.
#[utoipa::path(
    delete,
    path = "/api/deposits/{token_number}",
    params(
        ("token_number" = String, Path, description = "Printed token number")
    ),
    responses(
        (status = 200, description = "Deposit cleared", body = SuccessResponseBody),
        (status = 400, description = "Invalid token number", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["deposits"],
    operation_id = "deleteDeposit"
)]
#[delete("/deposits/{token_number}")]
pub async fn delete_deposit(
    state: web::Data<HttpState>,
    path: web::Path<DepositPath>,
) -> ApiResult<web::Json<SuccessResponseBody>> {
    // Whole-segment parse: `1001abc` is a 400, not a delete of 1001.
    let token_number = parse_mutation_token(&path.token_number, FieldName::new("tokenNumber"))?;
    state.deposits.delete_deposit(token_number).await?;
    info!(%token_number, "items returned");
    Ok(web::Json(SuccessResponseBody::OK))
}

#[cfg(test)]
#[path = "deposits_tests.rs"]
mod tests;
