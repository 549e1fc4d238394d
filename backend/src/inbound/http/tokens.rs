//! Token HTTP handlers.
//!
//! ```text
//! GET /api/tokens
//! GET /api/tokens/stats
//! GET /api/tokens/{token_number}
//! GET /api/tokens/{token_number}/validate
//! ```
//!
//! `stats` must be registered before `{token_number}` so the literal segment
//! wins.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{TokenRecord, TokenStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TokenRecordSchema, TokenStatsSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_lookup_token;

/// Path parameters for single-token routes.
#[derive(Debug, Deserialize)]
pub struct TokenPath {
    token_number: String,
}

/// Response payload for a successful validation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidateTokenResponseBody {
    /// Always `true`; failures are reported as errors.
    pub valid: bool,
    /// The idle token.
    #[schema(value_type = TokenRecordSchema)]
    pub token: TokenRecord,
}

/// Occupancy summary for the kiosk home screen.
#[utoipa::path(
    get,
    path = "/api/tokens/stats",
    responses(
        (status = 200, description = "Token occupancy", body = TokenStatsSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "getTokenStats"
)]
#[get("/tokens/stats")]
pub async fn get_token_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<TokenStats>> {
    let stats = state.tokens.stats().await?;
    Ok(web::Json(stats))
}

/// Every registered token joined with its current deposit.
#[utoipa::path(
    get,
    path = "/api/tokens",
    responses(
        (status = 200, description = "All tokens", body = [TokenRecordSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "listTokens"
)]
#[get("/tokens")]
pub async fn list_tokens(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TokenRecord>>> {
    let tokens = state.tokens.list().await?;
    Ok(web::Json(tokens))
}

/// Confirm a token can accept a deposit.
#[utoipa::path(
    get,
    path = "/api/tokens/{token_number}/validate",
    params(
        ("token_number" = String, Path, description = "Printed token number")
    ),
    responses(
        (status = 200, description = "Token is free", body = ValidateTokenResponseBody),
        (status = 404, description = "Token not found in system", body = ErrorSchema),
        (status = 409, description = "Token is already in use", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "validateToken"
)]
#[get("/tokens/{token_number}/validate")]
pub async fn validate_token(
    state: web::Data<HttpState>,
    path: web::Path<TokenPath>,
) -> ApiResult<web::Json<ValidateTokenResponseBody>> {
    // Whole-segment parse: a digit prefix such as `1001abc` does not name token 1001.
    let token_number = parse_lookup_token(&path.token_number, "Token not found in system")?;
    let token = state.tokens.validate(token_number).await?;
    Ok(web::Json(ValidateTokenResponseBody { valid: true, token }))
}

/// Fetch an in-use token with its deposit, for the return flow.
#[utoipa::path(
    get,
    path = "/api/tokens/{token_number}",
    params(
        ("token_number" = String, Path, description = "Printed token number")
    ),
    responses(
        (status = 200, description = "Token and its deposit", body = TokenRecordSchema),
        (status = 404, description = "Token not found or not in use", body = ErrorSchema)
    ),
    tags = ["tokens"],
    operation_id = "getToken"
)]
#[get("/tokens/{token_number}")]
pub async fn get_token(
    state: web::Data<HttpState>,
    path: web::Path<TokenPath>,
) -> ApiResult<web::Json<TokenRecord>> {
    // Whole-segment parse: a digit prefix such as `1001abc` does not name token 1001.
    let token_number = parse_lookup_token(&path.token_number, "Token not found")?;
    let token = state.tokens.get(token_number).await?;
    Ok(web::Json(token))
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
