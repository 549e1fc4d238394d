//! Item checklist catalogue handler.
//!
//! ```text
//! GET /api/item-types
//! ```

use actix_web::{get, web};

use crate::domain::{ITEM_TYPES, ItemType};
use crate::inbound::http::schemas::ItemTypeSchema;

/// Item kinds the deposit form offers, in display order.
#[utoipa::path(
    get,
    path = "/api/item-types",
    responses(
        (status = 200, description = "Checklist catalogue", body = [ItemTypeSchema])
    ),
    tags = ["deposits"],
    operation_id = "listItemTypes"
)]
#[get("/item-types")]
pub async fn list_item_types() -> web::Json<Vec<ItemType>> {
    web::Json(ITEM_TYPES.to_vec())
}
