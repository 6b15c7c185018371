use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::orders::{OrderDraft, OrderSubmission},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderDraft,
    responses(
        (status = 200, description = "Order stored; `notified` reports the email outcome", body = ApiResponse<OrderSubmission>),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Orders"
)]
pub async fn submit_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderDraft>,
) -> AppResult<Json<ApiResponse<OrderSubmission>>> {
    payload.validate()?;
    let submission = order_service::submit(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Order received",
        submission,
        Some(Meta::empty()),
    )))
}
