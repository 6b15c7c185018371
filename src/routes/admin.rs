use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::orders::{OrderList, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    services::{admin_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}", get(get_order_admin))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/overview", get(overview))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub products: i64,
    pub orders: i64,
    pub pending_orders: i64,
    pub total_revenue: Decimal,
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
    ),
    responses(
        (status = 200, description = "All orders (admin only)", body = ApiResponse<OrderList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    ensure_admin(&user)?;
    let items = order_service::list(&state, &query).await?;
    let meta = Meta::total(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Orders",
        OrderList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get any order (admin only)", body = ApiResponse<Order>),
        (status = 404, description = "Not Found"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_order_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    ensure_admin(&user)?;
    let order = order_service::get(&state, &id).await?;
    Ok(Json(ApiResponse::success(
        "Order found",
        order,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status overwritten; an unknown id is a no-op with absent data", body = ApiResponse<Order>),
        (status = 400, description = "Invalid status"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    ensure_admin(&user)?;
    let status = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::BadRequest("Invalid order status".into()))?;

    let resp = match order_service::set_status(&state, &id, status).await? {
        Some(order) => ApiResponse::success("Order updated", order, Some(Meta::empty())),
        None => ApiResponse::message("No matching order"),
    };
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Dashboard overview figures", body = ApiResponse<Overview>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn overview(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Overview>>> {
    ensure_admin(&user)?;
    let data = admin_service::overview(&state).await?;
    Ok(Json(ApiResponse::success(
        "Overview",
        data,
        Some(Meta::empty()),
    )))
}
