use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::products::{CategoryList, ProductInput, ProductList},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/categories", get(list_categories))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("q" = Option<String>, Query, description = "Substring filter on name/description"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = catalog_service::list(&state, &query).await?;
    let meta = Meta::total(items.len() as i64);
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/categories",
    responses(
        (status = 200, description = "Distinct category labels", body = ApiResponse<CategoryList>)
    ),
    tag = "Products"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let items = catalog_service::categories(&state).await?;
    Ok(Json(ApiResponse::success(
        "Categories",
        CategoryList { items },
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = catalog_service::get(&state, &id).await?;
    Ok(Json(ApiResponse::success("Product", product, None)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductInput,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    ensure_admin(&user)?;
    // A create never reuses a submitted identity.
    let payload = ProductInput {
        id: None,
        ..payload
    };
    payload.validate()?;
    let product = catalog_service::upsert(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Upserted product; an unknown id gets a fresh identity", body = ApiResponse<Product>),
        (status = 400, description = "Missing required fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    ensure_admin(&user)?;
    let payload = ProductInput {
        id: Some(id),
        ..payload
    };
    payload.validate()?;
    let product = catalog_service::upsert(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted; removing an unknown id is a no-op"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    ensure_admin(&user)?;
    catalog_service::remove(&state, &id).await?;
    Ok(Json(ApiResponse::message("Deleted")))
}
