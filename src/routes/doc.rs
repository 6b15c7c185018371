use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        orders::{OrderDraft, OrderList, OrderSubmission, UpdateOrderStatusRequest},
        products::{CategoryList, ProductInput, ProductList},
    },
    models::{LineItem, Order, OrderStatus, Product},
    response::{ApiResponse, Meta},
    routes::{admin, auth, health, orders, params, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        products::list_products,
        products::list_categories,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        orders::submit_order,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::overview,
    ),
    components(
        schemas(
            Product,
            LineItem,
            Order,
            OrderStatus,
            ProductInput,
            ProductList,
            CategoryList,
            OrderDraft,
            OrderSubmission,
            OrderList,
            UpdateOrderStatusRequest,
            LoginRequest,
            LoginResponse,
            admin::Overview,
            params::ProductQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<OrderSubmission>,
            ApiResponse<OrderList>,
            ApiResponse<Order>,
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Order intake"),
        (name = "Admin", description = "Admin endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
