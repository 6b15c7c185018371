use chrono::Utc;

use crate::{
    dto::orders::{OrderDraft, OrderSubmission},
    error::{AppError, AppResult},
    models::{self, Order, OrderStatus},
    notify::{self, OrderEmailData},
    routes::params::OrderListQuery,
    state::AppState,
};

/// Assigns a fresh identity, the current calendar date and the `pending`
/// status, then appends. Line items are not checked against the catalog and
/// the total price is stored exactly as submitted.
pub async fn create(state: &AppState, draft: OrderDraft) -> AppResult<Order> {
    let mut orders = state.store.read_orders().await?;

    let order = Order {
        id: models::fresh_id(orders.iter().map(|o| o.id.as_str())),
        customer_name: draft.customer_name,
        city: draft.city,
        address: draft.address,
        phone: draft.phone,
        products: draft.products,
        total_price: draft.total_price,
        status: OrderStatus::Pending,
        date: Utc::now().date_naive(),
        notes: draft.notes,
    };

    orders.push(order.clone());
    state.store.write_orders(&orders).await?;
    Ok(order)
}

/// Overwrites the status of the matching order. An unknown id leaves the
/// collection unchanged and yields `None`; no error is signaled.
pub async fn set_status(
    state: &AppState,
    id: &str,
    status: OrderStatus,
) -> AppResult<Option<Order>> {
    let mut orders = state.store.read_orders().await?;

    let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
        return Ok(None);
    };
    order.status = status;
    let updated = order.clone();

    state.store.write_orders(&orders).await?;
    Ok(Some(updated))
}

pub async fn list(state: &AppState, query: &OrderListQuery) -> AppResult<Vec<Order>> {
    let mut orders = state.store.read_orders().await?;
    if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
        orders.retain(|o| o.status.as_str() == status);
    }
    Ok(orders)
}

pub async fn get(state: &AppState, id: &str) -> AppResult<Order> {
    let orders = state.store.read_orders().await?;
    orders
        .into_iter()
        .find(|o| o.id == id)
        .ok_or(AppError::NotFound)
}

/// Order-intake flow: persist the order, then attempt the notification
/// email. A failed notification never rolls the order back; the outcome is
/// reported alongside the stored order together with the operator chat link.
pub async fn submit(state: &AppState, draft: OrderDraft) -> AppResult<OrderSubmission> {
    let email_data = email_data_for(state, &draft).await?;
    let order = create(state, draft).await?;

    let notified = state.email.send_order_email(&email_data).await;
    let whatsapp_link = notify::build_whatsapp_link(&state.config.whatsapp_phone, &email_data);

    Ok(OrderSubmission {
        order,
        notified,
        whatsapp_link,
    })
}

async fn email_data_for(state: &AppState, draft: &OrderDraft) -> AppResult<OrderEmailData> {
    let catalog = state.store.read_products().await?;

    let product_details = draft
        .products
        .iter()
        .map(|item| {
            match catalog.iter().find(|p| p.id == item.product_id) {
                Some(product) => {
                    format!("{} x{} - {:.2}", product.name, item.quantity, product.price)
                }
                // Line items are never validated against the catalog; a
                // dangling reference still gets summarized.
                None => format!("#{} x{}", item.product_id, item.quantity),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(OrderEmailData {
        customer_name: draft.customer_name.clone(),
        city: draft.city.clone(),
        address: draft.address.clone(),
        phone: draft.phone.clone(),
        product_details,
        total_price: draft.total_price,
        notes: draft.notes.clone(),
    })
}
