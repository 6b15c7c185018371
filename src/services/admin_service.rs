use crate::{
    error::AppResult,
    models::OrderStatus,
    routes::admin::Overview,
    state::AppState,
};

/// Dashboard overview figures: collection sizes, pending intake and the sum
/// of submitted order totals.
pub async fn overview(state: &AppState) -> AppResult<Overview> {
    let products = state.store.read_products().await?;
    let orders = state.store.read_orders().await?;

    let total_revenue = orders.iter().map(|o| o.total_price).sum();
    let pending_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count() as i64;

    Ok(Overview {
        products: products.len() as i64,
        orders: orders.len() as i64,
        pending_orders,
        total_revenue,
    })
}
