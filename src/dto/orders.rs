use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::{LineItem, Order};

/// Order-intake payload. Identity, creation date and the initial status are
/// assigned by the order service; the total price is taken as submitted and
/// never recomputed from the line items.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer_name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub products: Vec<LineItem>,
    pub total_price: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        for (value, field) in [
            (&self.customer_name, "customerName"),
            (&self.city, "city"),
            (&self.address, "address"),
            (&self.phone, "phone"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{field} is required")));
            }
        }
        if self.products.is_empty() {
            return Err(AppError::BadRequest(
                "Order needs at least one line item".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of the order-intake flow: the order is persisted regardless of
/// whether the notification email went through.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub order: Order,
    pub notified: bool,
    pub whatsapp_link: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}
