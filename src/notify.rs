use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use crate::config::EmailConfig;

/// Fields the provider template expects for an order notification.
#[derive(Debug, Clone)]
pub struct OrderEmailData {
    pub customer_name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub product_details: String,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

/// Client for the hosted template-rendering email endpoint. The base URL is
/// injectable so tests can point it at a local server.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
    from_name: String,
    reply_to: String,
}

impl EmailClient {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            from_name: config.from_name.clone(),
            reply_to: config.reply_to.clone(),
        }
    }

    /// One outbound call per order: no retry, no queue, and no timeout
    /// beyond the transport's own defaults. Returns `true` only on an
    /// explicit 200 from the provider; any other status or transport
    /// failure is logged and reported as `false`.
    pub async fn send_order_email(&self, data: &OrderEmailData) -> bool {
        let body = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": {
                "from_name": self.from_name,
                "product_name": data.product_details,
                "product_price": format!("{:.2}", data.total_price),
                "customer_name": data.customer_name,
                "customer_phone": data.phone,
                "customer_address": format!("{}, {}", data.city, data.address),
                "notes": data.notes.clone().unwrap_or_default(),
                "reply_to": self.reply_to,
            }
        });

        let url = format!("{}/api/v1.0/email/send", self.base_url);
        match self.http.post(&url).json(&body).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "order email rejected by provider");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to send order email");
                false
            }
        }
    }
}

/// Deep link to a chat app conversation with the store operator, pre-filled
/// with a human-readable order summary. Pure string building, no I/O.
pub fn build_whatsapp_link(operator_phone: &str, data: &OrderEmailData) -> String {
    let message = whatsapp_message(data);
    let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC);
    format!("https://wa.me/{operator_phone}?text={encoded}")
}

fn whatsapp_message(data: &OrderEmailData) -> String {
    let mut message = format!(
        "*New storefront order*\n\
         ------------------\n\
         *Name:* {}\n\
         *City:* {}\n\
         *Address:* {}\n\
         *Phone:* {}\n\
         ------------------\n\
         *Products:*\n\
         {}\n\
         ------------------\n\
         *Total:* {:.2}",
        data.customer_name,
        data.city,
        data.address,
        data.phone,
        data.product_details,
        data.total_price,
    );
    if let Some(notes) = data.notes.as_deref().filter(|n| !n.is_empty()) {
        message.push_str("\n*Notes:* ");
        message.push_str(notes);
    }
    message
}
