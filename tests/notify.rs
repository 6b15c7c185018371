use httpmock::prelude::*;
use rust_decimal_macros::dec;

use storefront_api::config::EmailConfig;
use storefront_api::notify::{EmailClient, OrderEmailData, build_whatsapp_link};

fn email_config(base_url: &str) -> EmailConfig {
    EmailConfig {
        base_url: base_url.to_string(),
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        public_key: "key_test".into(),
        from_name: "Test Store".into(),
        reply_to: "store@test.example".into(),
    }
}

fn order_data(notes: Option<&str>) -> OrderEmailData {
    OrderEmailData {
        customer_name: "Adam Mansour".into(),
        city: "Tripoli".into(),
        address: "Victory Street 5".into(),
        phone: "0912345678".into(),
        product_details: "Flagship Smartphone x1 - 1299.99".into(),
        total_price: dec!(1299.99),
        notes: notes.map(str::to_string),
    }
}

#[tokio::test]
async fn send_order_email_returns_true_on_provider_ok() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send").json_body_partial(
                r#"{
                    "service_id": "service_test",
                    "template_id": "template_test",
                    "user_id": "key_test",
                    "template_params": {
                        "from_name": "Test Store",
                        "customer_name": "Adam Mansour",
                        "customer_phone": "0912345678",
                        "customer_address": "Tripoli, Victory Street 5",
                        "product_price": "1299.99",
                        "reply_to": "store@test.example"
                    }
                }"#,
            );
            then.status(200);
        })
        .await;

    let client = EmailClient::new(&email_config(&server.base_url()));
    assert!(client.send_order_email(&order_data(None)).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn send_order_email_returns_false_on_non_200() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(400).body("bad template");
        })
        .await;

    let client = EmailClient::new(&email_config(&server.base_url()));
    assert!(!client.send_order_email(&order_data(None)).await);
}

#[tokio::test]
async fn send_order_email_returns_false_on_transport_failure() {
    // Nothing listens here; the transport error must surface as `false`.
    let client = EmailClient::new(&email_config("http://127.0.0.1:1"));
    assert!(!client.send_order_email(&order_data(None)).await);
}

#[test]
fn whatsapp_link_encodes_the_order_summary() {
    let link = build_whatsapp_link("218910000000", &order_data(Some("Call before delivery")));

    assert!(link.starts_with("https://wa.me/218910000000?text="));
    assert!(link.contains("Adam%20Mansour"));
    assert!(link.contains("Tripoli"));
    assert!(link.contains("1299%2E99"));
    assert!(link.contains("Call%20before%20delivery"));
    assert!(!link.contains(' '));
}

#[test]
fn whatsapp_link_omits_absent_notes() {
    let link = build_whatsapp_link("218910000000", &order_data(None));
    assert!(!link.contains("Notes"));
}
