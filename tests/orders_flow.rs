use chrono::Utc;
use httpmock::prelude::*;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use storefront_api::{
    config::{AppConfig, EmailConfig},
    dto::orders::OrderDraft,
    models::{LineItem, OrderStatus},
    notify::EmailClient,
    routes::params::OrderListQuery,
    services::{admin_service, order_service},
    state::AppState,
    store::Store,
};

fn test_state(dir: &TempDir, email_base: &str) -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
        admin_username: "admin".into(),
        // Auth is not exercised here.
        admin_password_hash: "unused".into(),
        whatsapp_phone: "218910000000".into(),
        email: EmailConfig {
            base_url: email_base.into(),
            service_id: "service_test".into(),
            template_id: "template_test".into(),
            public_key: "key_test".into(),
            from_name: "Test Store".into(),
            reply_to: "store@test.example".into(),
        },
    };
    AppState {
        store: Store::new(dir.path()),
        email: EmailClient::new(&config.email),
        config,
    }
}

fn smartphone_draft() -> OrderDraft {
    OrderDraft {
        customer_name: "Layla Haddad".into(),
        city: "Misrata".into(),
        address: "Harbor Road 12".into(),
        phone: "0918765432".into(),
        products: vec![LineItem {
            product_id: "1".into(),
            quantity: 1,
        }],
        total_price: dec!(1299.99),
        notes: None,
    }
}

#[tokio::test]
async fn create_assigns_identity_date_and_pending_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir, "http://127.0.0.1:1");
    state.store.initialize().await?;

    let order = order_service::create(&state, smartphone_draft()).await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.date, Utc::now().date_naive());
    assert_eq!(order.total_price, dec!(1299.99));
    assert_eq!(order.products.len(), 1);
    assert!(!order.id.is_empty());

    let orders = state.store.read_orders().await?;
    assert_eq!(orders.len(), 3);
    assert_eq!(orders.last(), Some(&order));
    // Seeded identities stay untouched.
    assert!(orders.iter().filter(|o| o.id == order.id).count() == 1);
    Ok(())
}

#[tokio::test]
async fn set_status_round_trip_preserves_every_other_field() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir, "http://127.0.0.1:1");
    state.store.initialize().await?;

    let created = order_service::create(&state, smartphone_draft()).await?;

    let shipped = order_service::set_status(&state, &created.id, OrderStatus::Shipped)
        .await?
        .expect("order exists");
    assert_eq!(shipped.status, OrderStatus::Shipped);

    let back = order_service::set_status(&state, &created.id, OrderStatus::Pending)
        .await?
        .expect("order exists");
    // No transition restriction, and nothing but the status may change.
    assert_eq!(back, created);
    Ok(())
}

#[tokio::test]
async fn set_status_on_unknown_id_is_a_silent_noop() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir, "http://127.0.0.1:1");
    state.store.initialize().await?;

    let before = state.store.read_orders().await?;
    let result = order_service::set_status(&state, "no-such-order", OrderStatus::Shipped).await?;

    assert!(result.is_none());
    assert_eq!(state.store.read_orders().await?, before);
    Ok(())
}

#[tokio::test]
async fn list_filters_by_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir, "http://127.0.0.1:1");
    state.store.initialize().await?;

    let processing = order_service::list(
        &state,
        &OrderListQuery {
            status: Some("processing".into()),
        },
    )
    .await?;
    assert_eq!(processing.len(), 1);
    assert_eq!(processing[0].status, OrderStatus::Processing);

    let all = order_service::list(&state, &OrderListQuery { status: None }).await?;
    assert_eq!(all.len(), 2);
    Ok(())
}

#[tokio::test]
async fn submit_notifies_provider_and_returns_chat_link() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send").json_body_partial(
                r#"{"service_id":"service_test","template_id":"template_test","user_id":"key_test","template_params":{"customer_name":"Layla Haddad"}}"#,
            );
            then.status(200);
        })
        .await;

    let dir = TempDir::new()?;
    let state = test_state(&dir, &server.base_url());
    state.store.initialize().await?;

    let submission = order_service::submit(&state, smartphone_draft()).await?;
    mock.assert_async().await;

    assert!(submission.notified);
    assert_eq!(submission.order.status, OrderStatus::Pending);
    assert!(
        submission
            .whatsapp_link
            .starts_with("https://wa.me/218910000000?text=")
    );
    Ok(())
}

#[tokio::test]
async fn submit_persists_order_even_when_notification_fails() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(500);
        })
        .await;

    let dir = TempDir::new()?;
    let state = test_state(&dir, &server.base_url());
    state.store.initialize().await?;

    let submission = order_service::submit(&state, smartphone_draft()).await?;
    assert!(!submission.notified);

    // The order outlives the failed notification; there is no rollback.
    let orders = state.store.read_orders().await?;
    assert!(orders.iter().any(|o| o.id == submission.order.id));
    Ok(())
}

#[tokio::test]
async fn overview_counts_collections_and_sums_revenue() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir, "http://127.0.0.1:1");
    state.store.initialize().await?;

    let seeded = admin_service::overview(&state).await?;
    assert_eq!(seeded.products, 6);
    assert_eq!(seeded.orders, 2);
    assert_eq!(seeded.pending_orders, 0);
    assert_eq!(seeded.total_revenue, dec!(1919.96));

    order_service::create(&state, smartphone_draft()).await?;

    let after = admin_service::overview(&state).await?;
    assert_eq!(after.orders, 3);
    assert_eq!(after.pending_orders, 1);
    assert_eq!(after.total_revenue, dec!(3219.95));
    Ok(())
}
