use rust_decimal_macros::dec;
use tempfile::TempDir;

use storefront_api::{
    config::{AppConfig, EmailConfig},
    dto::products::ProductInput,
    notify::EmailClient,
    routes::params::ProductQuery,
    services::catalog_service,
    state::AppState,
    store::Store,
};

fn test_state(dir: &TempDir) -> AppState {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
        admin_username: "admin".into(),
        // Auth is not exercised here.
        admin_password_hash: "unused".into(),
        whatsapp_phone: "218910000000".into(),
        email: EmailConfig {
            base_url: "http://127.0.0.1:1".into(),
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

fn lamp_input() -> ProductInput {
    ProductInput {
        id: None,
        name: "Desk Lamp".into(),
        description: "Adjustable warm-light desk lamp.".into(),
        price: dec!(49.99),
        images: vec!["https://images.example.com/desk-lamp.jpg".into()],
        category: "Home".into(),
        videos: None,
    }
}

#[tokio::test]
async fn initialize_seeds_builtin_collections_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = Store::new(dir.path());

    store.initialize().await?;
    let products = store.read_products().await?;
    let orders = store.read_orders().await?;
    assert_eq!(products.len(), 6);
    assert_eq!(orders.len(), 2);

    // A second call must leave both collections untouched.
    store.initialize().await?;
    assert_eq!(store.read_products().await?, products);
    assert_eq!(store.read_orders().await?, orders);
    Ok(())
}

#[tokio::test]
async fn read_falls_back_to_defaults_without_writing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = Store::new(dir.path());

    let products = store.read_products().await?;
    assert_eq!(products.len(), 6);
    assert!(!dir.path().join("products.json").exists());

    let orders = store.read_orders().await?;
    assert_eq!(orders.len(), 2);
    assert!(!dir.path().join("orders.json").exists());
    Ok(())
}

#[tokio::test]
async fn upsert_without_id_appends_with_fresh_identity() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    let before = state.store.read_products().await?;
    let stored = catalog_service::upsert(&state, lamp_input()).await?;

    let after = state.store.read_products().await?;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&stored));

    assert!(!stored.id.is_empty());
    assert!(before.iter().all(|p| p.id != stored.id));
    assert_eq!(stored.name, "Desk Lamp");
    assert_eq!(stored.price, dec!(49.99));
    assert_eq!(stored.category, "Home");
    Ok(())
}

#[tokio::test]
async fn upsert_with_existing_id_replaces_in_place() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    let before = state.store.read_products().await?;
    let target = before[2].clone();

    let input = ProductInput {
        id: Some(target.id.clone()),
        name: "Renamed Earbuds".into(),
        description: target.description.clone(),
        price: dec!(139.99),
        images: target.images.clone(),
        category: target.category.clone(),
        videos: target.videos.clone(),
    };
    let stored = catalog_service::upsert(&state, input).await?;

    let after = state.store.read_products().await?;
    assert_eq!(after.len(), before.len());
    assert_eq!(after[2], stored);
    assert_eq!(after[2].id, target.id);
    assert_eq!(after[2].name, "Renamed Earbuds");
    assert_eq!(after[2].price, dec!(139.99));
    Ok(())
}

#[tokio::test]
async fn upsert_with_unknown_id_appends_under_fresh_identity() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    let input = ProductInput {
        id: Some("does-not-exist".into()),
        ..lamp_input()
    };
    let stored = catalog_service::upsert(&state, input).await?;

    let after = state.store.read_products().await?;
    assert_eq!(after.len(), 7);
    assert_ne!(stored.id, "does-not-exist");
    assert_eq!(after.last(), Some(&stored));
    Ok(())
}

#[tokio::test]
async fn remove_is_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    catalog_service::remove(&state, "4").await?;
    let after_first = state.store.read_products().await?;
    assert_eq!(after_first.len(), 5);
    assert!(after_first.iter().all(|p| p.id != "4"));

    catalog_service::remove(&state, "4").await?;
    assert_eq!(state.store.read_products().await?, after_first);
    Ok(())
}

#[tokio::test]
async fn list_filters_by_query_and_category() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    let hits = catalog_service::list(
        &state,
        &ProductQuery {
            q: Some("WIRELESS".into()),
            category: None,
        },
    )
    .await?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Wireless Earbuds");

    let fashion = catalog_service::list(
        &state,
        &ProductQuery {
            q: None,
            category: Some("Fashion".into()),
        },
    )
    .await?;
    assert_eq!(fashion.len(), 2);
    assert!(fashion.iter().all(|p| p.category == "Fashion"));
    Ok(())
}

#[tokio::test]
async fn categories_lists_labels_in_first_seen_order() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = test_state(&dir);
    state.store.initialize().await?;

    let labels = catalog_service::categories(&state).await?;
    assert_eq!(labels, vec!["Electronics", "Fashion", "Fragrance"]);
    Ok(())
}
