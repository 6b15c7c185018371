use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::fs;

use crate::models::{Order, Product};
use crate::seed;

pub const PRODUCTS_KEY: &str = "products";
pub const ORDERS_KEY: &str = "orders";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store holding each collection as one JSON-serialized array
/// under `<root>/<key>.json`. Every read deserializes the full collection
/// and every write rewrites it under a single key; there are no partial
/// updates and no cross-key transactions, so concurrent writers are
/// last-write-wins.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Seed both collections with the built-in defaults, only for keys not
    /// present yet. Calling this a second time is a no-op.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).await?;
        if !fs::try_exists(self.key_path(PRODUCTS_KEY)).await? {
            self.write_key(PRODUCTS_KEY, &seed::default_products())
                .await?;
        }
        if !fs::try_exists(self.key_path(ORDERS_KEY)).await? {
            self.write_key(ORDERS_KEY, &seed::default_orders()).await?;
        }
        Ok(())
    }

    /// Absent key falls back to the built-in defaults without writing.
    pub async fn read_products(&self) -> Result<Vec<Product>, StoreError> {
        self.read_key(PRODUCTS_KEY, seed::default_products).await
    }

    pub async fn write_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.write_key(PRODUCTS_KEY, products).await
    }

    /// Absent key falls back to the built-in defaults without writing.
    pub async fn read_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.read_key(ORDERS_KEY, seed::default_orders).await
    }

    pub async fn write_orders(&self, orders: &[Order]) -> Result<(), StoreError> {
        self.write_key(ORDERS_KEY, orders).await
    }

    async fn read_key<T>(&self, key: &str, fallback: fn() -> Vec<T>) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        match fs::read(self.key_path(key)).await {
            // An empty entry counts as absent, same as a missing key.
            Ok(bytes) if bytes.is_empty() => Ok(fallback()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(fallback()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_key<T: Serialize>(&self, key: &str, value: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).await?;
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.key_path(key), bytes).await?;
        Ok(())
    }
}
