//! Persistence for the catalog and the cart
//!
//! Each collection is one serialized blob under its own key. Loading is fail-soft:
//! a missing, unreadable or corrupt blob yields an empty collection. Saving replaces
//! the blob wholesale; failures are logged and swallowed.

mod backend;

pub use backend::{Backend, FileBackend, KeyValueBackend, MemoryBackend};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};
use crate::domain::{Cart, Product};

pub const PRODUCTS_KEY: &str = "ecommerce_products";
pub const CART_KEY: &str = "ecommerce_cart";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Load/save contract for the catalog and cart collections.
pub trait PersistenceStore {
    fn load_products(&self) -> Vec<Product>;
    fn save_products(&mut self, products: &[Product]);
    fn load_cart(&self) -> Cart;
    fn save_cart(&mut self, cart: &Cart);
}

/// [`PersistenceStore`] that keeps JSON blobs in a [`KeyValueBackend`].
#[derive(Clone, Debug)]
pub struct JsonStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> JsonStore<B> {
    pub fn new(backend: B) -> Self { Self { backend } }
    pub fn backend(&self) -> &B { &self.backend }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.backend.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key, error = %e, "stored data is corrupt, starting empty");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                error!(key, error = %e, "failed to read storage");
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set(key, raw));
        if let Err(e) = result {
            error!(key, error = %e, "failed to write storage");
        }
    }
}

impl<B: KeyValueBackend> PersistenceStore for JsonStore<B> {
    fn load_products(&self) -> Vec<Product> { self.read(PRODUCTS_KEY) }
    fn save_products(&mut self, products: &[Product]) { self.write(PRODUCTS_KEY, products) }
    fn load_cart(&self) -> Cart { self.read(CART_KEY) }
    fn save_cart(&mut self, cart: &Cart) { self.write(CART_KEY, cart) }
}
