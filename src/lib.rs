//! ShopHub Storefront
//!
//! Catalog query, cart and local persistence engine behind the ShopHub storefront.
//!
//! ## Features
//! - Product catalog with category, price and free-text filtering
//! - Stable sorting by name, price, rating or creation date
//! - Shopping cart with stock-aware quantity reconciliation
//! - Admin create/edit/delete of products
//! - Fail-soft key-value persistence (in memory or on disk)

pub mod config;
pub mod domain;
pub mod query;
pub mod sample;
pub mod storage;
pub mod storefront;
pub mod telemetry;

use thiserror::Error;

pub use config::StorefrontConfig;
pub use domain::{Cart, CartLine, CartSummary, Category, Product, ProductDraft, ProductId, Quantity, StockPolicy};
pub use query::{filter_and_sort, merge_cart_line, search, CartOp, FilterSpec, PriceBand, SearchParams, SearchScope, SortKey, SortOrder};
pub use storage::{JsonStore, PersistenceStore, StorageError};
pub use storefront::Storefront;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] validator::ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
