//! Storefront service
//!
//! Wires the query engine and cart aggregate to a [`PersistenceStore`]. Every call
//! loads what it needs, applies the change and writes the affected collection back.

use anyhow::Context;
use tracing::{debug, info};
use validator::Validate;
use crate::config::StorefrontConfig;
use crate::domain::{Cart, CartSummary, Product, ProductDraft, ProductId};
use crate::query::{self, FilterSpec, SearchParams};
use crate::sample::sample_products;
use crate::storage::{Backend, FileBackend, JsonStore, MemoryBackend, PersistenceStore};
use crate::Result;

pub struct Storefront<S> {
    store: S,
    config: StorefrontConfig,
}

impl Storefront<JsonStore<Backend>> {
    /// Builds a storefront from `STOREFRONT_*` environment configuration.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = StorefrontConfig::from_env();
        let dir = config.data_dir.clone();
        Self::open(config).with_context(|| match dir {
            Some(dir) => format!("failed to open storefront data directory {}", dir.display()),
            None => "failed to open in-memory storefront".to_string(),
        })
    }

    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let backend = match &config.data_dir {
            Some(dir) => Backend::File(FileBackend::open(dir)?),
            None => Backend::Memory(MemoryBackend::new()),
        };
        info!(data_dir = ?config.data_dir, stock_policy = ?config.stock_policy, "storefront opened");
        Ok(Self::new(JsonStore::new(backend), config))
    }
}

impl<S: PersistenceStore> Storefront<S> {
    pub fn new(store: S, config: StorefrontConfig) -> Self { Self { store, config } }

    pub fn config(&self) -> &StorefrontConfig { &self.config }
    pub fn store(&self) -> &S { &self.store }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// The stored catalog, seeded with the sample products when empty and enabled.
    pub fn catalog(&mut self) -> Vec<Product> {
        let products = self.store.load_products();
        if !products.is_empty() || !self.config.seed_sample {
            return products;
        }
        let seeded = sample_products();
        self.store.save_products(&seeded);
        info!(count = seeded.len(), "seeded sample catalog");
        seeded
    }

    pub fn product(&mut self, id: &ProductId) -> Option<Product> {
        self.catalog().into_iter().find(|p| &p.id == id)
    }

    pub fn browse(&mut self, spec: &FilterSpec) -> Vec<Product> { query::filter_and_sort(&self.catalog(), spec) }

    pub fn browse_params(&mut self, params: &SearchParams) -> Vec<Product> {
        self.browse(&FilterSpec::from_params(params))
    }

    pub fn search(&mut self, term: &str) -> Vec<Product> { query::search(&self.catalog(), term) }

    pub fn featured(&mut self) -> Vec<Product> {
        let mut products = self.catalog();
        products.truncate(self.config.featured_count);
        products
    }

    // -------------------------------------------------------------------------
    // Admin
    // -------------------------------------------------------------------------

    /// Products as stored, without sample seeding.
    pub fn admin_products(&self) -> Vec<Product> { self.store.load_products() }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<Product> {
        draft.validate()?;
        let product = Product::create(draft);
        let mut products = self.store.load_products();
        products.push(product.clone());
        self.store.save_products(&products);
        info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Returns `None` when no product has `id`.
    pub fn update_product(&mut self, id: &ProductId, draft: ProductDraft) -> Result<Option<Product>> {
        draft.validate()?;
        let mut products = self.store.load_products();
        let Some(product) = products.iter_mut().find(|p| &p.id == id) else {
            debug!(product_id = %id, "update of unknown product ignored");
            return Ok(None);
        };
        product.apply(draft);
        let updated = product.clone();
        self.store.save_products(&products);
        info!(product_id = %id, "product updated");
        Ok(Some(updated))
    }

    /// Returns whether a product was removed.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let mut products = self.store.load_products();
        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            debug!(product_id = %id, "delete of unknown product ignored");
            return false;
        }
        self.store.save_products(&products);
        info!(product_id = %id, "product deleted");
        true
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> Cart { self.store.load_cart() }

    pub fn cart_summary(&self) -> CartSummary { self.cart().summary(self.config.tax_rate) }

    /// Adds `quantity` units of the product snapshot to the cart.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) -> Cart {
        let mut cart = self.store.load_cart();
        cart.add(product, quantity, self.config.stock_policy);
        self.store.save_cart(&cart);
        info!(product_id = %product.id, quantity, "added to cart");
        cart
    }

    /// Adds by id, looking the product up in the catalog. Unknown ids leave the cart as is.
    pub fn add_to_cart_by_id(&mut self, id: &ProductId, quantity: i64) -> Cart {
        match self.product(id) {
            Some(product) => self.add_to_cart(&product, quantity),
            None => {
                debug!(product_id = %id, "add of unknown product ignored");
                self.cart()
            }
        }
    }

    /// Sets an absolute quantity; zero or below removes the line.
    pub fn update_cart_quantity(&mut self, id: &ProductId, quantity: i64) -> Cart {
        let mut cart = self.store.load_cart();
        if cart.set_quantity(id, quantity, self.config.stock_policy) {
            self.store.save_cart(&cart);
            info!(product_id = %id, quantity, "cart quantity set");
        } else {
            debug!(product_id = %id, "quantity change for product not in cart ignored");
        }
        cart
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> Cart {
        let mut cart = self.store.load_cart();
        if cart.remove(id) {
            self.store.save_cart(&cart);
            info!(product_id = %id, "removed from cart");
        }
        cart
    }

    pub fn clear_cart(&mut self) {
        self.store.save_cart(&Cart::new());
        info!("cart cleared");
    }
}
