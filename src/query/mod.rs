//! Catalog query engine
//!
//! Stateless filtering, free-text search and ordering over an in-memory product list,
//! plus cart line reconciliation.
//!
//! Every filter present on a [`FilterSpec`] must hold for a product to be kept; sorting
//! is stable, so products with equal keys keep their input order in either direction.

mod merge;
mod params;

pub use merge::{merge_cart_line, CartOp};
pub use params::{PriceBand, SearchParams};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;
use crate::domain::{Category, Product};

/// Fields a catalog listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Price,
    Rating,
    CreatedAt,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::CreatedAt => "createdAt",
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Price => a.price.cmp(&b.price),
            Self::Rating => a.rating.total_cmp(&b.rating),
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "createdAt" => Ok(Self::CreatedAt),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self { Self::Asc => "asc", Self::Desc => "desc" }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self { Self::Asc => ordering, Self::Desc => ordering.reverse() }
    }
}

/// Which product fields free-text search looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Name or description. Used by catalog listings.
    #[default]
    NameAndDescription,
    /// Name, description or category token. Used by the search page.
    IncludeCategory,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSpec {
    pub category: Option<Category>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub search_scope: SearchScope,
}

impl FilterSpec {
    /// True when a category or price bound narrows the listing.
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || self.min_price.is_some() || self.max_price.is_some()
    }

    pub fn with_price_band(mut self, band: PriceBand) -> Self {
        let (min, max) = band.bounds();
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Drops category and price bounds, keeping sort and search.
    pub fn cleared(&self) -> Self {
        Self { category: None, min_price: None, max_price: None, ..self.clone() }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(product, self.needle().as_deref())
    }

    fn matches_with(&self, product: &Product, needle: Option<&str>) -> bool {
        self.matches_search(product, needle)
            && self.category.map_or(true, |c| product.category == c)
            && self.min_price.map_or(true, |min| product.price >= min)
            && self.max_price.map_or(true, |max| product.price <= max)
    }

    fn needle(&self) -> Option<String> {
        self.search.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase)
    }

    fn matches_search(&self, product: &Product, needle: Option<&str>) -> bool {
        let Some(needle) = needle else { return true };
        product.name.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle)
            || (self.search_scope == SearchScope::IncludeCategory && product.category.as_str().contains(needle))
    }
}

/// Returns the products satisfying `spec`, ordered by its sort key when one is set.
///
/// The input is left untouched. Without a sort key the relative input order is kept.
pub fn filter_and_sort(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let needle = spec.needle();
    let mut selected: Vec<Product> = products
        .iter()
        .filter(|p| spec.matches_with(p, needle.as_deref()))
        .cloned()
        .collect();

    if let Some(key) = spec.sort_by {
        let order = spec.sort_order.unwrap_or_default();
        selected.sort_by(|a, b| order.apply(key.compare(a, b)));
    }

    debug!(input = products.len(), output = selected.len(), sort_by = ?spec.sort_by, "catalog query");
    selected
}

/// Search-page lookup over name, description and category. An empty term finds nothing.
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    if term.is_empty() {
        return Vec::new();
    }
    let spec = FilterSpec {
        search: Some(term.to_string()),
        search_scope: SearchScope::IncludeCategory,
        ..FilterSpec::default()
    };
    filter_and_sort(products, &spec)
}
