//! Environment configuration

use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;
use crate::domain::StockPolicy;

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    /// Directory for file-backed storage. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    pub tax_rate: Decimal,
    pub stock_policy: StockPolicy,
    /// Seed the sample catalog when the stored catalog is empty.
    pub seed_sample: bool,
    pub featured_count: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tax_rate: Decimal::new(8, 2),
            stock_policy: StockPolicy::CapToStock,
            seed_sample: true,
            featured_count: 6,
        }
    }
}

impl StorefrontConfig {
    /// Reads `STOREFRONT_*` variables, loading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup("STOREFRONT_DATA_DIR").filter(|v| !v.trim().is_empty()).map(PathBuf::from),
            tax_rate: parsed(&lookup, "STOREFRONT_TAX_RATE", defaults.tax_rate)
                .filter(|r| !r.is_sign_negative())
                .unwrap_or(defaults.tax_rate),
            stock_policy: match lookup("STOREFRONT_STOCK_POLICY").as_deref().map(str::trim) {
                None | Some("cap") => StockPolicy::CapToStock,
                Some("unbounded") => StockPolicy::Unbounded,
                Some(other) => {
                    warn!(value = other, "unknown STOREFRONT_STOCK_POLICY, using cap");
                    StockPolicy::CapToStock
                }
            },
            seed_sample: parsed(&lookup, "STOREFRONT_SEED_SAMPLE", defaults.seed_sample).unwrap_or(defaults.seed_sample),
            featured_count: parsed(&lookup, "STOREFRONT_FEATURED_COUNT", defaults.featured_count)
                .unwrap_or(defaults.featured_count),
        }
    }
}

/// `Some(default)` when unset, `None` (after a warning) when malformed.
fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Option<T> {
    let Some(raw) = lookup(key) else { return Some(default) };
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "malformed configuration value, using default");
            None
        }
    }
}
