//! String query parameters and quick price ranges

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;
use super::{FilterSpec, SortKey, SortOrder};

/// Raw listing parameters as they arrive from a URL query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl SearchParams {
    /// Set parameters in URL order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("category", &self.category),
            ("minPrice", &self.min_price),
            ("maxPrice", &self.max_price),
            ("sortBy", &self.sort_by),
            ("sortOrder", &self.sort_order),
            ("search", &self.search),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
        .collect()
    }
}

fn parse_field<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(param = name, value = raw, "ignoring malformed query parameter");
            None
        }
    }
}

impl FilterSpec {
    /// Parses listing parameters. Anything malformed or unknown is treated as absent.
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            category: parse_field("category", params.category.as_deref()),
            min_price: parse_field::<Decimal>("minPrice", params.min_price.as_deref()),
            max_price: parse_field::<Decimal>("maxPrice", params.max_price.as_deref()),
            sort_by: parse_field::<SortKey>("sortBy", params.sort_by.as_deref()),
            sort_order: params.sort_order.as_deref().map(|o| match o {
                "desc" => SortOrder::Desc,
                _ => SortOrder::Asc,
            }),
            search: params.search.clone().filter(|s| !s.is_empty()),
            ..Self::default()
        }
    }
}

impl From<&FilterSpec> for SearchParams {
    fn from(spec: &FilterSpec) -> Self {
        Self {
            category: spec.category.map(|c| c.as_str().to_string()),
            min_price: spec.min_price.map(|p| p.normalize().to_string()),
            max_price: spec.max_price.map(|p| p.normalize().to_string()),
            sort_by: spec.sort_by.map(|k| k.as_str().to_string()),
            sort_order: spec.sort_order.map(|o| o.as_str().to_string()),
            search: spec.search.clone(),
        }
    }
}

/// Preset price ranges offered next to the manual bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Under25,
    From25To50,
    From50To100,
    From100To200,
    Over200,
}

impl PriceBand {
    pub const ALL: [PriceBand; 5] = [Self::Under25, Self::From25To50, Self::From50To100, Self::From100To200, Self::Over200];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under25 => "Under $25",
            Self::From25To50 => "$25 - $50",
            Self::From50To100 => "$50 - $100",
            Self::From100To200 => "$100 - $200",
            Self::Over200 => "Over $200",
        }
    }

    pub fn bounds(&self) -> (Option<Decimal>, Option<Decimal>) {
        let d = |v: i64| Some(Decimal::from(v));
        match self {
            Self::Under25 => (d(0), d(25)),
            Self::From25To50 => (d(25), d(50)),
            Self::From50To100 => (d(50), d(100)),
            Self::From100To200 => (d(100), d(200)),
            Self::Over200 => (d(200), None),
        }
    }
}
