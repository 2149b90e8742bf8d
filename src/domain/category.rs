//! Product categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of catalog categories. The lowercase token is the storage and query form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Beauty,
    Toys,
    Automotive,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Electronics,
        Self::Clothing,
        Self::Books,
        Self::Home,
        Self::Sports,
        Self::Beauty,
        Self::Toys,
        Self::Automotive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Books => "books",
            Self::Home => "home",
            Self::Sports => "sports",
            Self::Beauty => "beauty",
            Self::Toys => "toys",
            Self::Automotive => "automotive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::Home => "Home & Garden",
            Self::Sports => "Sports & Fitness",
            Self::Beauty => "Beauty & Health",
            Self::Toys => "Toys & Games",
            Self::Automotive => "Automotive",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Electronics => "📱",
            Self::Clothing => "👕",
            Self::Books => "📚",
            Self::Home => "🏠",
            Self::Sports => "⚽",
            Self::Beauty => "💄",
            Self::Toys => "🧸",
            Self::Automotive => "🚗",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
