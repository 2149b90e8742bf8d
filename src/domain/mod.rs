//! Storefront domain model
pub mod aggregates;
pub mod category;
pub mod value_objects;

pub use aggregates::{Cart, CartLine, CartSummary, Product, ProductDraft, StockPolicy};
pub use category::{Category, UnknownCategory};
pub use value_objects::{ProductId, Quantity};
