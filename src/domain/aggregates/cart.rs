//! Cart Aggregate

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use crate::domain::aggregates::product::Product;
use crate::domain::value_objects::{ProductId, Quantity};

/// A product snapshot paired with how many units of it are in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: Quantity,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal { self.product.price * Decimal::from(self.quantity.get()) }
}

/// Whether cart quantities are clamped to the product's stock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockPolicy {
    #[default]
    CapToStock,
    Unbounded,
}

impl StockPolicy {
    fn bound(&self, quantity: Quantity, stock: u32) -> Option<Quantity> {
        match self {
            Self::CapToStock => quantity.capped(stock),
            Self::Unbounded => Some(quantity),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartSummary {
    pub line_count: usize,
    pub unit_count: u64,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Ordered cart lines, at most one per product id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl From<Vec<CartLine>> for Cart {
    /// Duplicate ids are folded into the first line carrying that id.
    fn from(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::default();
        for line in lines {
            match cart.position(&line.product.id) {
                Some(idx) => {
                    let merged = cart.lines[idx].quantity.get().saturating_add(line.quantity.get());
                    if let Some(q) = Quantity::from_signed(i64::from(merged)) { cart.lines[idx].quantity = q; }
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self { cart.lines }
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    pub fn lines(&self) -> &[CartLine] { &self.lines }
    pub fn into_lines(self) -> Vec<CartLine> { self.lines }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Adds `delta` units of `product`, appending a line if none exists yet.
    ///
    /// The stored snapshot is refreshed to `product`. A result below one unit drops
    /// the line. Under [`StockPolicy::CapToStock`] the result is clamped to `product.stock`,
    /// but never below the quantity already in the cart.
    pub fn add(&mut self, product: &Product, delta: i64, policy: StockPolicy) {
        match self.position(&product.id) {
            Some(idx) => {
                let current = self.lines[idx].quantity.get();
                let next = Quantity::from_signed(i64::from(current).saturating_add(delta))
                    .and_then(|q| policy.bound(q, product.stock.max(current)));
                match next {
                    Some(quantity) => self.lines[idx] = CartLine { product: product.clone(), quantity },
                    None => { self.lines.remove(idx); }
                }
            }
            None => {
                if let Some(quantity) = Quantity::from_signed(delta).and_then(|q| policy.bound(q, product.stock)) {
                    self.lines.push(CartLine { product: product.clone(), quantity });
                }
            }
        }
    }

    /// Sets an absolute quantity on an existing line. Returns false when no line matches.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64, policy: StockPolicy) -> bool {
        let Some(idx) = self.position(product_id) else { return false };
        let stock = self.lines[idx].product.stock;
        match Quantity::from_signed(quantity).and_then(|q| policy.bound(q, stock)) {
            Some(q) => self.lines[idx].quantity = q,
            None => { self.lines.remove(idx); }
        }
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) { self.lines.clear(); }

    /// Totals for checkout display. Tax is rounded half-up to cents.
    pub fn summary(&self, tax_rate: Decimal) -> CartSummary {
        let subtotal: Decimal = self.lines.iter().map(CartLine::line_total).sum();
        let tax = (subtotal * tax_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        CartSummary {
            line_count: self.lines.len(),
            unit_count: self.lines.iter().map(|l| u64::from(l.quantity.get())).sum(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::product::ProductDraft;
    use crate::domain::category::Category;

    fn product(id: &str, price: Decimal, stock: u32) -> Product {
        let mut p = Product::create(ProductDraft {
            name: format!("Item {id}"), description: "d".into(), price,
            category: Category::Toys, image: "https://img/x.jpg".into(), stock,
        });
        p.id = ProductId::new(id);
        p
    }

    fn qty(cart: &Cart, id: &str) -> Option<u32> { cart.line(&ProductId::new(id)).map(|l| l.quantity.get()) }

    #[test]
    fn test_add_merges_lines() {
        let x = product("X", Decimal::new(10, 0), 10);
        let mut cart = Cart::new();
        cart.add(&x, 2, StockPolicy::CapToStock);
        assert_eq!(qty(&cart, "X"), Some(2));
        cart.add(&x, 3, StockPolicy::CapToStock);
        assert_eq!(cart.len(), 1); // merged
        assert_eq!(qty(&cart, "X"), Some(5));
    }

    #[test]
    fn test_add_caps_to_stock() {
        let x = product("X", Decimal::new(10, 0), 4);
        let mut cart = Cart::new();
        cart.add(&x, 3, StockPolicy::CapToStock);
        cart.add(&x, 3, StockPolicy::CapToStock);
        assert_eq!(qty(&cart, "X"), Some(4));

        let mut unbounded = Cart::new();
        unbounded.add(&x, 3, StockPolicy::Unbounded);
        unbounded.add(&x, 3, StockPolicy::Unbounded);
        assert_eq!(qty(&unbounded, "X"), Some(6));
    }

    #[test]
    fn test_add_never_lowers_after_stock_drop() {
        let mut x = product("X", Decimal::new(10, 0), 10);
        let mut cart = Cart::new();
        cart.add(&x, 5, StockPolicy::CapToStock);

        x.stock = 2;
        cart.add(&x, 1, StockPolicy::CapToStock);
        assert_eq!(qty(&cart, "X"), Some(5));
        assert_eq!(cart.line(&x.id).unwrap().product.stock, 2);

        x.stock = 0;
        cart.add(&x, 1, StockPolicy::CapToStock);
        assert_eq!(cart.len(), 1);
        assert_eq!(qty(&cart, "X"), Some(5));

        cart.add(&x, -2, StockPolicy::CapToStock);
        assert_eq!(qty(&cart, "X"), Some(3));
    }

    #[test]
    fn test_out_of_stock_is_not_added() {
        let x = product("X", Decimal::new(10, 0), 0);
        let mut cart = Cart::new();
        cart.add(&x, 1, StockPolicy::CapToStock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_delta_can_drop_line() {
        let x = product("X", Decimal::new(10, 0), 10);
        let mut cart = Cart::new();
        cart.add(&x, 2, StockPolicy::CapToStock);
        cart.add(&x, -2, StockPolicy::CapToStock);
        assert!(cart.is_empty());
        cart.add(&x, -1, StockPolicy::CapToStock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let x = product("X", Decimal::new(10, 0), 10);
        let mut cart = Cart::new();
        cart.add(&x, 3, StockPolicy::CapToStock);
        assert!(cart.set_quantity(&x.id, 7, StockPolicy::CapToStock));
        assert_eq!(qty(&cart, "X"), Some(7));
        assert!(cart.set_quantity(&x.id, 0, StockPolicy::CapToStock));
        assert!(cart.is_empty());
        assert!(!cart.set_quantity(&x.id, 2, StockPolicy::CapToStock));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product("A", Decimal::ONE, 5), 1, StockPolicy::CapToStock);
        cart.add(&product("B", Decimal::ONE, 5), 1, StockPolicy::CapToStock);
        assert!(cart.remove(&ProductId::new("A")));
        assert!(!cart.remove(&ProductId::new("A")));
        assert_eq!(cart.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new();
        cart.add(&product("A", Decimal::new(1999, 2), 10), 2, StockPolicy::CapToStock);
        cart.add(&product("B", Decimal::new(500, 2), 10), 1, StockPolicy::CapToStock);
        let s = cart.summary(Decimal::new(8, 2));
        assert_eq!(s.line_count, 2);
        assert_eq!(s.unit_count, 3);
        assert_eq!(s.subtotal, Decimal::new(4498, 2));
        assert_eq!(s.tax, Decimal::new(360, 2));
        assert_eq!(s.total, Decimal::new(4858, 2));
    }

    #[test]
    fn test_deserialize_folds_duplicates() {
        let a = product("A", Decimal::ONE, 5);
        let lines = vec![
            CartLine { product: a.clone(), quantity: Quantity::from_signed(1).unwrap() },
            CartLine { product: a, quantity: Quantity::from_signed(2).unwrap() },
        ];
        let json = serde_json::to_string(&lines).unwrap();
        let cart: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(qty(&cart, "A"), Some(3));
    }
}
