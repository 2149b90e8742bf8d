//! Cart line reconciliation

use crate::domain::{Cart, CartLine, Product, StockPolicy};

/// How a quantity applies to a product's cart line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartOp {
    /// Increment by the delta, creating the line when missing.
    Add(i64),
    /// Replace the quantity of an existing line. Missing lines are left alone.
    Set(i64),
}

/// Applies `op` for `product` to `cart` and returns the resulting lines.
///
/// The result never holds two lines for one product, nor a line below one unit.
pub fn merge_cart_line(cart: &[CartLine], product: &Product, op: CartOp, policy: StockPolicy) -> Vec<CartLine> {
    let mut merged = Cart::from(cart.to_vec());
    match op {
        CartOp::Add(delta) => merged.add(product, delta, policy),
        CartOp::Set(quantity) => { merged.set_quantity(&product.id, quantity, policy); }
    }
    merged.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ProductDraft};
    use rust_decimal::Decimal;

    fn product_x() -> Product {
        Product::create(ProductDraft {
            name: "X".into(), description: "x".into(), price: Decimal::new(5, 0),
            category: Category::Beauty, image: "https://img/x.jpg".into(), stock: 10,
        })
    }

    fn quantities(lines: &[CartLine]) -> Vec<u32> { lines.iter().map(|l| l.quantity.get()).collect() }

    #[test]
    fn test_add_twice_merges() {
        let x = product_x();
        let cart = merge_cart_line(&[], &x, CartOp::Add(2), StockPolicy::CapToStock);
        assert_eq!(quantities(&cart), [2]);
        let cart = merge_cart_line(&cart, &x, CartOp::Add(3), StockPolicy::CapToStock);
        assert_eq!(quantities(&cart), [5]);
        assert_eq!(cart[0].product.id, x.id);
    }

    #[test]
    fn test_set_zero_removes() {
        let x = product_x();
        let cart = merge_cart_line(&[], &x, CartOp::Add(3), StockPolicy::CapToStock);
        assert!(merge_cart_line(&cart, &x, CartOp::Set(0), StockPolicy::CapToStock).is_empty());
        assert!(merge_cart_line(&cart, &x, CartOp::Set(-4), StockPolicy::CapToStock).is_empty());
    }

    #[test]
    fn test_set_on_missing_line_is_noop() {
        let x = product_x();
        assert!(merge_cart_line(&[], &x, CartOp::Set(3), StockPolicy::CapToStock).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let x = product_x();
        let cart = merge_cart_line(&[], &x, CartOp::Add(1), StockPolicy::CapToStock);
        let before = cart.clone();
        let _ = merge_cart_line(&cart, &x, CartOp::Add(4), StockPolicy::CapToStock);
        assert_eq!(cart, before);
    }
}
