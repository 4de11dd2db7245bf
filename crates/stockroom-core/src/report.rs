//! # Inventory Reporting
//!
//! Aggregates the current product set into a status report.
//!
//! ## Computed Figures
//! - `total_products` — count of distinct entries (NOT summed quantity)
//! - `total_value` — `sum(price * quantity)` over all products, exact
//!   within the i64 cent range and clamped at its bounds
//! - `total_quantity` — `sum(quantity)` over all products, clamped the
//!   same way
//! - `highest_stock` — the single product with the maximum quantity;
//!   ties go to the first-encountered product in current order
//!
//! An empty inventory reports all-zero totals and no highest-stock
//! product; there is deliberately no panic path here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

/// A point-in-time inventory status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    /// Count of distinct product entries.
    pub total_products: usize,

    /// Total inventory value: `sum(price * quantity)`.
    pub total_value: Money,

    /// Total unit quantity across all products.
    pub total_quantity: i64,

    /// Product with the highest quantity, `None` for an empty store.
    pub highest_stock: Option<Product>,
}

impl InventoryReport {
    /// Computes the report over the given product sequence.
    pub fn generate(products: &[Product]) -> Self {
        let mut total_value = Money::zero();
        let mut total_quantity = 0i64;
        let mut highest_stock: Option<&Product> = None;

        for product in products {
            total_value += product.stock_value();
            total_quantity = total_quantity.saturating_add(product.quantity);

            // Strict greater-than: first-encountered wins ties
            match highest_stock {
                Some(current) if product.quantity > current.quantity => {
                    highest_stock = Some(product);
                }
                None => highest_stock = Some(product),
                _ => {}
            }
        }

        InventoryReport {
            total_products: products.len(),
            total_value,
            total_quantity,
            highest_stock: highest_stock.cloned(),
        }
    }
}

/// Multi-line rendering matching the console report layout.
impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of products: {}", self.total_products)?;
        writeln!(f, "Total inventory value: {}", self.total_value)?;
        match &self.highest_stock {
            Some(product) => writeln!(f, "Highest selling product: {product}")?,
            None => writeln!(f, "Highest selling product: (empty inventory)")?,
        }
        write!(f, "Total quantity of products: {}", self.total_quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
