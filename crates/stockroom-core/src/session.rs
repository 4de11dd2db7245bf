//! # Session
//!
//! The role-gated facade owning all mutable state for one login.
//!
//! ## Why a Session Object?
//! The inventory, the history, and the logged-in role all live in one
//! explicit value the shell owns and passes around, never in
//! module-level state. Every operation is unit-testable in isolation
//! and nothing is global.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Operation Flow                              │
//! │                                                                         │
//! │  Console Shell            Session                  State Change         │
//! │  ─────────────            ───────                  ────────────         │
//! │                                                                         │
//! │  1. Add Product ────────► add_product() ─────────► store + ledger       │
//! │  2. Delete Product ─────► delete_product() ──────► ledger + store       │
//! │  3. Update Product ─────► update_product() ──────► store + ledger       │
//! │  4. Display ────────────► products() ────────────► (read only)          │
//! │  5-7. Sort ─────────────► sort() ────────────────► store order          │
//! │  8. Search ─────────────► search_by_name() ──────► (read only)          │
//! │  9. Report ─────────────► generate_report() ─────► (read only)          │
//! │  10. Handle Sales ──────► record_sale() ─────────► store ONLY           │
//! │  11. History ───────────► transactions() ────────► (read only)          │
//! │                                                                         │
//! │  GATING: 1-3 require Role::Admin. 4-11 any authenticated role.          │
//! │  NOTE: record_sale never writes the ledger (preserved asymmetry).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Rule
//! Operations that log check ledger room BEFORE mutating the store, so
//! a full history refuses the whole operation instead of leaving an
//! unlogged mutation behind.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::ledger::TransactionLog;
use crate::money::Money;
use crate::report::InventoryReport;
use crate::store::{Inventory, SortKey};
use crate::types::{Product, Role, Transaction, TransactionKind};
use crate::validation::{validate_product_name, validate_quantity, validate_sale_quantity};

// =============================================================================
// Sale Receipt
// =============================================================================

/// Outcome of a successful sale, for shell display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    /// Name of the product sold.
    pub product_name: String,

    /// Units deducted from stock.
    pub units_sold: i64,

    /// Stock remaining after the sale.
    pub remaining_quantity: i64,
}

// =============================================================================
// Session
// =============================================================================

/// One authenticated session: a role plus the inventory and ledger it
/// operates on. Lives from login to logout; discarded on exit.
#[derive(Debug, Clone)]
pub struct Session {
    role: Role,
    inventory: Inventory,
    ledger: TransactionLog,
}

impl Session {
    /// Creates a session with default capacities (100 products,
    /// 100 history entries).
    pub fn new(role: Role) -> Self {
        Session {
            role,
            inventory: Inventory::new(),
            ledger: TransactionLog::new(),
        }
    }

    /// Creates a session with explicit store and ledger capacities.
    pub fn with_capacities(role: Role, product_capacity: usize, history_capacity: usize) -> Self {
        Session {
            role,
            inventory: Inventory::with_capacity(product_capacity),
            ledger: TransactionLog::with_capacity(history_capacity),
        }
    }

    /// The authenticated role this session was opened with.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The full ordered product listing (menu action 4).
    #[inline]
    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }

    /// The full ordered transaction history (menu action 11).
    #[inline]
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.entries()
    }

    /// Whether the store is at capacity; no add can succeed while true.
    #[inline]
    pub fn is_inventory_full(&self) -> bool {
        self.inventory.is_full()
    }

    /// The maximum number of products the store can hold.
    #[inline]
    pub fn inventory_capacity(&self) -> usize {
        self.inventory.capacity()
    }

    fn require_admin(&self, action: &'static str) -> Result<(), CoreError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(CoreError::PermissionDenied { action })
        }
    }

    fn validate_product_fields(
        name: &str,
        price: Money,
        quantity: i64,
    ) -> Result<String, CoreError> {
        let name = validate_product_name(name)?;
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative { field: "price" }.into());
        }
        validate_quantity(quantity)?;
        Ok(name)
    }

    // =========================================================================
    // Mutating operations (Admin only)
    // =========================================================================

    /// Adds a product to the inventory and logs an `Add` transaction.
    ///
    /// ## Errors
    /// - [`CoreError::PermissionDenied`] unless the role is Admin
    /// - [`CoreError::InventoryFull`] at store capacity
    /// - [`CoreError::DuplicateId`] when the id is already live
    /// - [`CoreError::HistoryFull`] when the ledger cannot take the
    ///   matching entry (nothing is mutated)
    /// - [`CoreError::Validation`] for bad name/price/quantity
    pub fn add_product(&mut self, product: Product) -> Result<(), CoreError> {
        self.require_admin("add")?;

        let name = Self::validate_product_fields(&product.name, product.price, product.quantity)?;
        let product = Product::new(product.id, name, product.price, product.quantity);

        if self.inventory.is_full() {
            return Err(CoreError::InventoryFull {
                capacity: self.inventory.capacity(),
            });
        }
        if self.inventory.contains_id(product.id) {
            return Err(CoreError::DuplicateId { id: product.id });
        }
        if !self.ledger.has_room() {
            return Err(CoreError::HistoryFull {
                capacity: self.ledger.capacity(),
            });
        }

        let entry = Transaction::record(TransactionKind::Add, product.clone(), product.quantity);
        self.inventory.insert(product)?;
        self.ledger.append(entry)?;
        Ok(())
    }

    /// Deletes the first product with a matching id, logging a
    /// `Delete` transaction with the pre-removal snapshot.
    ///
    /// Returns the removed product.
    pub fn delete_product(&mut self, id: u32) -> Result<Product, CoreError> {
        self.require_admin("delete")?;

        let snapshot = self
            .inventory
            .get_by_id(id)
            .cloned()
            .ok_or(CoreError::ProductNotFound { id })?;

        if !self.ledger.has_room() {
            return Err(CoreError::HistoryFull {
                capacity: self.ledger.capacity(),
            });
        }

        self.ledger.append(Transaction::record(
            TransactionKind::Delete,
            snapshot.clone(),
            snapshot.quantity,
        ))?;

        // The lookup above succeeded, so removal cannot miss
        let removed = self
            .inventory
            .remove_by_id(id)
            .ok_or(CoreError::ProductNotFound { id })?;
        Ok(removed)
    }

    /// Overwrites name/price/quantity of the first product with a
    /// matching id, logging an `Update` transaction with the
    /// post-update snapshot.
    ///
    /// Returns the updated product.
    pub fn update_product(
        &mut self,
        id: u32,
        name: &str,
        price: Money,
        quantity: i64,
    ) -> Result<Product, CoreError> {
        self.require_admin("update")?;

        let name = Self::validate_product_fields(name, price, quantity)?;

        if !self.inventory.contains_id(id) {
            return Err(CoreError::ProductNotFound { id });
        }
        if !self.ledger.has_room() {
            return Err(CoreError::HistoryFull {
                capacity: self.ledger.capacity(),
            });
        }

        // Checked above, the lookup cannot miss
        let product = self
            .inventory
            .get_by_id_mut(id)
            .ok_or(CoreError::ProductNotFound { id })?;
        product.name = name;
        product.price = price;
        product.quantity = quantity;

        let snapshot = product.clone();
        self.ledger.append(Transaction::record(
            TransactionKind::Update,
            snapshot.clone(),
            snapshot.quantity,
        ))?;
        Ok(snapshot)
    }

    // =========================================================================
    // Sales (any authenticated role)
    // =========================================================================

    /// Records a sale: decrements stock of the first product with a
    /// matching id.
    ///
    /// Deliberately does NOT append to the transaction ledger; only
    /// Add/Delete/Update are logged, and that asymmetry is a
    /// documented contract (DESIGN.md).
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] on an id miss
    /// - [`CoreError::InsufficientStock`] when `quantity` exceeds
    ///   available stock (no mutation)
    /// - [`CoreError::Validation`] for a non-positive quantity
    pub fn record_sale(&mut self, id: u32, quantity: i64) -> Result<SaleReceipt, CoreError> {
        validate_sale_quantity(quantity)?;

        let product = self
            .inventory
            .get_by_id_mut(id)
            .ok_or(CoreError::ProductNotFound { id })?;

        if !product.can_fulfill(quantity) {
            return Err(CoreError::InsufficientStock {
                id,
                available: product.quantity,
                requested: quantity,
            });
        }

        product.quantity -= quantity;
        Ok(SaleReceipt {
            product_name: product.name.clone(),
            units_sold: quantity,
            remaining_quantity: product.quantity,
        })
    }

    // =========================================================================
    // Read-only operations (any authenticated role)
    // =========================================================================

    /// All products whose name equals the query exactly.
    ///
    /// ## Errors
    /// [`CoreError::NameNotFound`] when nothing matches; the shell
    /// reports it as the not-found message.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<&Product>, CoreError> {
        let hits = self.inventory.search_by_name(name);
        if hits.is_empty() {
            return Err(CoreError::NameNotFound {
                name: name.to_string(),
            });
        }
        Ok(hits)
    }

    /// Sorts the inventory in place by the given key, ascending.
    pub fn sort(&mut self, key: SortKey) {
        self.inventory.sort(key);
    }

    /// Computes the inventory status report over the current products.
    pub fn generate_report(&self) -> InventoryReport {
        InventoryReport::generate(self.inventory.products())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
