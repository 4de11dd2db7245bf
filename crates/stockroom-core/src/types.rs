//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  Transaction    │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (UUID)      │   │  username       │       │
//! │  │  name           │   │  kind           │   │  password       │       │
//! │  │  price (Money)  │   │  product (snap) │   │  role           │       │
//! │  │  quantity       │   │  quantity       │   └─────────────────┘       │
//! │  └─────────────────┘   │  timestamp      │                             │
//! │                        └─────────────────┘   ┌─────────────────┐       │
//! │  ┌─────────────────┐                         │      Role       │       │
//! │  │ TransactionKind │                         │  ─────────────  │       │
//! │  │  ─────────────  │                         │  Admin          │       │
//! │  │  Add            │                         │  Employee       │       │
//! │  │  Delete         │                         │  Unknown        │       │
//! │  │  Update         │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A [`Transaction`] embeds a `Product` **by value**: the copy is frozen
//! at the moment the event is recorded and never changes when the live
//! product is later updated, sold down, or deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Role
// =============================================================================

/// Access level gating which operations a session may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: product CRUD plus everything an Employee can do.
    Admin,

    /// Read/sell access: listing, search, sorts, report, sales, history.
    Employee,

    /// Sentinel for "not authenticated". Never configured for a real
    /// user; the shell must treat it as a failed login and terminate.
    Unknown,
}

impl Role {
    /// Checks whether this role may perform Admin-only mutations.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Checks whether this role represents a successful login.
    #[inline]
    pub const fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Unknown)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "Admin",
            Role::Employee => "Employee",
            Role::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

// =============================================================================
// User
// =============================================================================

/// A configured user credential.
///
/// Users are fixed at process start; they are never created or
/// destroyed during a run. Passwords are compared by plain equality,
/// which is the whole security model of a single-user offline tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        User {
            username: username.into(),
            password: password.into(),
            role,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the inventory.
///
/// ## Identity
/// `id` is unique among active products (enforced on add). The other
/// fields are freely mutable via Update and Sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier among active products.
    pub id: u32,

    /// Display name. Not required to be unique.
    pub name: String,

    /// Unit price in cents. Non-negative at the input boundary.
    pub price: Money,

    /// Units currently in stock. Non-negative.
    pub quantity: i64,
}

impl Product {
    /// Creates a new product.
    pub fn new(id: u32, name: impl Into<String>, price: Money, quantity: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Checks whether a sale of `quantity` units can be fulfilled.
    #[inline]
    pub const fn can_fulfill(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }

    /// The value this product contributes to the inventory total
    /// (`price * quantity`).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price * self.quantity
    }
}

/// One-line rendering used by inventory and search listings.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}, Quantity: {}",
            self.id, self.name, self.price, self.quantity
        )
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// The kind of mutating event a transaction records.
///
/// Sales are deliberately absent: only Add/Delete/Update are logged,
/// a documented contract (see DESIGN.md). Extending this enum is the
/// first step of any future change to that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Add,
    Delete,
    Update,
}

impl TransactionKind {
    /// The label shown in transaction history output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Add => "Add",
            TransactionKind::Delete => "Delete",
            TransactionKind::Update => "Update",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of one mutating event. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Record identifier (UUID v4).
    pub id: Uuid,

    /// What happened.
    pub kind: TransactionKind,

    /// Snapshot of the product at event time, not a live reference.
    pub product: Product,

    /// The quantity value relevant to the event:
    /// - Add: the quantity added
    /// - Delete: the quantity removed with the product
    /// - Update: the post-update quantity
    pub quantity: i64,

    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Records an event happening now, snapshotting the given product.
    pub fn record(kind: TransactionKind, product: Product, quantity: i64) -> Self {
        Transaction {
            id: Uuid::new_v4(),
            kind,
            product,
            quantity,
            timestamp: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt() -> Product {
        Product::new(1, "Bolt", Money::from_cents(50), 100)
    }

    #[test]
    fn test_role_checks() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Employee.is_admin());
        assert!(!Role::Unknown.is_admin());

        assert!(Role::Admin.is_authenticated());
        assert!(Role::Employee.is_authenticated());
        assert!(!Role::Unknown.is_authenticated());
    }

    #[test]
    fn test_product_can_fulfill() {
        let product = bolt();
        assert!(product.can_fulfill(100));
        assert!(product.can_fulfill(1));
        assert!(!product.can_fulfill(101));
    }

    #[test]
    fn test_product_stock_value() {
        assert_eq!(bolt().stock_value(), Money::from_cents(5000));
    }

    #[test]
    fn test_product_display_line() {
        assert_eq!(
            bolt().to_string(),
            "ID: 1, Name: Bolt, Price: $0.50, Quantity: 100"
        );
    }

    #[test]
    fn test_transaction_snapshot_is_frozen() {
        let mut product = bolt();
        let txn = Transaction::record(TransactionKind::Add, product.clone(), product.quantity);

        // Mutating the live product must not affect the snapshot
        product.quantity = 0;
        product.name = "Renamed".to_string();

        assert_eq!(txn.product.quantity, 100);
        assert_eq!(txn.product.name, "Bolt");
        assert_eq!(txn.quantity, 100);
    }

    #[test]
    fn test_transaction_kind_labels() {
        assert_eq!(TransactionKind::Add.as_str(), "Add");
        assert_eq!(TransactionKind::Delete.as_str(), "Delete");
        assert_eq!(TransactionKind::Update.as_str(), "Update");
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(bolt()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Bolt");
        assert_eq!(json["price"], 50);
        assert_eq!(json["quantity"], 100);
    }
}
