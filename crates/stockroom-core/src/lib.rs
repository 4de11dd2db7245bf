//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the entire
//! inventory/transaction management logic as pure functions and owned
//! state with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console Shell (apps/console)                   │   │
//! │  │    Login Prompt ──► Menu Loop ──► Field Prompts ──► Output      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  store  │ │ ledger  │ │ session │  │   │
//! │  │   │ Product │ │  Money  │ │Inventory│ │TxnLog   │ │ Session │  │   │
//! │  │   │  Role   │ │ parsing │ │  sorts  │ │ append  │ │ gating  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, Role, User)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`auth`] - Fixed-directory credential check
//! - [`store`] - Ordered, bounded inventory collection
//! - [`ledger`] - Append-only transaction log
//! - [`report`] - Inventory status aggregation
//! - [`session`] - Role-gated facade owning all mutable state
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic over owned state
//! 2. **No I/O**: Terminal, file system, network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **No Globals**: State lives in a [`session::Session`] the caller owns
//!
//! ## Example Usage
//! ```rust
//! use stockroom_core::{Money, Product, Role, Session};
//!
//! let mut session = Session::new(Role::Admin);
//! session.add_product(Product::new(2, "Nut", Money::from_cents(10), 50)).unwrap();
//!
//! let report = session.generate_report();
//! assert_eq!(report.total_products, 1);
//! assert_eq!(report.total_quantity, 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod ledger;
pub mod money;
pub mod report;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Money` instead of
// `use stockroom_core::money::Money`

pub use auth::Authenticator;
pub use error::{CoreError, ValidationError};
pub use ledger::TransactionLog;
pub use money::Money;
pub use report::InventoryReport;
pub use session::{SaleReceipt, Session};
pub use store::{Inventory, SortKey};
pub use types::{Product, Role, Transaction, TransactionKind, User};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default maximum number of products the inventory holds.
///
/// ## Business Reason
/// The store is an in-memory, single-session collection; the cap keeps
/// a runaway session from growing without bound. Configurable per
/// session via [`Session::with_capacities`].
pub const DEFAULT_PRODUCT_CAPACITY: usize = 100;

/// Default maximum number of entries in the transaction log.
///
/// A full log refuses further mutating operations so the store and the
/// log never drift apart.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Maximum length of any free-text field (names, credentials).
pub const MAX_FIELD_LENGTH: usize = 100;
