//! # Inventory Store
//!
//! An ordered, bounded collection of products.
//!
//! ## Ordering Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Ordering                                 │
//! │                                                                         │
//! │  insert ───────► appended at the end (insertion order)                  │
//! │                                                                         │
//! │  remove ───────► stable removal: every later product shifts left,       │
//! │                  relative order preserved (NOT swap-remove)             │
//! │                                                                         │
//! │  sort(key) ────► replaces the current order in place; persists          │
//! │                  until the next mutation or sort                        │
//! │                                                                         │
//! │  ties ─────────► equal keys keep their prior relative order             │
//! │                  (Vec::sort_by is stable)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Product ids are unique while present (checked on insert)
//! - `len() <= capacity()` always
//! - The backing Vec grows dynamically; "bounded" is an explicit
//!   capacity check, not a fixed-size buffer

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Product;
use crate::DEFAULT_PRODUCT_CAPACITY;

// =============================================================================
// Sort Key
// =============================================================================

/// The three sort orders the inventory supports, all ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric id, ascending.
    Id,
    /// Name, lexicographic byte order, ascending.
    Name,
    /// Unit price, ascending.
    Price,
}

impl SortKey {
    /// Label used in console feedback ("sorted by ID successfully").
    pub const fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Name",
            SortKey::Price => "Price",
        }
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// The ordered, bounded product collection.
///
/// Owned exclusively by one [`Session`](crate::Session); all access
/// goes through it.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty inventory with the default capacity.
    pub fn new() -> Self {
        Inventory::with_capacity(DEFAULT_PRODUCT_CAPACITY)
    }

    /// Creates an empty inventory with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Inventory {
            products: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of products this inventory accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of products currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the inventory holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Checks whether the inventory is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.products.len() >= self.capacity
    }

    /// The full ordered sequence of products as currently stored.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Appends a product at the end of the collection.
    ///
    /// ## Errors
    /// - [`CoreError::InventoryFull`] when at capacity
    /// - [`CoreError::DuplicateId`] when the id is already live
    pub fn insert(&mut self, product: Product) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::InventoryFull {
                capacity: self.capacity,
            });
        }

        if self.contains_id(product.id) {
            return Err(CoreError::DuplicateId { id: product.id });
        }

        self.products.push(product);
        Ok(())
    }

    /// Checks whether a product with this id is currently stored.
    pub fn contains_id(&self, id: u32) -> bool {
        self.products.iter().any(|p| p.id == id)
    }

    /// First product with a matching id.
    pub fn get_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Mutable access to the first product with a matching id.
    pub fn get_by_id_mut(&mut self, id: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// Removes the first product with a matching id, preserving the
    /// relative order of everything else.
    ///
    /// Returns the removed product, or `None` on a miss.
    pub fn remove_by_id(&mut self, id: u32) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        // Vec::remove shifts the tail left: stable, not swap-remove
        Some(self.products.remove(index))
    }

    /// All products whose name equals the query exactly
    /// (case-sensitive). Names are not unique, so multiple hits are
    /// normal.
    pub fn search_by_name(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.name == name).collect()
    }

    /// Sorts the collection in place by the given key, ascending.
    ///
    /// The sort is stable: products with equal keys keep their prior
    /// relative order, which makes re-sorting by the same key a no-op.
    pub fn sort(&mut self, key: SortKey) {
        match key {
            SortKey::Id => self.products.sort_by_key(|p| p.id),
            SortKey::Name => self.products.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Price => self.products.sort_by_key(|p| p.price),
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
