//! # Product Commands
//!
//! Handlers for the product-facing menu actions: add, delete, update,
//! display, search, and the three sorts.
//!
//! ## Prompt-Then-Apply Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Add Product Flow                                    │
//! │                                                                         │
//! │  role != Admin? ──► "Access denied!" ──► back to menu                   │
//! │  store full?    ──► "Inventory is full" ──► back to menu                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Enter product ID:        (re-prompt until numeric)                     │
//! │  Enter product name:                                                    │
//! │  Enter product price:     (decimal text → cents)                        │
//! │  Enter product quantity:                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session.add_product(...) ──► "Product added successfully."             │
//! │                          └──► error Display text on refusal             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The early role and capacity checks only avoid prompting for fields
//! the core is about to refuse; the `Session` re-checks and stays
//! authoritative.

use std::io::{self, BufRead, Write};

use stockroom_core::{CoreError, Product, Session, SortKey};
use tracing::warn;

use crate::prompt::{prompt_i64, prompt_line, prompt_money, prompt_u32};

/// Menu action 1: Add Product (Admin only).
pub fn add_product<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if !session.role().is_admin() {
        writeln!(out, "{}", CoreError::PermissionDenied { action: "add" })?;
        return Ok(());
    }
    if session.is_inventory_full() {
        let err = CoreError::InventoryFull {
            capacity: session.inventory_capacity(),
        };
        writeln!(out, "{err}")?;
        return Ok(());
    }

    let Some(id) = prompt_u32(input, out, "Enter product ID: ")? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, out, "Enter product name: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_money(input, out, "Enter product price: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_i64(input, out, "Enter product quantity: ")? else {
        return Ok(());
    };

    match session.add_product(Product::new(id, name, price, quantity)) {
        Ok(()) => writeln!(out, "Product added successfully."),
        Err(err) => {
            warn!(%err, id, "add product refused");
            writeln!(out, "{err}")
        }
    }
}

/// Menu action 2: Delete Product (Admin only).
pub fn delete_product<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if !session.role().is_admin() {
        writeln!(out, "{}", CoreError::PermissionDenied { action: "delete" })?;
        return Ok(());
    }

    let Some(id) = prompt_u32(input, out, "Enter product ID to delete: ")? else {
        return Ok(());
    };

    match session.delete_product(id) {
        Ok(_removed) => writeln!(out, "Product deleted successfully."),
        Err(err) => {
            warn!(%err, id, "delete product refused");
            writeln!(out, "{err}")
        }
    }
}

/// Menu action 3: Update Product (Admin only).
///
/// The id is resolved before the new fields are prompted, so a miss
/// reports "not found" without asking for data that would be thrown
/// away.
pub fn update_product<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if !session.role().is_admin() {
        writeln!(out, "{}", CoreError::PermissionDenied { action: "update" })?;
        return Ok(());
    }

    let Some(id) = prompt_u32(input, out, "Enter product ID to update: ")? else {
        return Ok(());
    };
    if !session.products().iter().any(|p| p.id == id) {
        writeln!(out, "{}", CoreError::ProductNotFound { id })?;
        return Ok(());
    }

    let Some(name) = prompt_line(input, out, "Enter new name: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_money(input, out, "Enter new price: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_i64(input, out, "Enter new quantity: ")? else {
        return Ok(());
    };

    match session.update_product(id, &name, price, quantity) {
        Ok(_updated) => writeln!(out, "Product updated successfully."),
        Err(err) => {
            warn!(%err, id, "update product refused");
            writeln!(out, "{err}")
        }
    }
}

/// Menu action 4: Display Inventory.
pub fn display_inventory<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Inventory ===")?;
    for product in session.products() {
        writeln!(out, "{product}")?;
    }
    Ok(())
}

/// Menu actions 5-7: the three ascending sorts.
pub fn sort_inventory<W: Write>(
    session: &mut Session,
    key: SortKey,
    out: &mut W,
) -> io::Result<()> {
    session.sort(key);
    writeln!(out, "Inventory sorted by {} successfully.", key.label())
}

/// Menu action 8: Search Product by exact name.
pub fn search_product<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(name) = prompt_line(input, out, "Enter product name to search: ")? else {
        return Ok(());
    };

    match session.search_by_name(name.trim()) {
        Ok(hits) => {
            for product in hits {
                writeln!(out, "{product}")?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "{err}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_core::{Money, Role};

    fn admin_with_bolt() -> Session {
        let mut session = Session::new(Role::Admin);
        session
            .add_product(Product::new(1, "Bolt", Money::from_cents(50), 100))
            .unwrap();
        session
    }

    fn run<F>(session: &mut Session, script: &str, handler: F) -> String
    where
        F: FnOnce(&mut Session, &mut Cursor<Vec<u8>>, &mut Vec<u8>) -> io::Result<()>,
    {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        handler(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_product_happy_path() {
        let mut session = Session::new(Role::Admin);
        let output = run(&mut session, "2\nNut\n0.10\n50\n", add_product);

        assert!(output.contains("Product added successfully."));
        assert_eq!(
            session.products(),
            &[Product::new(2, "Nut", Money::from_cents(10), 50)]
        );
    }

    #[test]
    fn test_add_product_denied_before_prompting_fields() {
        let mut session = Session::new(Role::Employee);
        let output = run(&mut session, "", add_product);

        assert!(output.contains("Access denied! You do not have permission to add products."));
        // No field prompt was ever printed
        assert!(!output.contains("Enter product ID:"));
    }

    #[test]
    fn test_add_product_full_store_skips_field_prompts() {
        let mut session = Session::with_capacities(Role::Admin, 1, 100);
        session
            .add_product(Product::new(1, "Bolt", Money::from_cents(50), 100))
            .unwrap();

        let output = run(&mut session, "", add_product);
        assert!(output.contains("Inventory is full (1 products). Cannot add more products."));
        assert!(!output.contains("Enter product ID:"));
    }

    #[test]
    fn test_delete_product_not_found_message() {
        let mut session = admin_with_bolt();
        let output = run(&mut session, "99\n", delete_product);

        assert!(output.contains("Product with ID 99 not found."));
        assert_eq!(session.products().len(), 1);
    }

    #[test]
    fn test_update_miss_skips_field_prompts() {
        let mut session = admin_with_bolt();
        let output = run(&mut session, "99\n", update_product);

        assert!(output.contains("Product with ID 99 not found."));
        assert!(!output.contains("Enter new name:"));
    }

    #[test]
    fn test_update_product_happy_path() {
        let mut session = admin_with_bolt();
        let output = run(&mut session, "1\nHex Bolt\n0.75\n80\n", update_product);

        assert!(output.contains("Product updated successfully."));
        assert_eq!(
            session.products()[0],
            Product::new(1, "Hex Bolt", Money::from_cents(75), 80)
        );
    }

    #[test]
    fn test_display_inventory_lists_products() {
        let mut session = admin_with_bolt();
        let output = run(&mut session, "", |s, _, out| display_inventory(s, out));

        assert!(output.contains("=== Inventory ==="));
        assert!(output.contains("ID: 1, Name: Bolt, Price: $0.50, Quantity: 100"));
    }

    #[test]
    fn test_sort_feedback_message() {
        let mut session = admin_with_bolt();
        let output = run(&mut session, "", |s, _, out| {
            sort_inventory(s, SortKey::Name, out)
        });
        assert!(output.contains("Inventory sorted by Name successfully."));
    }

    #[test]
    fn test_search_product_hit_and_miss() {
        let mut session = admin_with_bolt();

        let hit = run(&mut session, "Bolt\n", |s, i, o| search_product(s, i, o));
        assert!(hit.contains("ID: 1, Name: Bolt"));

        let miss = run(&mut session, "Washer\n", |s, i, o| search_product(s, i, o));
        assert!(miss.contains("Product with name 'Washer' not found."));
    }
}
