//! # Sales Command
//!
//! Handler for menu action 10: Handle Sales. Available to any
//! authenticated role; the quantity is only prompted once the product
//! id resolves, mirroring the prompt order users expect.
//!
//! Sales mutate stock but never appear in the transaction history
//! (documented asymmetry, see DESIGN.md).

use std::io::{self, BufRead, Write};

use stockroom_core::{CoreError, Session};
use tracing::{info, warn};

use crate::prompt::{prompt_i64, prompt_u32};

/// Menu action 10: Handle Sales (any role).
pub fn handle_sales<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(id) = prompt_u32(input, out, "Enter product ID for sale: ")? else {
        return Ok(());
    };
    if !session.products().iter().any(|p| p.id == id) {
        writeln!(out, "{}", CoreError::ProductNotFound { id })?;
        return Ok(());
    }

    let Some(quantity) = prompt_i64(input, out, "Enter quantity for sale: ")? else {
        return Ok(());
    };

    match session.record_sale(id, quantity) {
        Ok(receipt) => {
            info!(
                id,
                units = receipt.units_sold,
                remaining = receipt.remaining_quantity,
                "sale recorded"
            );
            writeln!(
                out,
                "Sale successful. {} units of {} sold.",
                receipt.units_sold, receipt.product_name
            )
        }
        Err(err) => {
            warn!(%err, id, "sale refused");
            writeln!(out, "{err}")
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_core::{Money, Product, Role};

    fn session_with_bolt() -> Session {
        let mut session = Session::new(Role::Admin);
        session
            .add_product(Product::new(1, "Bolt", Money::from_cents(50), 100))
            .unwrap();
        session
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        handle_sales(session, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_sale_success_message_and_stock() {
        let mut session = session_with_bolt();
        let output = run(&mut session, "1\n30\n");

        assert!(output.contains("Sale successful. 30 units of Bolt sold."));
        assert_eq!(session.products()[0].quantity, 70);
    }

    #[test]
    fn test_sale_insufficient_stock_message() {
        let mut session = session_with_bolt();
        let output = run(&mut session, "1\n150\n");

        assert!(output.contains("Insufficient quantity in stock."));
        assert_eq!(session.products()[0].quantity, 100);
    }

    #[test]
    fn test_sale_unknown_id_skips_quantity_prompt() {
        let mut session = session_with_bolt();
        let output = run(&mut session, "99\n");

        assert!(output.contains("Product with ID 99 not found."));
        assert!(!output.contains("Enter quantity for sale:"));
    }

    #[test]
    fn test_sale_leaves_history_untouched() {
        let mut session = session_with_bolt();
        run(&mut session, "1\n10\n");
        // Only the initial Add entry
        assert_eq!(session.transactions().len(), 1);
    }
}
