//! # Report & History Commands
//!
//! Handlers for menu action 9 (Generate Report) and 11 (Display
//! Transaction History). Both are read-only.

use std::io::{self, Write};

use stockroom_core::Session;

/// Menu action 9: Generate Report.
///
/// An empty inventory prints zero totals and an explicit empty marker
/// for the highest-stock line.
pub fn generate_report<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Inventory Report ===")?;
    writeln!(out, "{}", session.generate_report())
}

/// Menu action 11: Display Transaction History.
///
/// Entries print in append order; sales never appear here (documented
/// asymmetry, see DESIGN.md).
pub fn transaction_history<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Transaction History ===")?;
    for entry in session.transactions() {
        writeln!(
            out,
            "Timestamp: {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out, "Type: {}", entry.kind)?;
        writeln!(out, "Product ID: {}", entry.product.id)?;
        writeln!(out, "Product Name: {}", entry.product.name)?;
        writeln!(out, "Quantity: {}", entry.quantity)?;
        writeln!(out, "---------------------------------")?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
