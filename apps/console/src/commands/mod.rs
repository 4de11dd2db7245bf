//! # Command Handlers
//!
//! One handler per menu action: prompt the discrete fields, call the
//! matching `Session` operation, print the outcome.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── product.rs  ◄─── Add/Delete/Update/Display/Search/Sorts
//! ├── sale.rs     ◄─── Handle Sales
//! └── report.rs   ◄─── Inventory Report, Transaction History
//! ```
//!
//! Every handler recovers its own errors: a failed action prints the
//! error's Display text and returns to the menu. Only I/O errors on
//! the streams themselves propagate.

pub mod product;
pub mod report;
pub mod sale;

use std::io::{self, BufRead, Write};

use stockroom_core::{Session, SortKey};
use tracing::debug;

use crate::menu::MenuChoice;

/// Routes one parsed menu choice to its handler.
///
/// `Logout` never reaches this function; the session loop handles it.
pub fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    debug!(?choice, role = %session.role(), "dispatching menu action");

    match choice {
        MenuChoice::AddProduct => product::add_product(session, input, out),
        MenuChoice::DeleteProduct => product::delete_product(session, input, out),
        MenuChoice::UpdateProduct => product::update_product(session, input, out),
        MenuChoice::DisplayInventory => product::display_inventory(session, out),
        MenuChoice::SortById => product::sort_inventory(session, SortKey::Id, out),
        MenuChoice::SortByName => product::sort_inventory(session, SortKey::Name, out),
        MenuChoice::SortByPrice => product::sort_inventory(session, SortKey::Price, out),
        MenuChoice::SearchProduct => product::search_product(session, input, out),
        MenuChoice::GenerateReport => report::generate_report(session, out),
        MenuChoice::HandleSales => sale::handle_sales(session, input, out),
        MenuChoice::TransactionHistory => report::transaction_history(session, out),
        MenuChoice::RoleOptionOne | MenuChoice::RoleOptionTwo => {
            // Placeholder entries: labeled per role, intentionally inert
            writeln!(out, "This option is reserved for a future release.")
        }
        MenuChoice::Logout => Ok(()),
    }
}
