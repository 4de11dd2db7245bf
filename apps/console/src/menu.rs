//! # Menu
//!
//! Renders the numbered action menu and parses the user's choice.
//!
//! ## Menu Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              === Inventory Management System ===                        │
//! │                                                                         │
//! │  1-12  common to both roles (CRUD, sorts, search, report,               │
//! │        sales, history, logout)                                          │
//! │  13-14 role-specific placeholders: labeled per role, not                │
//! │        implemented (explicit no-ops / extension points)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{Role, SortKey};

/// One selectable menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    DeleteProduct,
    UpdateProduct,
    DisplayInventory,
    SortById,
    SortByName,
    SortByPrice,
    SearchProduct,
    GenerateReport,
    HandleSales,
    TransactionHistory,
    Logout,
    /// Role-specific placeholder ("Admin Option 1" / "Employee Option 1").
    RoleOptionOne,
    /// Role-specific placeholder ("Admin Option 2" / "Employee Option 2").
    RoleOptionTwo,
}

impl MenuChoice {
    /// Parses the typed choice. `None` for anything that is not a
    /// number between 1 and 14.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::AddProduct),
            2 => Some(MenuChoice::DeleteProduct),
            3 => Some(MenuChoice::UpdateProduct),
            4 => Some(MenuChoice::DisplayInventory),
            5 => Some(MenuChoice::SortById),
            6 => Some(MenuChoice::SortByName),
            7 => Some(MenuChoice::SortByPrice),
            8 => Some(MenuChoice::SearchProduct),
            9 => Some(MenuChoice::GenerateReport),
            10 => Some(MenuChoice::HandleSales),
            11 => Some(MenuChoice::TransactionHistory),
            12 => Some(MenuChoice::Logout),
            13 => Some(MenuChoice::RoleOptionOne),
            14 => Some(MenuChoice::RoleOptionTwo),
            _ => None,
        }
    }

    /// The sort key for the three sort actions, `None` otherwise.
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            MenuChoice::SortById => Some(SortKey::Id),
            MenuChoice::SortByName => Some(SortKey::Name),
            MenuChoice::SortByPrice => Some(SortKey::Price),
            _ => None,
        }
    }
}

/// Renders the full menu for the given role.
pub fn render(role: Role) -> String {
    let mut menu = String::from(
        "\n=== Inventory Management System ===\n\
         1. Add Product\n\
         2. Delete Product\n\
         3. Update Product\n\
         4. Display Inventory\n\
         5. Sort Inventory by ID\n\
         6. Sort Inventory by Name\n\
         7. Sort Inventory by Price\n\
         8. Search Product\n\
         9. Generate Report\n\
         10. Handle Sales\n\
         11. Display Transaction History\n\
         12. Logout\n",
    );

    match role {
        Role::Admin => {
            menu.push_str("13. Admin Option 1\n14. Admin Option 2\n");
        }
        Role::Employee => {
            menu.push_str("13. Employee Option 1\n14. Employee Option 2\n");
        }
        Role::Unknown => {}
    }

    menu
}

// =============================================================================
// Unit Tests
// =============================================================================
