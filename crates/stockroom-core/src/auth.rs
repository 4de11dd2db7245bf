//! # Authenticator
//!
//! Validates username/password pairs against a fixed user directory
//! and yields a [`Role`].
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console prompts username + password                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Authenticator::authenticate(username, password)                        │
//! │       │                                                                 │
//! │       ├── exact match on BOTH fields ──► that user's Role               │
//! │       │                                                                 │
//! │       └── anything else ──────────────► Role::Unknown                   │
//! │                                          (shell exits with code 1)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no error value for bad credentials: failure IS the
//! `Unknown` role. No side effects, no lockout, no hashing; this is a
//! single-user offline tool.

use crate::types::{Role, User};

/// The fixed user directory.
///
/// Users are defined once at construction and never change during a
/// run.
#[derive(Debug, Clone)]
pub struct Authenticator {
    users: Vec<User>,
}

impl Authenticator {
    /// Creates an authenticator over an explicit user list.
    pub fn new(users: Vec<User>) -> Self {
        Authenticator { users }
    }

    /// The stock directory: one Admin and one Employee.
    pub fn with_default_users() -> Self {
        Authenticator::new(vec![
            User::new("admin", "admin123", Role::Admin),
            User::new("employee", "emp456", Role::Employee),
        ])
    }

    /// Looks up an exact match of both fields.
    ///
    /// Returns the matching user's role, or [`Role::Unknown`] if no
    /// configured user matches exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Role {
        self.users
            .iter()
            .find(|user| user.username == username && user.password == password)
            .map(|user| user.role)
            .unwrap_or(Role::Unknown)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Authenticator::with_default_users()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
