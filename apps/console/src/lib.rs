//! # Stockroom Console Shell
//!
//! The interactive text-menu front end for stockroom-core.
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs          ◄─── You are here (login + session loop)
//! ├── menu.rs         ◄─── Menu rendering and choice parsing
//! ├── prompt.rs       ◄─── Line-oriented stdin field prompts
//! └── commands/
//!     ├── mod.rs      ◄─── Dispatch
//!     ├── product.rs  ◄─── Add/Delete/Update/Display/Search/Sorts
//!     ├── sale.rs     ◄─── Handle Sales
//!     └── report.rs   ◄─── Report, Transaction History
//! ```
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Console Lifecycle                                │
//! │                                                                         │
//! │  1. init_tracing()          RUST_LOG-filtered logs on stderr            │
//! │  2. login prompt            exact credential match → Role               │
//! │       │                                                                 │
//! │       ├── Role::Unknown ──► "Invalid username or password."             │
//! │       │                     process exits with code 1                   │
//! │       ▼                                                                 │
//! │  3. Session::new(role)      one inventory + one ledger per login        │
//! │  4. menu loop               render → read choice → dispatch → repeat    │
//! │       │                                                                 │
//! │       └── Logout (or EOF) ─► "Logging out..." → exit code 0             │
//! │                                                                         │
//! │  Every action error is printed and recovered; the loop continues.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole loop is generic over `BufRead`/`Write`, so the tests at
//! the bottom of this file run complete scripted sessions against
//! in-memory buffers.

pub mod commands;
pub mod menu;
pub mod prompt;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use stockroom_core::validation::validate_credential;
use stockroom_core::{Authenticator, Role, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::menu::MenuChoice;
use crate::prompt::prompt_line;

/// How a shell run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Normal logout (menu action 12, or EOF on stdin). Exit code 0.
    LoggedOut,
    /// Credentials did not match any configured user. Exit code 1.
    LoginFailed,
}

/// Runs the console shell over real stdin/stdout.
pub fn run() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    match run_with(&mut input, &mut out) {
        Ok(SessionOutcome::LoggedOut) => ExitCode::SUCCESS,
        Ok(SessionOutcome::LoginFailed) => ExitCode::FAILURE,
        Err(err) => {
            warn!(%err, "terminal i/o failed");
            ExitCode::FAILURE
        }
    }
}

/// Runs one full shell lifecycle over the given streams.
pub fn run_with<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<SessionOutcome> {
    let authenticator = Authenticator::with_default_users();
    let role = login(&authenticator, input, out)?;

    if !role.is_authenticated() {
        writeln!(out, "Invalid username or password. Exiting...")?;
        return Ok(SessionOutcome::LoginFailed);
    }

    info!(%role, "session opened");
    let mut session = Session::new(role);

    loop {
        write!(out, "{}", menu::render(session.role()))?;

        let Some(raw) = prompt_line(input, out, "Enter your choice: ")? else {
            // EOF mid-session: treat as logout
            break;
        };

        match MenuChoice::parse(&raw) {
            Some(MenuChoice::Logout) => {
                writeln!(out, "Logging out...")?;
                break;
            }
            Some(choice) => commands::dispatch(choice, &mut session, input, out)?,
            None => writeln!(out, "Invalid choice! Please try again.")?,
        }
    }

    info!("session closed");
    Ok(SessionOutcome::LoggedOut)
}

/// Prompts for credentials once and resolves them to a role.
///
/// Malformed credentials (empty, over-length) can never match a
/// configured user, so they resolve to [`Role::Unknown`] without
/// reaching the authenticator.
fn login<R: BufRead, W: Write>(
    authenticator: &Authenticator,
    input: &mut R,
    out: &mut W,
) -> io::Result<Role> {
    let Some(username) = prompt_line(input, out, "Enter username: ")? else {
        return Ok(Role::Unknown);
    };
    let Some(password) = prompt_line(input, out, "Enter password: ")? else {
        return Ok(Role::Unknown);
    };

    if validate_credential("username", &username).is_err()
        || validate_credential("password", &password).is_err()
    {
        return Ok(Role::Unknown);
    }

    let role = authenticator.authenticate(&username, &password);
    if role.is_authenticated() {
        writeln!(out, "Login successful!")?;
    }
    Ok(role)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO level
///
/// Logs go to stderr so they never interleave with menu output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Scripted Session Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drives a complete shell lifecycle with scripted input.
    fn run_script(script: &str) -> (SessionOutcome, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = run_with(&mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_failed_login_exits_with_failure() {
        let (outcome, output) = run_script("admin\nwrong\n");

        assert_eq!(outcome, SessionOutcome::LoginFailed);
        assert!(output.contains("Invalid username or password. Exiting..."));
        assert!(!output.contains("=== Inventory Management System ==="));
    }

    #[test]
    fn test_over_length_credentials_fail_login() {
        let script = format!("{}\nadmin123\n", "a".repeat(200));
        let (outcome, _) = run_script(&script);
        assert_eq!(outcome, SessionOutcome::LoginFailed);
    }

    #[test]
    fn test_admin_add_display_sale_history_logout() {
        let script = "admin\nadmin123\n\
                      1\n2\nNut\n0.10\n50\n\
                      4\n\
                      10\n2\n20\n\
                      11\n\
                      12\n";
        let (outcome, output) = run_script(script);

        assert_eq!(outcome, SessionOutcome::LoggedOut);
        assert!(output.contains("Login successful!"));
        assert!(output.contains("13. Admin Option 1"));
        assert!(output.contains("Product added successfully."));
        assert!(output.contains("ID: 2, Name: Nut, Price: $0.10, Quantity: 50"));
        assert!(output.contains("Sale successful. 20 units of Nut sold."));
        // Sale is absent from history: only the Add entry
        assert!(output.contains("Type: Add"));
        assert!(!output.contains("Type: Sale"));
        assert!(output.contains("Logging out..."));
    }

    #[test]
    fn test_employee_sees_own_menu_and_is_denied_add() {
        let script = "employee\nemp456\n1\n12\n";
        let (outcome, output) = run_script(script);

        assert_eq!(outcome, SessionOutcome::LoggedOut);
        assert!(output.contains("13. Employee Option 1"));
        assert!(output.contains("Access denied! You do not have permission to add products."));
    }

    #[test]
    fn test_invalid_choice_keeps_session_alive() {
        let script = "admin\nadmin123\n99\n12\n";
        let (outcome, output) = run_script(script);

        assert_eq!(outcome, SessionOutcome::LoggedOut);
        assert!(output.contains("Invalid choice! Please try again."));
        assert!(output.contains("Logging out..."));
    }

    #[test]
    fn test_placeholder_options_are_noops() {
        let script = "admin\nadmin123\n13\n14\n12\n";
        let (outcome, output) = run_script(script);

        assert_eq!(outcome, SessionOutcome::LoggedOut);
        assert_eq!(
            output
                .matches("This option is reserved for a future release.")
                .count(),
            2
        );
    }

    #[test]
    fn test_eof_after_login_is_treated_as_logout() {
        let (outcome, output) = run_script("admin\nadmin123\n");
        assert_eq!(outcome, SessionOutcome::LoggedOut);
        assert!(output.contains("=== Inventory Management System ==="));
    }

    #[test]
    fn test_report_through_full_session() {
        let script = "admin\nadmin123\n\
                      1\n1\nA\n2.00\n3\n\
                      1\n2\nB\n1.00\n10\n\
                      9\n\
                      12\n";
        let (_, output) = run_script(script);

        assert!(output.contains("Total number of products: 2"));
        assert!(output.contains("Total inventory value: $16.00"));
        assert!(output.contains("Highest selling product: ID: 2, Name: B"));
        assert!(output.contains("Total quantity of products: 13"));
    }
}
