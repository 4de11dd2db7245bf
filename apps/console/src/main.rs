//! # Stockroom Console Entry Point
//!
//! The binary is deliberately tiny: the whole shell lives in the
//! library crate so the session loop can be driven by tests with
//! scripted input.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Prompt for credentials; exit 1 on a failed login
//! 3. Run the menu loop until logout; exit 0

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    stockroom_console::run()
}
