//! Minimum-jump solver for the "jumping on clouds" traversal.
//!
//! A traverser starts on the first cloud and must reach the last one, moving
//! one or two clouds forward per jump and never landing on a thundercloud.
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validation, jump counting,
//!   route planning). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config file, input decoding,
//!   batch files).
//!
//! [`solve`] coordinates the two to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
