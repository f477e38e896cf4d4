//! Deterministic, pure logic for cloud traversal.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! sequences and return deterministic outputs suitable for tests.

pub mod counter;
pub mod error;
pub mod invariants;
pub mod route;
pub mod types;
