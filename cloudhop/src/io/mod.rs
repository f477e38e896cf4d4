//! I/O helpers for cloudhop commands.

pub mod batch;
pub mod config;
pub mod input;
