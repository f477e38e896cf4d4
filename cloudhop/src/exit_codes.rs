//! Stable exit codes for cloudhop CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Input could not be read, decoded, or validated, or config was invalid.
pub const INVALID: i32 = 1;
/// Input was well-formed but no safe route reaches the last cloud.
pub const UNSOLVABLE: i32 = 2;
/// `cloudhop batch` had at least one entry that failed.
pub const BATCH_FAILED: i32 = 3;
