//! Input validation for raw cloud codes.

use crate::core::counter::min_jumps;
use crate::core::error::JumpError;
use crate::core::types::{Position, Sequence};

/// Validate raw codes into a [`Sequence`].
///
/// Checks run in a fixed order so the reported error is deterministic:
/// - Non-empty input (`InvalidLength`)
/// - Every code is `0` or `1` (`InvalidElement`, first offender wins)
/// - First cloud is safe (`InvalidStart`)
///
/// Reachability is left to the counter; this never returns `Unsolvable`.
pub fn validate_codes(codes: &[i64]) -> Result<Sequence, JumpError> {
    if codes.is_empty() {
        return Err(JumpError::InvalidLength);
    }
    let clouds = codes
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Position::from_code(value).ok_or(JumpError::InvalidElement { index, value })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Sequence::new(clouds)
}

/// Confirm the last cloud is reachable from the first.
pub fn check_reachable(sequence: &Sequence) -> Result<(), JumpError> {
    min_jumps(sequence).map(|_| ())
}
