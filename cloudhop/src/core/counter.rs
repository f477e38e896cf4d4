//! Greedy minimum-jump counter.
//!
//! Leaping two clouds whenever the landing is safe is optimal: any cloud
//! reached by two single steps is also reached by one double step over the
//! same ground, so taking the leap never costs a jump and never strands the
//! traverser.

use crate::core::error::JumpError;
use crate::core::types::{Position, Sequence, Step};

/// Minimum number of jumps from the first cloud to the last.
///
/// Runs in O(n) time and O(1) extra space. Fails with `Unsolvable` when a
/// forced single step would land on a thundercloud.
pub fn min_jumps(sequence: &Sequence) -> Result<usize, JumpError> {
    let clouds = sequence.as_slice();
    let last = sequence.last_index();
    let mut index = 0;
    let mut jumps = 0;
    while index < last {
        index += next_step(clouds, index)?.width();
        jumps += 1;
    }
    Ok(jumps)
}

/// Validate raw `0`/`1` codes and count jumps in one call.
pub fn count_jumps(codes: &[i64]) -> Result<usize, JumpError> {
    let sequence = Sequence::from_codes(codes)?;
    min_jumps(&sequence)
}

/// Pick the jump to take from `index`, which must be before the last cloud.
pub(crate) fn next_step(clouds: &[Position], index: usize) -> Result<Step, JumpError> {
    if clouds.get(index + 2).is_some_and(|cloud| cloud.is_safe()) {
        return Ok(Step::Double);
    }
    let landing = index + 1;
    match clouds.get(landing) {
        Some(Position::Safe) => Ok(Step::Single),
        _ => Err(JumpError::Unsolvable { index: landing }),
    }
}
