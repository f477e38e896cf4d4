//! Shared deterministic types for cloud traversal.
//!
//! These types define stable contracts between core components. They do not
//! depend on external state or I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::JumpError;
use crate::core::invariants::validate_codes;

/// State of a single cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Cumulus cloud, safe to land on. Encoded as `0`.
    Safe,
    /// Thundercloud, must never be landed on. Encoded as `1`.
    Hazard,
}

impl Position {
    /// Decode the external `0`/`1` representation.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Position::Safe),
            1 => Some(Position::Hazard),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Position::Safe => 0,
            Position::Hazard => 1,
        }
    }

    pub fn is_safe(self) -> bool {
        self == Position::Safe
    }
}

/// A validated, non-empty run of clouds that starts on a safe cloud.
///
/// The only way to build one is through [`Sequence::new`] or
/// [`Sequence::from_codes`], so every value upholds both invariants.
/// Reachability of the last cloud is *not* an invariant of this type; it is
/// discovered by the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<Position>);

impl Sequence {
    pub fn new(clouds: Vec<Position>) -> Result<Self, JumpError> {
        match clouds.first() {
            None => Err(JumpError::InvalidLength),
            Some(Position::Hazard) => Err(JumpError::InvalidStart),
            Some(Position::Safe) => Ok(Self(clouds)),
        }
    }

    /// Validate raw `0`/`1` codes into a sequence.
    pub fn from_codes(codes: &[i64]) -> Result<Self, JumpError> {
        validate_codes(codes)
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the goal cloud.
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cloud) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cloud.code())?;
        }
        Ok(())
    }
}

/// Width of a single jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Single,
    Double,
}

impl Step {
    pub fn width(self) -> usize {
        match self {
            Step::Single => 1,
            Step::Double => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_codes_round_trip_only_for_zero_and_one() {
        assert_eq!(Position::from_code(0), Some(Position::Safe));
        assert_eq!(Position::from_code(1), Some(Position::Hazard));
        assert_eq!(Position::from_code(2), None);
        assert_eq!(Position::from_code(-1), None);
        assert_eq!(Position::Hazard.code(), 1);
    }

    #[test]
    fn new_rejects_empty_and_hazardous_start() {
        assert_eq!(Sequence::new(Vec::new()), Err(JumpError::InvalidLength));
        assert_eq!(
            Sequence::new(vec![Position::Hazard, Position::Safe]),
            Err(JumpError::InvalidStart)
        );
    }

    #[test]
    fn display_uses_external_codes() {
        let sequence = Sequence::from_codes(&[0, 0, 1, 0]).expect("sequence");
        assert_eq!(sequence.to_string(), "0 0 1 0");
        assert_eq!(sequence.last_index(), 3);
    }
}
