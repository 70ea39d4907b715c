//! Step numbering for the lesson.
//!
//! A `StepIndex` is 1-based and always within `1..=STEP_COUNT`. Holding one is
//! the proof that it is in range; every constructor validates.

use std::fmt;

use thiserror::Error;

/// Number of steps in the lesson.
pub const STEP_COUNT: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {requested} is out of range (expected 1..={max})")]
    OutOfRange { requested: i64, max: u8 },
}

/// A validated, 1-based step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepIndex(u8);

impl StepIndex {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(STEP_COUNT);

    /// Validate a requested step number.
    ///
    /// Takes a signed value so that callers computing `current - 1` or
    /// parsing user input never need to pre-clamp.
    pub fn new(requested: i64) -> Result<Self, StepError> {
        match u8::try_from(requested) {
            Ok(n) if (1..=STEP_COUNT).contains(&n) => Ok(Self(n)),
            _ => Err(StepError::OutOfRange {
                requested,
                max: STEP_COUNT,
            }),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing menu entries and panels.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 as usize - 1
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == STEP_COUNT
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(i64::from(self.0) + 1).ok()
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(i64::from(self.0) - 1).ok()
    }

    /// All steps in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=STEP_COUNT).map(Self)
    }
}

impl Default for StepIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for StepIndex {
    type Error = StepError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
