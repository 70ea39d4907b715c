//! Checklist scoring.
//!
//! Scores are derived on demand from the checked state of a group; nothing is
//! stored between calls.

use std::fmt;

/// Checked fraction of one checklist group.
///
/// Invariant: `total > 0` and `checked <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    checked: usize,
    total: usize,
}

impl Score {
    /// `None` when the group is empty, so callers never divide by zero.
    #[must_use]
    pub fn new(checked: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            checked: checked.min(total),
            total,
        })
    }

    /// Score a slice of checkbox states.
    #[must_use]
    pub fn from_states(states: &[bool]) -> Option<Self> {
        let checked = states.iter().filter(|checked| **checked).count();
        Self::new(checked, states.len())
    }

    #[must_use]
    pub const fn checked(self) -> usize {
        self.checked
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.total
    }

    /// Rounded percentage, half away from zero.
    #[must_use]
    pub fn percentage(self) -> u8 {
        let pct = (100.0 * self.checked as f64 / self.total as f64).round();
        pct.clamp(0.0, 100.0) as u8
    }

    #[must_use]
    pub fn tier(self) -> FeedbackTier {
        FeedbackTier::for_percentage(self.percentage())
    }

    /// Text shown next to the checklist.
    #[must_use]
    pub fn feedback(self) -> String {
        format!("{}% {}", self.percentage(), self.tier().message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// Exactly 100%.
    Complete,
    /// 80% and above.
    Strong,
    /// 60% and above.
    Developing,
    /// 40% and above.
    Emerging,
    Beginning,
}

impl FeedbackTier {
    #[must_use]
    pub const fn for_percentage(pct: u8) -> Self {
        match pct {
            100.. => FeedbackTier::Complete,
            80.. => FeedbackTier::Strong,
            60.. => FeedbackTier::Developing,
            40.. => FeedbackTier::Emerging,
            _ => FeedbackTier::Beginning,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            FeedbackTier::Complete => {
                "Excellent! You are applying systems thinking across the board."
            }
            FeedbackTier::Strong => "Great work. A few areas left to strengthen.",
            FeedbackTier::Developing => "Good progress. Revisit the steps you left unchecked.",
            FeedbackTier::Emerging => "You have a foundation. Focus on the connections next.",
            FeedbackTier::Beginning => "Just getting started. Work through the steps again.",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
