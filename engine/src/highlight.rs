//! Staggered connector highlight effects.
//!
//! Each selection starts a new generation. Effects are scheduled against the
//! generation that created them and are only applied if that generation is
//! still current when they come due; stale ones are dropped. Nothing is ever
//! cancelled eagerly.

use std::time::Duration;

use tracing::trace;

/// Delay between consecutive connectors, and how long each stays lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTiming {
    pub stagger: Duration,
    pub hold: Duration,
}

impl HighlightTiming {
    pub const DEFAULT_STAGGER: Duration = Duration::from_millis(120);
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(450);
}

impl Default for HighlightTiming {
    fn default() -> Self {
        Self {
            stagger: Self::DEFAULT_STAGGER,
            hold: Self::DEFAULT_HOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightAction {
    Highlight(usize),
    Settle(usize),
}

#[derive(Debug, Clone)]
struct Scheduled {
    generation: u64,
    due: Duration,
    action: HighlightAction,
}

#[derive(Debug, Default)]
pub struct HighlightSchedule {
    timing: HighlightTiming,
    generation: u64,
    clock: Duration,
    pending: Vec<Scheduled>,
}

impl HighlightSchedule {
    #[must_use]
    pub fn new(timing: HighlightTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Start a new generation; everything scheduled before becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Schedule the highlight/settle pair for the connector at `position`.
    pub fn schedule(&mut self, generation: u64, position: usize) {
        let offset = self
            .timing
            .stagger
            .saturating_mul(u32::try_from(position).unwrap_or(u32::MAX));
        let lit_at = self.clock.saturating_add(offset);
        self.pending.push(Scheduled {
            generation,
            due: lit_at,
            action: HighlightAction::Highlight(position),
        });
        self.pending.push(Scheduled {
            generation,
            due: lit_at.saturating_add(self.timing.hold),
            action: HighlightAction::Settle(position),
        });
    }

    /// Advance the clock and return the due actions of the current
    /// generation, in due order.
    pub fn advance(&mut self, delta: Duration) -> Vec<HighlightAction> {
        self.clock = self.clock.saturating_add(delta);
        let clock = self.clock;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due <= clock);
        self.pending = pending;
        due.sort_by_key(|task| task.due);

        let current = self.generation;
        due.into_iter()
            .filter(|task| {
                let fresh = task.generation == current;
                if !fresh {
                    trace!(
                        generation = task.generation,
                        current,
                        "Dropping stale highlight"
                    );
                }
                fresh
            })
            .map(|task| task.action)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{HighlightAction, HighlightSchedule, HighlightTiming};

    fn timing() -> HighlightTiming {
        HighlightTiming {
            stagger: Duration::from_millis(100),
            hold: Duration::from_millis(300),
        }
    }

    #[test]
    fn staggers_by_position() {
        let mut schedule = HighlightSchedule::new(timing());
        let generation = schedule.begin();
        for position in 0..3 {
            schedule.schedule(generation, position);
        }

        assert_eq!(
            schedule.advance(Duration::ZERO),
            vec![HighlightAction::Highlight(0)]
        );
        assert_eq!(
            schedule.advance(Duration::from_millis(100)),
            vec![HighlightAction::Highlight(1)]
        );
        assert_eq!(
            schedule.advance(Duration::from_millis(100)),
            vec![HighlightAction::Highlight(2)]
        );
        assert_eq!(
            schedule.advance(Duration::from_millis(100)),
            vec![HighlightAction::Settle(0)]
        );
        assert_eq!(
            schedule.advance(Duration::from_millis(500)),
            vec![HighlightAction::Settle(1), HighlightAction::Settle(2)]
        );
        assert_eq!(schedule.pending(), 0);
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut schedule = HighlightSchedule::new(timing());
        let first = schedule.begin();
        schedule.schedule(first, 0);
        schedule.schedule(first, 1);

        let second = schedule.begin();
        schedule.schedule(second, 0);

        let actions = schedule.advance(Duration::from_secs(5));
        assert_eq!(
            actions,
            vec![HighlightAction::Highlight(0), HighlightAction::Settle(0)]
        );
        assert_eq!(schedule.pending(), 0);
    }

    #[test]
    fn nothing_due_before_time() {
        let mut schedule = HighlightSchedule::new(timing());
        let generation = schedule.begin();
        schedule.schedule(generation, 4);
        assert!(schedule.advance(Duration::from_millis(399)).is_empty());
        assert_eq!(
            schedule.advance(Duration::from_millis(1)),
            vec![HighlightAction::Highlight(4)]
        );
    }
}
