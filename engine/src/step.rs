//! Step navigation.
//!
//! `StepController` owns the current step. Every successful transition
//! re-renders the same four derived views (menu, panel, progress, controls)
//! from scratch, so rendering the current step twice yields the same page.

use lesson_types::{STEP_COUNT, StepError, StepIndex};
use tracing::{debug, warn};

use crate::surface::{Control, RenderSurface, apply};

/// Navigation keys the step controller understands, independent of the
/// terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Home,
    End,
    Char(char),
}

/// A navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCommand {
    Previous,
    Next,
    First,
    Last,
    /// Raw requested step; validated by `go_to_step`.
    GoTo(i64),
}

impl StepCommand {
    /// Keyboard mapping. Digits outside `1..=STEP_COUNT` and all other keys
    /// map to `None`.
    #[must_use]
    pub fn from_key(key: NavKey) -> Option<Self> {
        match key {
            NavKey::Left => Some(StepCommand::Previous),
            NavKey::Right => Some(StepCommand::Next),
            NavKey::Home => Some(StepCommand::First),
            NavKey::End => Some(StepCommand::Last),
            NavKey::Char(c) => {
                let digit = c.to_digit(10)?;
                (1..=u32::from(STEP_COUNT))
                    .contains(&digit)
                    .then_some(StepCommand::GoTo(i64::from(digit)))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct StepController {
    current: StepIndex,
}

impl StepController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> StepIndex {
        self.current
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.current.is_last()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.current.is_first()
    }

    /// Move to step `requested` and re-render.
    ///
    /// Out-of-range requests are rejected with a warning and leave both the
    /// state and the surface untouched.
    pub fn go_to_step<S>(&mut self, requested: i64, surface: &mut S) -> Result<StepIndex, StepError>
    where
        S: RenderSurface + ?Sized,
    {
        let step = StepIndex::new(requested).inspect_err(|err| {
            warn!(requested, current = %self.current, "Rejected step change: {err}");
        })?;
        self.show(step, surface);
        Ok(step)
    }

    /// Move to an already validated step and re-render.
    pub fn show<S>(&mut self, step: StepIndex, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        self.current = step;
        self.render(surface);
        debug!(step = %step, "Moved to step");
    }

    /// Returns `false` at the last step.
    pub fn next<S>(&mut self, surface: &mut S) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        let Some(step) = self.current.next() else {
            return false;
        };
        self.show(step, surface);
        true
    }

    /// Returns `false` at the first step.
    pub fn previous<S>(&mut self, surface: &mut S) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        let Some(step) = self.current.previous() else {
            return false;
        };
        self.show(step, surface);
        true
    }

    /// Run a navigation command. Returns whether a transition happened.
    pub fn apply<S>(&mut self, command: StepCommand, surface: &mut S) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        match command {
            StepCommand::Previous => self.previous(surface),
            StepCommand::Next => self.next(surface),
            StepCommand::First => {
                self.show(StepIndex::FIRST, surface);
                true
            }
            StepCommand::Last => {
                self.show(StepIndex::LAST, surface);
                true
            }
            StepCommand::GoTo(n) => self.go_to_step(n, surface).is_ok(),
        }
    }

    /// Write the derived views for the current step. Each update is
    /// independent: a missing target skips only that update.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let current = self.current;

        for step in StepIndex::all() {
            apply(surface.set_menu_highlight(step, step == current));
        }
        for step in StepIndex::all() {
            apply(surface.set_panel_visible(step, step == current));
        }
        apply(surface.set_progress_label(&current.to_string()));
        apply(surface.set_control_visible(Control::Previous, !current.is_first()));
        apply(surface.set_control_visible(Control::Next, !current.is_last()));
        apply(surface.scroll_content_to_top());
    }
}
