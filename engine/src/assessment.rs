//! Checklist state and progress feedback.

use lesson_types::{ChecklistGroup, Score, checklist_groups};
use tracing::debug;

use crate::surface::{RenderSurface, apply};

#[derive(Debug)]
struct GroupState {
    group: &'static ChecklistGroup,
    checked: Vec<bool>,
}

/// Checkbox states for every checklist group in the lesson.
#[derive(Debug)]
pub struct AssessmentBoard {
    groups: Vec<GroupState>,
}

impl Default for AssessmentBoard {
    fn default() -> Self {
        Self::from_groups(checklist_groups())
    }
}

impl AssessmentBoard {
    #[must_use]
    pub fn from_groups(groups: impl IntoIterator<Item = &'static ChecklistGroup>) -> Self {
        let groups = groups
            .into_iter()
            .map(|group| GroupState {
                group,
                checked: vec![false; group.items.len()],
            })
            .collect();
        Self { groups }
    }

    /// Checked flags for `group`, in item order.
    #[must_use]
    pub fn states(&self, group: &str) -> Option<&[bool]> {
        self.find(group).map(|state| state.checked.as_slice())
    }

    /// Flip one item and refresh the group's feedback.
    ///
    /// Returns the new checked state, or `None` if the group or item does not
    /// exist.
    pub fn toggle<S>(&mut self, group: &str, item: usize, surface: &mut S) -> Option<bool>
    where
        S: RenderSurface + ?Sized,
    {
        let state = self.groups.iter_mut().find(|s| s.group.name == group)?;
        let slot = state.checked.get_mut(item)?;
        *slot = !*slot;
        let now = *slot;
        self.check_progress(group, surface);
        Some(now)
    }

    /// Score `group` and show the tiered feedback.
    ///
    /// An empty group has no score and its feedback is left as it was.
    pub fn check_progress<S>(&self, group: &str, surface: &mut S) -> Option<Score>
    where
        S: RenderSurface + ?Sized,
    {
        let Some(state) = self.find(group) else {
            debug!(group, "Unknown checklist group");
            return None;
        };
        let score = Score::from_states(&state.checked)?;
        apply(surface.set_feedback(group, &score.feedback()));
        Some(score)
    }

    fn find(&self, group: &str) -> Option<&GroupState> {
        self.groups.iter().find(|state| state.group.name == group)
    }
}
