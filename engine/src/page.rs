//! In-memory page the TUI renders from.
//!
//! `PageModel` is the production [`RenderSurface`]: controllers write region
//! state into it and the TUI reads it back each frame. Node centres are the
//! one thing flowing the other way; the TUI measures them from its current
//! layout and stores them here before anything asks.

use std::collections::HashMap;

use lesson_types::{ConceptId, STEP_COUNT, StepIndex, checklist_groups};

use crate::surface::{
    Connector, Control, DetailPanel, Point, Region, RenderSurface, SurfaceError, SurfaceResult,
};

const STEPS: usize = STEP_COUNT as usize;

#[derive(Debug, Default)]
pub struct PageModel {
    menu_highlight: [bool; STEPS],
    panel_visible: [bool; STEPS],
    progress_label: String,
    previous_visible: bool,
    next_visible: bool,
    content_scroll: u16,
    node_active: [bool; ConceptId::COUNT],
    node_hover: [bool; ConceptId::COUNT],
    detail: Option<DetailPanel>,
    connectors: Vec<Connector>,
    node_centers: HashMap<ConceptId, Point>,
    feedback: HashMap<&'static str, String>,
}

impl PageModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_menu_highlighted(&self, step: StepIndex) -> bool {
        self.menu_highlight[step.position()]
    }

    /// The visible panel. `None` only before the first render.
    #[must_use]
    pub fn visible_panel(&self) -> Option<StepIndex> {
        StepIndex::all().find(|step| self.panel_visible[step.position()])
    }

    #[must_use]
    pub fn progress_label(&self) -> &str {
        &self.progress_label
    }

    #[must_use]
    pub fn is_control_visible(&self, control: Control) -> bool {
        match control {
            Control::Previous => self.previous_visible,
            Control::Next => self.next_visible,
        }
    }

    #[must_use]
    pub fn content_scroll(&self) -> u16 {
        self.content_scroll
    }

    pub fn scroll_content(&mut self, delta: i32) {
        let next = i32::from(self.content_scroll).saturating_add(delta);
        self.content_scroll = u16::try_from(next.max(0)).unwrap_or(u16::MAX);
    }

    /// Clamp scroll after the TUI learns how tall the content is.
    pub fn clamp_content_scroll(&mut self, max: u16) {
        self.content_scroll = self.content_scroll.min(max);
    }

    #[must_use]
    pub fn is_node_active(&self, node: ConceptId) -> bool {
        self.node_active[node as usize]
    }

    #[must_use]
    pub fn is_node_hovered(&self, node: ConceptId) -> bool {
        self.node_hover[node as usize]
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    #[must_use]
    pub fn feedback(&self, group: &str) -> Option<&str> {
        self.feedback.get(group).map(String::as_str)
    }

    /// Replace measured node centres. Returns whether anything moved,
    /// appeared or disappeared.
    pub fn set_node_centers(
        &mut self,
        centers: impl IntoIterator<Item = (ConceptId, Point)>,
    ) -> bool {
        let centers: HashMap<ConceptId, Point> = centers.into_iter().collect();
        if centers == self.node_centers {
            return false;
        }
        self.node_centers = centers;
        true
    }
}

impl RenderSurface for PageModel {
    fn set_menu_highlight(&mut self, step: StepIndex, highlighted: bool) -> SurfaceResult {
        self.menu_highlight[step.position()] = highlighted;
        Ok(())
    }

    fn set_panel_visible(&mut self, step: StepIndex, visible: bool) -> SurfaceResult {
        self.panel_visible[step.position()] = visible;
        Ok(())
    }

    fn set_progress_label(&mut self, text: &str) -> SurfaceResult {
        text.clone_into(&mut self.progress_label);
        Ok(())
    }

    fn set_control_visible(&mut self, control: Control, visible: bool) -> SurfaceResult {
        match control {
            Control::Previous => self.previous_visible = visible,
            Control::Next => self.next_visible = visible,
        }
        Ok(())
    }

    fn scroll_content_to_top(&mut self) -> SurfaceResult {
        self.content_scroll = 0;
        Ok(())
    }

    fn set_node_active(&mut self, node: ConceptId, active: bool) -> SurfaceResult {
        self.node_active[node as usize] = active;
        Ok(())
    }

    fn set_node_hover(&mut self, node: ConceptId, hovered: bool) -> SurfaceResult {
        self.node_hover[node as usize] = hovered;
        Ok(())
    }

    fn set_detail_panel(&mut self, panel: DetailPanel) -> SurfaceResult {
        self.detail = Some(panel);
        Ok(())
    }

    fn node_center(&self, node: ConceptId) -> Option<Point> {
        self.node_centers.get(&node).copied()
    }

    fn clear_connectors(&mut self) -> SurfaceResult {
        self.connectors.clear();
        Ok(())
    }

    fn draw_connector(&mut self, connector: Connector) -> SurfaceResult {
        self.connectors.push(connector);
        Ok(())
    }

    fn set_connector_highlight(&mut self, index: usize, highlighted: bool) -> SurfaceResult {
        let connector = self
            .connectors
            .iter_mut()
            .find(|c| c.index == index)
            .ok_or(SurfaceError::MissingTarget(Region::Connector(index)))?;
        connector.highlighted = highlighted;
        Ok(())
    }

    fn set_feedback(&mut self, group: &str, text: &str) -> SurfaceResult {
        let name = checklist_groups()
            .into_iter()
            .map(|g| g.name)
            .find(|name| *name == group)
            .ok_or_else(|| SurfaceError::MissingTarget(Region::Feedback(group.to_string())))?;
        self.feedback.insert(name, text.to_string());
        Ok(())
    }
}
