//! The render surface the controllers draw onto.
//!
//! Controllers never hold rendering state of their own beyond what they need
//! to make decisions. Every visible effect goes through [`RenderSurface`], so
//! the TUI page model and the recording fake in tests are interchangeable.

use lesson_types::{ConceptId, ConceptNode, StepIndex, Strength};
use thiserror::Error;
use tracing::debug;

/// Previous/next navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    Previous,
    Next,
}

/// Named target of a surface update, used to report missing targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    MenuEntry(StepIndex),
    Panel(StepIndex),
    ProgressLabel,
    Control(Control),
    ContentArea,
    Node(ConceptId),
    DetailPanel,
    Connectors,
    Connector(usize),
    Feedback(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("render target {0:?} not found")]
    MissingTarget(Region),
}

pub type SurfaceResult = Result<(), SurfaceError>;

/// Centre of a node in surface coordinates (terminal cells for the TUI).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drawn, directed connector line.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Position of the connection in the source node's list.
    pub index: usize,
    pub source: ConceptId,
    pub target: ConceptId,
    pub strength: Strength,
    pub from: Point,
    pub to: Point,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub icon: &'static str,
    pub target: ConceptId,
    pub target_name: &'static str,
    pub strength: Strength,
    pub description: &'static str,
}

/// Content of the detail panel for the selected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub node: ConceptId,
    pub title: &'static str,
    pub entries: Vec<DetailEntry>,
}

impl DetailPanel {
    #[must_use]
    pub fn for_node(node: &ConceptNode) -> Self {
        let entries = node
            .connections
            .iter()
            .map(|conn| DetailEntry {
                icon: conn.icon,
                target: conn.target,
                target_name: conn.target.display_name(),
                strength: conn.strength,
                description: conn.description,
            })
            .collect();
        Self {
            node: node.id,
            title: node.title,
            entries,
        }
    }
}

/// Everything the controllers can change or measure on screen.
///
/// Each mutation reports `SurfaceError::MissingTarget` when the target does
/// not exist on this surface. Callers skip that single update and carry on.
pub trait RenderSurface {
    fn set_menu_highlight(&mut self, step: StepIndex, highlighted: bool) -> SurfaceResult;
    fn set_panel_visible(&mut self, step: StepIndex, visible: bool) -> SurfaceResult;
    fn set_progress_label(&mut self, text: &str) -> SurfaceResult;
    fn set_control_visible(&mut self, control: Control, visible: bool) -> SurfaceResult;
    fn scroll_content_to_top(&mut self) -> SurfaceResult;

    fn set_node_active(&mut self, node: ConceptId, active: bool) -> SurfaceResult;
    fn set_node_hover(&mut self, node: ConceptId, hovered: bool) -> SurfaceResult;
    fn set_detail_panel(&mut self, panel: DetailPanel) -> SurfaceResult;
    /// Current centre of a node, measured from live layout.
    fn node_center(&self, node: ConceptId) -> Option<Point>;
    fn clear_connectors(&mut self) -> SurfaceResult;
    fn draw_connector(&mut self, connector: Connector) -> SurfaceResult;
    fn set_connector_highlight(&mut self, index: usize, highlighted: bool) -> SurfaceResult;

    fn set_feedback(&mut self, group: &str, text: &str) -> SurfaceResult;
}

/// Apply one update, logging and dropping a missing-target failure.
pub(crate) fn apply(result: SurfaceResult) {
    if let Err(SurfaceError::MissingTarget(region)) = result {
        debug!(?region, "Render target missing; update skipped");
    }
}
