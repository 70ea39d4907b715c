//! Relationship diagram controller.
//!
//! State machine with two states: nothing selected, or one node selected.
//! The only transition is `select`. Connector endpoints are measured from the
//! surface every time they are drawn; positions are never cached here.

use std::time::Duration;

use lesson_types::{ConceptId, lookup_concept};
use tracing::{debug, info};

use crate::highlight::{HighlightAction, HighlightSchedule, HighlightTiming};
use crate::surface::{Connector, DetailPanel, RenderSurface, apply};

#[derive(Debug)]
pub struct DiagramController {
    active: Option<ConceptId>,
    schedule: HighlightSchedule,
    animate: bool,
}

impl Default for DiagramController {
    fn default() -> Self {
        Self::new(HighlightTiming::default(), true)
    }
}

impl DiagramController {
    #[must_use]
    pub fn new(timing: HighlightTiming, animate: bool) -> Self {
        Self {
            active: None,
            schedule: HighlightSchedule::new(timing),
            animate,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<ConceptId> {
        self.active
    }

    #[must_use]
    pub fn highlight_generation(&self) -> u64 {
        self.schedule.generation()
    }

    /// Select a node by raw identifier. Unknown identifiers are ignored.
    pub fn select_node<S>(&mut self, raw: &str, surface: &mut S) -> Option<ConceptId>
    where
        S: RenderSurface + ?Sized,
    {
        let Some(node) = lookup_concept(raw) else {
            debug!(node = raw, "Ignoring selection of unknown node");
            return None;
        };
        self.select(node.id, surface);
        Some(node.id)
    }

    pub fn select<S>(&mut self, id: ConceptId, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        for node in ConceptId::ALL {
            apply(surface.set_node_active(node, node == id));
        }
        // The active node never carries the hover cue.
        apply(surface.set_node_hover(id, false));
        self.active = Some(id);

        let node = id.node();
        apply(surface.set_detail_panel(DetailPanel::for_node(node)));
        info!(node = %id, connections = node.connections.len(), "Selected concept");

        self.redraw_connectors(surface);
    }

    /// Transient hover cue. Only non-active nodes show it.
    pub fn hover<S>(&mut self, hovered: Option<ConceptId>, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        for node in ConceptId::ALL {
            let cue = hovered == Some(node) && self.active != Some(node);
            apply(surface.set_node_hover(node, cue));
        }
    }

    /// Re-measure node positions and redraw; called when layout changes.
    pub fn handle_resize<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        if self.active.is_some() {
            self.redraw_connectors(surface);
        }
    }

    /// Advance highlight effects.
    pub fn tick<S>(&mut self, delta: Duration, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        for action in self.schedule.advance(delta) {
            match action {
                HighlightAction::Highlight(index) => {
                    apply(surface.set_connector_highlight(index, true));
                }
                HighlightAction::Settle(index) => {
                    apply(surface.set_connector_highlight(index, false));
                }
            }
        }
    }

    fn redraw_connectors<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let Some(source) = self.active else {
            return;
        };
        let generation = self.schedule.begin();
        apply(surface.clear_connectors());

        let Some(from) = surface.node_center(source) else {
            debug!(node = %source, "Source node not on screen; no connectors drawn");
            return;
        };

        for (index, conn) in source.node().connections.iter().enumerate() {
            let Some(to) = surface.node_center(conn.target) else {
                debug!(node = %conn.target, "Target node not on screen; connector skipped");
                continue;
            };
            apply(surface.draw_connector(Connector {
                index,
                source,
                target: conn.target,
                strength: conn.strength,
                from,
                to,
                highlighted: false,
            }));
            if self.animate {
                self.schedule.schedule(generation, index);
            }
        }
    }
}
