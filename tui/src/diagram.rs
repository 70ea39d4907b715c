//! Relationship diagram rendering.
//!
//! Node boxes are placed from their fractional positions inside the diagram
//! area. Their centres are what the engine measures connectors between, so
//! layout runs before anything is drawn.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use lesson_engine::{ConceptId, Connector, DetailPanel, PageModel, Point};

use crate::theme::{Glyphs, Heading, Palette, styles};

const NODE_HEIGHT: u16 = 3;
/// Border plus one column of padding on each side.
const NODE_CHROME: u16 = 4;

/// Screen placement of every node for one frame.
#[derive(Debug, Default)]
pub(crate) struct DiagramLayout {
    nodes: Vec<(ConceptId, Rect)>,
}

impl DiagramLayout {
    /// Place nodes inside `area`. Returns an empty layout if the area cannot
    /// hold the widest node.
    pub(crate) fn compute(area: Rect) -> Self {
        let widest = ConceptId::ALL
            .iter()
            .map(|id| node_width(*id))
            .max()
            .unwrap_or(NODE_CHROME);
        if area.width < widest.saturating_mul(2) || area.height < NODE_HEIGHT.saturating_mul(3) {
            return Self::default();
        }

        let nodes = ConceptId::ALL
            .into_iter()
            .map(|id| (id, place(id, area)))
            .collect();
        Self { nodes }
    }

    pub(crate) fn centers(&self) -> Vec<(ConceptId, Point)> {
        self.nodes
            .iter()
            .map(|(id, rect)| {
                let x = f64::from(rect.x) + f64::from(rect.width / 2);
                let y = f64::from(rect.y) + f64::from(rect.height / 2);
                (*id, Point::new(x, y))
            })
            .collect()
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        self.nodes.iter().any(|(_, rect)| {
            x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
        })
    }
}

fn node_width(id: ConceptId) -> u16 {
    id.display_name().width() as u16 + NODE_CHROME
}

fn place(id: ConceptId, area: Rect) -> Rect {
    let pos = id.node().position;
    let width = node_width(id);
    let span_x = f32::from(area.width.saturating_sub(1));
    let span_y = f32::from(area.height.saturating_sub(1));
    let cx = area.x + (pos.x * span_x).round() as u16;
    let cy = area.y + (pos.y * span_y).round() as u16;

    let max_x = area.right().saturating_sub(width);
    let max_y = area.bottom().saturating_sub(NODE_HEIGHT);
    Rect {
        x: cx.saturating_sub(width / 2).clamp(area.x, max_x),
        y: cy.saturating_sub(NODE_HEIGHT / 2).clamp(area.y, max_y),
        width,
        height: NODE_HEIGHT,
    }
}

/// Draw connectors, then nodes on top of them.
pub(crate) fn draw_diagram(
    frame: &mut Frame,
    page: &PageModel,
    layout: &DiagramLayout,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if layout.nodes.is_empty() {
        let hint = Paragraph::new("Enlarge the terminal to see the diagram")
            .style(Style::default().fg(palette.text_muted))
            .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    frame.render_widget(
        ConnectorLayer {
            connectors: page.connectors(),
            layout,
            palette,
            glyphs,
        },
        area,
    );

    for (id, rect) in &layout.nodes {
        let (text_style, border_style) = if page.is_node_active(*id) {
            let style = styles::active_node(palette);
            (style, style)
        } else if page.is_node_hovered(*id) {
            let style = styles::hovered_node(palette);
            (style, Style::default().fg(palette.accent))
        } else {
            (
                Style::default().fg(palette.text_primary).bg(palette.bg_panel),
                Style::default().fg(palette.bg_border),
            )
        };

        let block = Block::bordered()
            .border_set(glyphs.border)
            .border_style(border_style)
            .style(text_style);

        frame.render_widget(Clear, *rect);
        frame.render_widget(
            Paragraph::new(id.display_name())
                .alignment(Alignment::Center)
                .block(block),
            *rect,
        );
    }
}

struct ConnectorLayer<'a> {
    connectors: &'a [Connector],
    layout: &'a DiagramLayout,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl Widget for ConnectorLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for connector in self.connectors {
            let style = if connector.highlighted {
                Style::default()
                    .fg(self.palette.peach)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.strength(connector.strength))
            };
            let stroke = self.glyphs.stroke(connector.strength);
            let arrow = arrowhead(connector, self.glyphs);

            let cells: Vec<(u16, u16)> = line_cells(cell(connector.from), cell(connector.to))
                .into_iter()
                .filter_map(|(x, y)| Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?)))
                .filter(|(x, y)| area.contains((*x, *y).into()))
                .filter(|(x, y)| !self.layout.contains(*x, *y))
                .collect();

            let last = cells.len().saturating_sub(1);
            for (i, (x, y)) in cells.into_iter().enumerate() {
                if let Some(target) = buf.cell_mut((x, y)) {
                    let symbol = if i == last { arrow } else { stroke };
                    target.set_char(symbol).set_style(style);
                }
            }
        }
    }
}

fn cell(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

/// Arrowhead for the connector's strength and dominant direction.
fn arrowhead(connector: &Connector, glyphs: &Glyphs) -> char {
    glyphs.arrow(connector.strength, heading(connector.from, connector.to))
}

/// Terminal cells are roughly twice as tall as they are wide.
fn heading(from: Point, to: Point) -> Heading {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() >= dy.abs() * 2.0 {
        if dx >= 0.0 { Heading::Right } else { Heading::Left }
    } else if dy >= 0.0 {
        Heading::Down
    } else {
        Heading::Up
    }
}

/// Bresenham cells from `from` to `to`, both ends included.
pub(crate) fn line_cells(from: (i32, i32), to: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);

    loop {
        cells.push((x, y));
        if (x, y) == to {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

pub(crate) fn detail_paragraph<'a>(
    detail: Option<&'a DetailPanel>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Paragraph<'a> {
    let Some(detail) = detail else {
        return Paragraph::new(Line::from(Span::styled(
            "Tab to focus a concept, Enter to select it",
            Style::default().fg(palette.text_muted),
        )))
        .wrap(Wrap { trim: true });
    };

    let mut lines = vec![
        Line::from(Span::styled(detail.title, styles::title(palette))),
        Line::from(""),
    ];
    for entry in &detail.entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.icon(entry.icon)),
                Style::default().fg(palette.strength(entry.strength)),
            ),
            Span::styled(
                entry.target_name,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", entry.strength.as_str()),
                Style::default().fg(palette.strength(entry.strength)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            Style::default().fg(palette.text_secondary),
        )));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}
