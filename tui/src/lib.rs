//! TUI rendering for the lesson using ratatui.
//!
//! Everything drawn here is read back from the engine's page model. The one
//! exception is the diagram layout: node centres are measured each frame and
//! written into the page before connectors are drawn.

mod diagram;
mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Heading, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use lesson_engine::{
    App, ChecklistGroup, Control, InputMode, STEP_COUNT, StatusNotice, StepContent, StepIndex,
    StepWidget, step_content,
};

use self::diagram::{DiagramLayout, detail_paragraph, draw_diagram};

const MENU_WIDTH: u16 = 24;
const DETAIL_WIDTH: u16 = 40;
/// Below this content width the detail panel moves under the diagram.
const SIDE_DETAIL_MIN_WIDTH: u16 = 90;
const DIAGRAM_TEXT_MAX_ROWS: u16 = 6;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Menu + content
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Status / prompt
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_menu(frame, app, body[0], &palette, &glyphs);
    draw_content(frame, app, body[1], &palette, &glyphs);
    draw_controls(frame, app, chunks[2], &palette, &glyphs);
    draw_status_line(frame, app, chunks[3], &palette);
}

fn panel_block<'a>(title: &'a str, palette: &Palette, glyphs: &Glyphs) -> Block<'a> {
    Block::bordered()
        .border_set(glyphs.border)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let label = app.page().progress_label();
    let progress = if label.is_empty() {
        String::new()
    } else {
        format!(" Step {label} of {STEP_COUNT} ")
    };

    let block = panel_block("Systems Thinking", palette, glyphs).title(
        Line::from(Span::styled(progress, Style::default().fg(palette.accent)))
            .alignment(Alignment::Right),
    );
    let subtitle = Paragraph::new(Span::styled(
        "See the whole, not just the parts",
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC),
    ))
    .block(block.padding(Padding::horizontal(1)));
    frame.render_widget(subtitle, area);
}

fn draw_menu(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let page = app.page();
    let lines: Vec<Line> = StepIndex::all()
        .map(|step| {
            let label = step_content(step).menu_label;
            if page.is_menu_highlighted(step) {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", glyphs.selected),
                        Style::default().fg(palette.primary),
                    ),
                    Span::styled(
                        format!("{step} {label}"),
                        Style::default()
                            .fg(palette.text_primary)
                            .bg(palette.bg_highlight)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {step} {label}"),
                    Style::default().fg(palette.text_secondary),
                ))
            }
        })
        .collect();

    let menu = Paragraph::new(lines).block(panel_block("Steps", palette, glyphs));
    frame.render_widget(menu, area);
}

fn body_lines(content: &StepContent, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(content.body.len() * 2);
    for (i, paragraph) in content.body.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            *paragraph,
            Style::default().fg(palette.text_primary),
        )));
    }
    lines
}

/// Rows `lines` occupy once word-wrapped to `width`.
fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    if lines.is_empty() {
        return 0;
    }
    let rows = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn draw_content(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(step) = app.page().visible_panel() else {
        app.update_diagram_layout([]);
        return;
    };
    let content = step_content(step);

    let block = panel_block(content.title, palette, glyphs).padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = body_lines(content, palette);
    let text_rows = wrapped_line_count(&lines, inner.width);

    let (text_area, widget_area) = match content.widget {
        StepWidget::None => (inner, None),
        StepWidget::Diagram => split_text(inner, text_rows.min(DIAGRAM_TEXT_MAX_ROWS)),
        StepWidget::Checklist(_) => split_text(inner, text_rows.min(inner.height / 2)),
    };

    let max_scroll = text_rows.saturating_sub(text_area.height);
    app.clamp_content_scroll(max_scroll);
    let text = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.page().content_scroll(), 0));
    frame.render_widget(text, text_area);

    match (content.widget, widget_area) {
        (StepWidget::Diagram, Some(area)) => {
            draw_diagram_panel(frame, app, area, palette, glyphs);
        }
        (StepWidget::Checklist(group), Some(area)) => {
            app.update_diagram_layout([]);
            draw_checklist(frame, app, group, area, palette, glyphs);
        }
        _ => app.update_diagram_layout([]),
    }
}

/// Text on top, a one-row gap, then the widget.
fn split_text(area: Rect, text_rows: u16) -> (Rect, Option<Rect>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_rows),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);
    (chunks[0], Some(chunks[2]))
}

fn draw_diagram_panel(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (canvas_area, detail_area) = if area.width >= SIDE_DETAIL_MIN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(DETAIL_WIDTH)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(10)])
            .split(area);
        (chunks[0], chunks[1])
    };

    let layout = DiagramLayout::compute(canvas_area);
    app.update_diagram_layout(layout.centers());

    let page = app.page();
    draw_diagram(frame, page, &layout, canvas_area, palette, glyphs);

    let detail_block = panel_block("Connections", palette, glyphs).padding(Padding::horizontal(1));
    frame.render_widget(
        detail_paragraph(page.detail(), palette, glyphs).block(detail_block),
        detail_area,
    );
}

fn draw_checklist(
    frame: &mut Frame,
    app: &App,
    group: &ChecklistGroup,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let states = app.checklist_states(group.name).unwrap_or(&[]);
    let cursor = app.checklist_cursor();

    let mut lines: Vec<Line> = group
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let checked = states.get(i).copied().unwrap_or(false);
            let marker = if i == cursor { glyphs.selected } else { " " };
            let (box_glyph, box_style) = if checked {
                (glyphs.checked, Style::default().fg(palette.green))
            } else {
                (glyphs.unchecked, Style::default().fg(palette.text_muted))
            };
            let text_style = if i == cursor {
                Style::default()
                    .fg(palette.text_primary)
                    .bg(palette.bg_highlight)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.primary)),
                Span::styled(format!("{box_glyph} "), box_style),
                Span::styled(*item, text_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    let feedback = match app.page().feedback(group.name) {
        Some(text) => Span::styled(
            text.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "Space to tick an item, Up/Down to move",
            Style::default().fg(palette.text_muted),
        ),
    };
    lines.push(Line::from(feedback));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let page = app.page();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(1),
            Constraint::Length(14),
        ])
        .split(area);

    if page.is_control_visible(Control::Previous) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} Previous", glyphs.previous),
                styles::key_highlight(palette),
            )),
            chunks[0],
        );
    }

    let sep = format!(" {} ", glyphs.separator);
    let hints = Line::from(vec![
        Span::styled(glyphs.step_keys, styles::key_highlight(palette)),
        Span::styled(" step", styles::key_hint(palette)),
        Span::styled(sep.clone(), styles::key_hint(palette)),
        Span::styled(format!("1-{STEP_COUNT}"), styles::key_highlight(palette)),
        Span::styled(" jump", styles::key_hint(palette)),
        Span::styled(sep.clone(), styles::key_hint(palette)),
        Span::styled(":", styles::key_highlight(palette)),
        Span::styled(" command", styles::key_hint(palette)),
        Span::styled(sep, styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[1],
    );

    if page.is_control_visible(Control::Next) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Next {} ", glyphs.next),
                styles::key_highlight(palette),
            ))
            .alignment(Alignment::Right),
            chunks[2],
        );
    }
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    if app.input_mode() == InputMode::Command {
        let draft = app.command_draft();
        let label = " COMMAND ";
        let prompt = Line::from(vec![
            Span::styled(label, styles::mode_command(palette)),
            Span::styled(" :", Style::default().fg(palette.yellow)),
            Span::styled(
                draft.text().to_string(),
                Style::default().fg(palette.text_primary),
            ),
        ]);
        frame.render_widget(Paragraph::new(prompt), area);

        let before_cursor: usize = draft
            .text()
            .graphemes(true)
            .take(draft.cursor())
            .map(UnicodeWidthStr::width)
            .sum();
        let prefix_width = label.width() + 2;
        let x = area
            .x
            .saturating_add((prefix_width + before_cursor) as u16)
            .min(area.right().saturating_sub(1));
        frame.set_cursor_position((x, area.y));
        return;
    }

    let Some(notice) = app.notice() else {
        return;
    };
    let style = match notice {
        StatusNotice::Warning(_) => Style::default().fg(palette.warning),
        StatusNotice::Info(_) => Style::default().fg(palette.text_secondary),
    };
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(notice.text().to_string(), style),
    ]));
    frame.render_widget(status, area);
}
