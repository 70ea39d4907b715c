//! TUI render tests using a vt100 virtual terminal.


use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::Terminal;
use vt100::Color;

use lesson_engine::{App, AppConfig, ConceptId, LessonConfig};
use lesson_tui::{apply_event, draw};

use vt100_backend::VirtualTerminal;

fn terminal(width: u16, height: u16) -> Terminal<VirtualTerminal> {
    Terminal::new(VirtualTerminal::new(width, height)).expect("failed to create terminal")
}

fn render(terminal: &mut Terminal<VirtualTerminal>, app: &mut App) -> String {
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal.backend().contents()
}

fn press(app: &mut App, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn ascii_app() -> App {
    let config = LessonConfig {
        app: Some(AppConfig {
            ascii_only: true,
            ..AppConfig::default()
        }),
        diagram: None,
    };
    App::new(Some(&config))
}

#[test]
fn first_frame_shows_header_menu_and_step_one() {
    let mut term = terminal(120, 40);
    let mut app = App::new(None);
    let screen = render(&mut term, &mut app);

    assert!(screen.contains("Systems Thinking"));
    assert!(screen.contains("Step 1 of 6"));
    for label in ["Introduction", "Relationships", "Self-assessment"] {
        assert!(screen.contains(label), "menu should list {label}");
    }
    assert!(screen.contains("Next"));
    assert!(!screen.contains("Previous"));
}

#[test]
fn last_step_hides_next_control() {
    let mut term = terminal(120, 40);
    let mut app = App::new(None);
    press(&mut app, KeyCode::End);
    let screen = render(&mut term, &mut app);

    assert!(screen.contains("Step 6 of 6"));
    assert!(screen.contains("Previous"));
    assert!(!screen.contains("Next ▶"));
}

#[test]
fn diagram_step_draws_nodes_and_measures_layout() {
    let mut term = terminal(120, 40);
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut term, &mut app);

    for id in ConceptId::ALL {
        assert!(screen.contains(id.display_name()), "{id} node missing");
    }
    // Drawing measured the nodes, so the seeded selection has connectors.
    assert_eq!(app.page().connectors().len(), 4);
    assert!(screen.contains("Connections"));
    assert!(screen.contains("(strong)"));
}

#[test]
fn leaving_the_diagram_clears_connectors() {
    let mut term = terminal(120, 40);
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('3'));
    render(&mut term, &mut app);
    assert!(!app.page().connectors().is_empty());

    press(&mut app, KeyCode::Right);
    render(&mut term, &mut app);
    assert!(app.page().connectors().is_empty());
    assert_eq!(app.active_node(), Some(ConceptId::Leadership));
}

#[test]
fn resize_redraws_connectors_for_new_layout() {
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('3'));

    let mut small = terminal(100, 36);
    render(&mut small, &mut app);
    let before = app.page().connectors()[0].from;

    apply_event(&mut app, Event::Resize(140, 48));
    let mut large = terminal(140, 48);
    render(&mut large, &mut app);
    let after = app.page().connectors()[0].from;
    assert_ne!(before, after);
}

#[test]
fn checklist_feedback_is_rendered() {
    let mut term = terminal(120, 40);
    let mut app = ascii_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char(' '));
    let screen = render(&mut term, &mut app);

    assert!(screen.contains("[x]"));
    assert!(screen.contains("[ ]"));
    assert!(screen.contains("25%"));
}

#[test]
fn ascii_mode_avoids_unicode_markers() {
    let mut term = terminal(120, 40);
    let mut app = ascii_app();
    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut term, &mut app);

    assert!(!screen.contains('▸'));
    assert!(!screen.contains('☐'));
    assert!(!screen.contains('╭'));
    assert!(screen.contains("+--"));
    assert!(screen.contains("<-/-> step"));
    assert!(!screen.contains('←'));
    assert!(!screen.contains('●'));
}

#[test]
fn command_prompt_and_notices() {
    let mut term = terminal(120, 40);
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "node");
    let screen = render(&mut term, &mut app);
    assert!(screen.contains("COMMAND"));
    assert!(screen.contains(":node"));
    // " COMMAND " and " :" take eleven columns before the draft.
    assert_eq!(term.backend().cursor(), (15, 39));

    press(&mut app, KeyCode::Left);
    render(&mut term, &mut app);
    assert_eq!(term.backend().cursor(), (14, 39));

    press(&mut app, KeyCode::Right);
    type_text(&mut app, " nobody");
    press(&mut app, KeyCode::Enter);
    let screen = render(&mut term, &mut app);
    assert!(screen.contains("Unknown concept: nobody"));
}

#[test]
fn narrow_terminal_still_renders() {
    let mut term = terminal(60, 20);
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut term, &mut app);
    assert!(screen.contains("Step 3 of 6"));
}

#[test]
fn step_one_frame() {
    let mut term = terminal(110, 30);
    let mut app = App::new(None);
    render(&mut term, &mut app);
    assert_snapshot!("step_one", term.backend().to_string());
}

#[test]
fn relationships_frame_in_ascii() {
    let mut term = terminal(110, 40);
    let mut app = ascii_app();
    press(&mut app, KeyCode::Char('3'));
    render(&mut term, &mut app);

    // The body wraps to three rows and none of them is cut off.
    assert!(term.backend().rows()[6].contains("leadership."));
    assert_snapshot!("relationships_ascii", term.backend().to_string());
}

#[test]
fn seeded_connectors_show_strength_on_screen() {
    let mut term = terminal(110, 40);
    let mut app = ascii_app();
    press(&mut app, KeyCode::Char('3'));
    render(&mut term, &mut app);
    let screen = term.backend();

    // Strong links to Culture and Processes, medium links down to People
    // and Results.
    let heads = [((42, 15), "<"), ((90, 15), ">"), ((49, 22), "V"), ((84, 22), "V")];
    for ((x, y), head) in heads {
        let cell = screen.cell(x, y).expect("cell on screen");
        assert_eq!(cell.contents(), head, "arrowhead at ({x}, {y})");
    }
    assert!(screen.count("#") > 0, "strong connectors use a heavy stroke");
    assert!(screen.count("*") > 0, "medium connectors use a lighter stroke");

    let strong = screen.cell(42, 15).expect("strong head");
    let medium = screen.cell(49, 22).expect("medium head");
    assert_eq!(strong.fgcolor(), Color::Rgb(127, 180, 202));
    assert_eq!(medium.fgcolor(), Color::Rgb(126, 156, 216));
}

#[test]
fn unicode_arrowheads_differ_by_strength() {
    let mut term = terminal(110, 40);
    let mut app = App::new(None);
    press(&mut app, KeyCode::Char('3'));
    render(&mut term, &mut app);
    let screen = term.backend();

    assert_eq!(screen.find_in_row(15, "◀"), vec![42]);
    assert_eq!(screen.find_in_row(15, "▶"), vec![90]);
    assert_eq!(screen.find_in_row(22, "▽"), vec![49, 84]);
    assert_eq!(screen.count("▼"), 0);
}

#[test]
fn self_assessment_feedback_frame() {
    let mut term = terminal(110, 40);
    let mut app = ascii_app();
    press(&mut app, KeyCode::End);
    for _ in 0..3 {
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char(' '));
    let screen = render(&mut term, &mut app);

    assert!(screen.contains("67% Good progress."));
    assert_eq!(app.checklist_cursor(), 3);
    assert_snapshot!("self_assessment_feedback", term.backend().to_string());
}
