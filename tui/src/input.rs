//! Input handling for the lesson TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use lesson_engine::{App, InputMode, NavKey, StepWidget, step_content};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SCROLL_PAGE: i32 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame
/// loop through a bounded channel. Only one pump exists per session.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Public so tests can drive the app without a
/// real terminal.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.input_mode() {
                InputMode::Normal => handle_normal_mode(app, key),
                InputMode::Command => handle_command_mode(app, key),
            }
        }
        Event::Resize(width, height) => {
            debug!(width, height, "Terminal resized");
            app.handle_resize();
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let widget = step_content(app.current_step()).widget;

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(':') => app.enter_command_mode(),
        KeyCode::Left => {
            app.handle_nav_key(NavKey::Left);
        }
        KeyCode::Right => {
            app.handle_nav_key(NavKey::Right);
        }
        KeyCode::Home => {
            app.handle_nav_key(NavKey::Home);
        }
        KeyCode::End => {
            app.handle_nav_key(NavKey::End);
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.handle_nav_key(NavKey::Char(c));
        }
        KeyCode::Tab if widget == StepWidget::Diagram => app.focus_next_node(),
        KeyCode::BackTab if widget == StepWidget::Diagram => app.focus_previous_node(),
        KeyCode::Enter if widget == StepWidget::Diagram => {
            app.select_focused_node();
        }
        KeyCode::Char(' ') | KeyCode::Enter if matches!(widget, StepWidget::Checklist(_)) => {
            app.toggle_checklist_item();
        }
        KeyCode::Up | KeyCode::Char('k') if matches!(widget, StepWidget::Checklist(_)) => {
            app.move_checklist_cursor(-1);
        }
        KeyCode::Down | KeyCode::Char('j') if matches!(widget, StepWidget::Checklist(_)) => {
            app.move_checklist_cursor(1);
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_content(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_content(1),
        KeyCode::PageUp => app.scroll_content(-SCROLL_PAGE),
        KeyCode::PageDown => app.scroll_content(SCROLL_PAGE),
        KeyCode::Esc => {
            app.clear_hover();
            app.clear_notice();
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_command(),
        KeyCode::Enter => app.submit_command(),
        // Backspace: exit command mode if empty, otherwise delete char
        KeyCode::Backspace => {
            if app.command_draft().text().is_empty() {
                app.cancel_command();
            } else {
                app.command_draft_mut().delete_char();
            }
        }
        KeyCode::Left => app.command_draft_mut().move_cursor_left(),
        KeyCode::Right => app.command_draft_mut().move_cursor_right(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_draft_mut().enter_char(c);
        }
        _ => {}
    }
}
