//! View state for rendering.
//!
//! Groups what the TUI needs to draw but the controllers never read.

use std::time::Instant;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip connector highlight effects; connectors are drawn settled.
    pub reduced_motion: bool,
}

/// One-line message shown in the status bar until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusNotice {
    Info(String),
    Warning(String),
}

impl StatusNotice {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            StatusNotice::Info(text) | StatusNotice::Warning(text) => text,
        }
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
    pub notice: Option<StatusNotice>,
    /// Node that has keyboard focus in the diagram (hover cue only).
    pub focus_index: usize,
    /// Highlighted row of the visible checklist.
    pub checklist_cursor: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
            notice: None,
            focus_index: 0,
            checklist_cursor: 0,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
