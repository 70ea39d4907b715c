//! Core engine for the lesson: controllers, page model and the `App` that
//! owns them.
//!
//! This crate contains no terminal dependencies. The TUI reads the
//! [`PageModel`] and calls `App` methods in response to input.

use std::time::{Duration, Instant};

pub use lesson_types::{
    ChecklistGroup, ConceptId, FeedbackTier, STEP_COUNT, Score, StepContent, StepError,
    StepIndex, StepWidget, Strength, step_content,
};
pub use lesson_types::ui::{DraftInput, InputMode, StatusNotice, UiOptions, ViewState};

mod assessment;
mod commands;
mod config;
mod diagram;
mod highlight;
mod page;
mod step;
mod surface;

pub use assessment::AssessmentBoard;
pub use commands::{CommandSpec, command_help_summary, command_specs};
pub use config::{
    ASCII_ENV_VAR, AppConfig, ConfigError, DiagramConfig, LessonConfig, SeedNode, config_path,
    resolve_ui_options,
};
pub use diagram::DiagramController;
pub use highlight::{HighlightAction, HighlightSchedule, HighlightTiming};
pub use page::PageModel;
pub use step::{NavKey, StepCommand, StepController};
pub use surface::{
    Connector, Control, DetailEntry, DetailPanel, Point, Region, RenderSurface, SurfaceError,
    SurfaceResult,
};

/// Owner of every controller and of the page they render into.
///
/// The step and diagram controllers never see each other; `App` routes
/// input to one or the other.
#[derive(Debug)]
pub struct App {
    steps: StepController,
    diagram: DiagramController,
    assessment: AssessmentBoard,
    page: PageModel,
    view: ViewState,
    input_mode: InputMode,
    command: DraftInput,
    /// Set on terminal resize; consumed by the next layout update.
    layout_dirty: bool,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    /// Build the app in its startup state: step 1 (or the configured start
    /// step) rendered, and the diagram seeded with one selection.
    #[must_use]
    pub fn new(config: Option<&LessonConfig>) -> Self {
        let ui_options = resolve_ui_options(config);
        let timing = config
            .map(LessonConfig::highlight_timing)
            .unwrap_or_default();
        let start = config.map_or(StepIndex::FIRST, LessonConfig::start_step);
        let seed = config.map_or(SeedNode::Node(ConceptId::Leadership), LessonConfig::seed_node);

        let mut app = Self {
            steps: StepController::new(),
            diagram: DiagramController::new(timing, !ui_options.reduced_motion),
            assessment: AssessmentBoard::default(),
            page: PageModel::new(),
            view: ViewState::new(ui_options),
            input_mode: InputMode::Normal,
            command: DraftInput::default(),
            layout_dirty: false,
            should_quit: false,
        };

        app.steps.show(start, &mut app.page);
        if let SeedNode::Node(id) = seed {
            app.diagram.select(id, &mut app.page);
            app.view.focus_index = id as usize;
        }
        tracing::info!(step = %app.steps.current(), ?seed, "Lesson started");
        app
    }

    #[must_use]
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn notice(&self) -> Option<&StatusNotice> {
        self.view.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.view.notice = None;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Frame timing
    // ------------------------------------------------------------------

    /// Advance scheduled effects by the wall time since the last frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance scheduled effects by an explicit amount.
    pub fn advance(&mut self, delta: Duration) {
        self.diagram.tick(delta, &mut self.page);
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    #[must_use]
    pub fn current_step(&self) -> StepIndex {
        self.steps.current()
    }

    #[must_use]
    pub fn has_next_step(&self) -> bool {
        self.steps.has_next()
    }

    #[must_use]
    pub fn has_previous_step(&self) -> bool {
        self.steps.has_previous()
    }

    /// Jump to step `n`. Out-of-range requests leave everything as it was
    /// and surface a warning notice.
    pub fn go_to_step(&mut self, n: i64) -> Result<StepIndex, StepError> {
        let before = self.steps.current();
        match self.steps.go_to_step(n, &mut self.page) {
            Ok(step) => {
                self.after_step_change(before);
                Ok(step)
            }
            Err(err) => {
                self.view.notice = Some(StatusNotice::Warning(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn next_step(&mut self) -> bool {
        self.navigate(StepCommand::Next)
    }

    pub fn previous_step(&mut self) -> bool {
        self.navigate(StepCommand::Previous)
    }

    /// Route a navigation key. Returns whether the step changed.
    pub fn handle_nav_key(&mut self, key: NavKey) -> bool {
        StepCommand::from_key(key).is_some_and(|command| self.navigate(command))
    }

    fn navigate(&mut self, command: StepCommand) -> bool {
        let before = self.steps.current();
        let moved = self.steps.apply(command, &mut self.page);
        if moved {
            self.after_step_change(before);
        }
        moved
    }

    fn after_step_change(&mut self, before: StepIndex) {
        if self.steps.current() != before {
            self.view.checklist_cursor = 0;
        }
    }

    // ------------------------------------------------------------------
    // Diagram
    // ------------------------------------------------------------------

    #[must_use]
    pub fn active_node(&self) -> Option<ConceptId> {
        self.diagram.active()
    }

    /// Select a node by identifier. Unknown identifiers change nothing.
    pub fn select_node(&mut self, raw: &str) -> Option<ConceptId> {
        let selected = self.diagram.select_node(raw, &mut self.page);
        if let Some(id) = selected {
            self.view.focus_index = id as usize;
        }
        selected
    }

    /// Node holding keyboard focus in the diagram.
    #[must_use]
    pub fn focused_node(&self) -> ConceptId {
        ConceptId::ALL[self.view.focus_index % ConceptId::COUNT]
    }

    pub fn focus_next_node(&mut self) {
        self.view.focus_index = (self.view.focus_index + 1) % ConceptId::COUNT;
        self.diagram.hover(Some(self.focused_node()), &mut self.page);
    }

    pub fn focus_previous_node(&mut self) {
        self.view.focus_index = (self.view.focus_index + ConceptId::COUNT - 1) % ConceptId::COUNT;
        self.diagram.hover(Some(self.focused_node()), &mut self.page);
    }

    pub fn select_focused_node(&mut self) -> ConceptId {
        let id = self.focused_node();
        self.diagram.select(id, &mut self.page);
        id
    }

    pub fn clear_hover(&mut self) {
        self.diagram.hover(None, &mut self.page);
    }

    /// Store node centres measured from the live layout and redraw
    /// connectors when they moved or the terminal was resized.
    pub fn update_diagram_layout(&mut self, centers: impl IntoIterator<Item = (ConceptId, Point)>) {
        let moved = self.page.set_node_centers(centers);
        if moved || self.layout_dirty {
            self.diagram.handle_resize(&mut self.page);
        }
        self.layout_dirty = false;
    }

    /// Terminal size changed; connectors are redrawn once the next layout
    /// has been measured.
    pub fn handle_resize(&mut self) {
        self.layout_dirty = true;
    }

    // ------------------------------------------------------------------
    // Checklists
    // ------------------------------------------------------------------

    /// Checklist shown on the current step, if any.
    #[must_use]
    pub fn current_checklist(&self) -> Option<&'static ChecklistGroup> {
        match step_content(self.steps.current()).widget {
            StepWidget::Checklist(group) => Some(group),
            StepWidget::None | StepWidget::Diagram => None,
        }
    }

    #[must_use]
    pub fn checklist_states(&self, group: &str) -> Option<&[bool]> {
        self.assessment.states(group)
    }

    #[must_use]
    pub fn checklist_cursor(&self) -> usize {
        self.view.checklist_cursor
    }

    pub fn move_checklist_cursor(&mut self, delta: isize) {
        let Some(group) = self.current_checklist() else {
            return;
        };
        let last = group.items.len().saturating_sub(1);
        self.view.checklist_cursor = self
            .view
            .checklist_cursor
            .saturating_add_signed(delta)
            .min(last);
    }

    /// Toggle the item under the cursor. Feedback is recomputed.
    pub fn toggle_checklist_item(&mut self) -> Option<bool> {
        let group = self.current_checklist()?;
        self.assessment
            .toggle(group.name, self.view.checklist_cursor, &mut self.page)
    }

    /// Score a checklist group and show its feedback.
    pub fn check_progress(&mut self, group: &str) -> Option<Score> {
        self.assessment.check_progress(group, &mut self.page)
    }

    // ------------------------------------------------------------------
    // Content scroll
    // ------------------------------------------------------------------

    pub fn scroll_content(&mut self, delta: i32) {
        self.page.scroll_content(delta);
    }

    pub fn clamp_content_scroll(&mut self, max: u16) {
        self.page.clamp_content_scroll(max);
    }

    // ------------------------------------------------------------------
    // Command prompt
    // ------------------------------------------------------------------

    pub fn enter_command_mode(&mut self) {
        self.command.clear();
        self.input_mode = InputMode::Command;
    }

    pub fn cancel_command(&mut self) {
        self.command.clear();
        self.input_mode = InputMode::Normal;
    }

    #[must_use]
    pub fn command_draft(&self) -> &DraftInput {
        &self.command
    }

    pub fn command_draft_mut(&mut self) -> &mut DraftInput {
        &mut self.command
    }

    /// Run the typed command and return to normal mode.
    pub fn submit_command(&mut self) {
        let raw = self.command.take_text();
        self.input_mode = InputMode::Normal;
        self.process_command(&raw);
    }
}
