//! Command processing for the `:` prompt.
//!
//! The prompt is the manual entry point to the controllers: anything a key
//! binding can do can also be typed here by name.

use lesson_types::ui::StatusNotice;

use crate::App;

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub palette_label: &'static str,
    pub description: &'static str,
}

const COMMAND_SPECS: &[CommandSpec] = &[
    CommandSpec {
        palette_label: "step <n>",
        description: "Go to step n",
    },
    CommandSpec {
        palette_label: "n, next",
        description: "Next step",
    },
    CommandSpec {
        palette_label: "p, prev",
        description: "Previous step",
    },
    CommandSpec {
        palette_label: "node <name>",
        description: "Select a concept in the diagram",
    },
    CommandSpec {
        palette_label: "check <group>",
        description: "Score a checklist group",
    },
    CommandSpec {
        palette_label: "q, quit",
        description: "Exit the lesson",
    },
    CommandSpec {
        palette_label: "help",
        description: "Show available commands",
    },
];

#[must_use]
pub fn command_specs() -> &'static [CommandSpec] {
    COMMAND_SPECS
}

#[must_use]
pub fn command_help_summary() -> String {
    let labels: Vec<&str> = COMMAND_SPECS.iter().map(|spec| spec.palette_label).collect();
    format!("Commands: {}", labels.join(" | "))
}

/// Parsed command with typed arguments.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command<'a> {
    Step(Option<&'a str>),
    Next,
    Previous,
    Node(Option<&'a str>),
    Check(Option<&'a str>),
    Quit,
    Help,
    Unknown(&'a str),
    Empty,
}

impl<'a> Command<'a> {
    /// Parse a raw command string into a typed Command.
    pub(crate) fn parse(raw: &'a str) -> Self {
        let raw = raw.trim().trim_start_matches(':');
        let parts: Vec<&str> = raw.split_whitespace().collect();

        match parts.first().copied() {
            Some("step" | "s") => Command::Step(parts.get(1).copied()),
            Some("next" | "n") => Command::Next,
            Some("prev" | "previous" | "p") => Command::Previous,
            Some("node") => Command::Node(parts.get(1).copied()),
            Some("check") => Command::Check(parts.get(1).copied()),
            Some("q" | "quit") => Command::Quit,
            Some("help" | "?") => Command::Help,
            Some(cmd) => Command::Unknown(cmd),
            None => Command::Empty,
        }
    }
}

impl App {
    /// Run one line typed at the `:` prompt. Problems become status notices.
    pub(crate) fn process_command(&mut self, raw: &str) {
        match Command::parse(raw) {
            Command::Quit => self.request_quit(),
            Command::Next => {
                if !self.next_step() {
                    self.warn("Already at the last step");
                }
            }
            Command::Previous => {
                if !self.previous_step() {
                    self.warn("Already at the first step");
                }
            }
            Command::Step(Some(arg)) => match arg.parse::<i64>() {
                // go_to_step sets its own notice on rejection.
                Ok(n) => {
                    if let Ok(step) = self.go_to_step(n) {
                        self.info(format!("Step {step}"));
                    }
                }
                Err(_) => self.warn(format!("Not a step number: {arg}")),
            },
            Command::Step(None) => self.warn("Usage: step <n>"),
            Command::Node(Some(arg)) => match self.select_node(arg) {
                Some(id) => self.info(format!("Selected {}", id.display_name())),
                None => self.warn(format!("Unknown concept: {arg}")),
            },
            Command::Node(None) => self.warn("Usage: node <name>"),
            Command::Check(Some(group)) => match self.check_progress(group) {
                Some(score) => self.info(score.feedback()),
                None => self.warn(format!("Nothing to score in: {group}")),
            },
            Command::Check(None) => self.warn("Usage: check <group>"),
            Command::Help => self.info(command_help_summary()),
            Command::Unknown(cmd) => self.warn(format!("Unknown command: {cmd}")),
            Command::Empty => {}
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.view.notice = Some(StatusNotice::Info(text.into()));
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.view.notice = Some(StatusNotice::Warning(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, command_help_summary, command_specs};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("step 4"), Command::Step(Some("4")));
        assert_eq!(Command::parse(":step"), Command::Step(None));
        assert_eq!(Command::parse("  node culture "), Command::Node(Some("culture")));
        assert_eq!(
            Command::parse("check reflection"),
            Command::Check(Some("reflection"))
        );
        assert_eq!(Command::parse("n"), Command::Next);
        assert_eq!(Command::parse("prev"), Command::Previous);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("?"), Command::Help);
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(Command::parse("dance"), Command::Unknown("dance"));
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse(":"), Command::Empty);
    }

    #[test]
    fn help_lists_every_command() {
        let summary = command_help_summary();
        for spec in command_specs() {
            assert!(summary.contains(spec.palette_label));
        }
    }
}
