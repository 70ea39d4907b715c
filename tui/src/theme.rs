//! Color theme and glyphs for the lesson TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::{
    style::{Color, Modifier, Style},
    symbols::border,
};

use lesson_types::{Strength, ui::UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const WARNING: Color = YELLOW;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub warning: Color,
    pub peach: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            warning: colors::WARNING,
            peach: colors::PEACH,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            blue: colors::BLUE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            warning: Color::Yellow,
            peach: Color::Yellow,
            green: Color::Green,
            yellow: Color::Yellow,
            blue: Color::Blue,
        }
    }

    /// Connector color by relationship strength.
    #[must_use]
    pub fn strength(&self, strength: Strength) -> Color {
        match strength {
            Strength::Strong => self.accent,
            Strength::Medium => self.blue,
            Strength::Weak => self.text_muted,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Box-drawing set for ASCII-only terminals.
const ASCII_BORDER: border::Set<'static> = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Direction an arrowhead points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Right,
    Left,
    Up,
    Down,
}

/// ASCII/Unicode glyphs for markers, checkboxes, borders and connectors.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub separator: &'static str,
    /// Key hint for stepping with the arrow keys.
    pub step_keys: &'static str,
    pub border: border::Set<'static>,
    /// Connector stroke per strength: strong, medium, weak.
    pub strokes: [char; 3],
    /// Arrowheads per strength (strong, medium, weak), each pointing right,
    /// left, up, down.
    pub arrows: [[char; 4]; 3],
    pub ascii: bool,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            checked: "[x]",
            unchecked: "[ ]",
            previous: "<",
            next: ">",
            separator: "|",
            step_keys: "<-/->",
            border: ASCII_BORDER,
            strokes: ['#', '*', '.'],
            arrows: [
                ['>', '<', '^', 'v'],
                ['}', '{', 'A', 'V'],
                [')', '(', '\'', ','],
            ],
            ascii: true,
        }
    } else {
        Glyphs {
            selected: "▸",
            checked: "☑",
            unchecked: "☐",
            previous: "◀",
            next: "▶",
            separator: "│",
            step_keys: "←/→",
            border: border::ROUNDED,
            strokes: ['●', '•', '·'],
            arrows: [
                ['▶', '◀', '▲', '▼'],
                ['▷', '◁', '△', '▽'],
                ['›', '‹', '˄', '˅'],
            ],
            ascii: false,
        }
    }
}

impl Glyphs {
    fn strength_slot(strength: Strength) -> usize {
        match strength {
            Strength::Strong => 0,
            Strength::Medium => 1,
            Strength::Weak => 2,
        }
    }

    #[must_use]
    pub fn stroke(&self, strength: Strength) -> char {
        self.strokes[Self::strength_slot(strength)]
    }

    #[must_use]
    pub fn arrow(&self, strength: Strength, heading: Heading) -> char {
        let [right, left, up, down] = self.arrows[Self::strength_slot(strength)];
        match heading {
            Heading::Right => right,
            Heading::Left => left,
            Heading::Up => up,
            Heading::Down => down,
        }
    }

    /// Connection icons are Unicode; ASCII mode shows a plain marker instead.
    #[must_use]
    pub fn icon<'a>(&self, icon: &'a str) -> &'a str {
        if self.ascii { "-" } else { icon }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_command(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.yellow)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn active_node(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hovered_node(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::UNDERLINED)
    }
}
