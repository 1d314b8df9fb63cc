//! Presentation surface for the analysis workbench.
//!
//! [`Screen`] is the single mutable display model: the source input buffer,
//! the trigger/input enablement flag, the busy indicator, a transient status
//! message, and the four output panels. All mutation happens from the
//! sequential event loop, so no locking is needed here; the controller and
//! copy helper only ever see `&mut Screen` / `&Screen`.

use crate::theme::{self, ThemeVar};
use crossterm::style::Stylize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Layout / labels
// ---------------------------------------------------------------------------

pub const PANEL_RULE_WIDTH: usize = 60;
pub const GLYPH_BUSY: &str = "◐";
pub const GLYPH_BUSY_PLAIN: &str = "[~]";
pub const STATUS_COMPILING: &str = "compiling...";

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// Identifier of one output panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Panel {
    Tokens,
    Tree,
    Semantic,
    Validation,
}

impl Panel {
    /// All panels in display order.
    pub fn all() -> [Panel; 4] {
        [Self::Tokens, Self::Tree, Self::Semantic, Self::Validation]
    }

    /// Stable identifier used by copy controls and commands.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::Tree => "tree",
            Self::Semantic => "semantic",
            Self::Validation => "validation",
        }
    }

    /// Parse a panel identifier from a command argument.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.id() == id)
    }

    /// Human-facing panel heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Tokens => "Tokens",
            Self::Tree => "Parse tree",
            Self::Semantic => "Semantic",
            Self::Validation => "Validation",
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// Mutable display state for the whole client.
#[derive(Debug)]
pub struct Screen {
    input: String,
    input_enabled: bool,
    busy: bool,
    status: String,
    panels: BTreeMap<Panel, String>,
    color: bool,
}

impl Screen {
    pub fn new(color: bool) -> Self {
        Self {
            input: String::new(),
            input_enabled: true,
            busy: false,
            status: String::new(),
            panels: BTreeMap::new(),
            color,
        }
    }

    /// Current source buffer, exactly as typed.
    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// Append one line to the source buffer. Ignored while input is locked.
    pub fn push_input_line(&mut self, line: &str) {
        if !self.input_enabled {
            return;
        }
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Lock the surface for an in-flight request: disable input and the
    /// trigger, show the busy indicator, set the transient status message.
    pub fn begin_submission(&mut self, status: &str) {
        self.input_enabled = false;
        self.busy = true;
        self.status = status.to_string();
    }

    /// Unlock after a settled request: hide the busy indicator, clear the
    /// status message, re-enable input and the trigger.
    pub fn finish_submission(&mut self) {
        self.busy = false;
        self.status.clear();
        self.input_enabled = true;
    }

    /// Replace one panel's rendered text.
    pub fn set_panel(&mut self, panel: Panel, text: impl Into<String>) {
        self.panels.insert(panel, text.into());
    }

    /// Current rendered text of a panel (empty before its first render).
    pub fn panel_text(&self, panel: Panel) -> &str {
        self.panels.get(&panel).map(String::as_str).unwrap_or("")
    }

    /// Render the full surface (status line plus all four panels) to text.
    pub fn paint(&self) -> String {
        let mut out = String::new();
        if self.busy || !self.status.is_empty() {
            out.push_str(&self.status_line());
            out.push('\n');
        }
        for panel in Panel::all() {
            out.push_str(&self.panel_heading(panel));
            out.push('\n');
            let text = self.panel_text(panel);
            if !text.is_empty() {
                out.push_str(text);
                if !text.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
        out
    }

    fn status_line(&self) -> String {
        let glyph = if self.busy {
            if self.color {
                GLYPH_BUSY
            } else {
                GLYPH_BUSY_PLAIN
            }
        } else {
            ""
        };
        let line = if glyph.is_empty() {
            self.status.clone()
        } else {
            format!("{glyph} {}", self.status)
        };
        if self.color {
            line.with(theme::color(ThemeVar::Muted)).to_string()
        } else {
            line
        }
    }

    fn panel_heading(&self, panel: Panel) -> String {
        let title = panel.title();
        let rule_len = PANEL_RULE_WIDTH.saturating_sub(title.len() + 4);
        let rule: String = "─".repeat(rule_len);
        if self.color {
            format!(
                "{} {} {}",
                "──".with(theme::color(ThemeVar::Border)),
                title.with(theme::color(ThemeVar::Accent)),
                rule.with(theme::color(ThemeVar::Border)),
            )
        } else {
            format!("── {title} {rule}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_ids_round_trip() {
        for panel in Panel::all() {
            assert_eq!(Panel::from_id(panel.id()), Some(panel));
        }
        assert_eq!(Panel::from_id("output"), None);
    }

    #[test]
    fn input_lines_join_with_newlines_verbatim() {
        let mut screen = Screen::new(false);
        screen.push_input_line("x = 1;");
        screen.push_input_line("  y = x + 2;  ");
        // No trimming: surrounding whitespace is preserved.
        assert_eq!(screen.input_text(), "x = 1;\n  y = x + 2;  ");
    }

    #[test]
    fn locked_input_rejects_new_lines() {
        let mut screen = Screen::new(false);
        screen.push_input_line("a = 1;");
        screen.begin_submission(STATUS_COMPILING);
        screen.push_input_line("b = 2;");
        assert_eq!(screen.input_text(), "a = 1;");
    }

    // Busy/status/enablement flip together at submission boundaries.
    #[test]
    fn submission_lock_and_unlock() {
        let mut screen = Screen::new(false);
        screen.begin_submission(STATUS_COMPILING);
        assert!(screen.busy());
        assert!(!screen.input_enabled());
        assert_eq!(screen.status(), STATUS_COMPILING);

        screen.finish_submission();
        assert!(!screen.busy());
        assert!(screen.input_enabled());
        assert!(screen.status().is_empty());
    }

    #[test]
    fn unset_panel_reads_empty() {
        let screen = Screen::new(false);
        assert_eq!(screen.panel_text(Panel::Semantic), "");
    }

    #[test]
    fn paint_plain_contains_headings_and_content() {
        let mut screen = Screen::new(false);
        screen.set_panel(Panel::Tokens, "ID\n+\nNUM");
        let out = screen.paint();
        assert!(out.contains("── Tokens "));
        assert!(out.contains("ID\n+\nNUM\n"));
        assert!(out.contains("── Validation "));
    }

    #[test]
    fn paint_plain_busy_shows_indicator_and_status() {
        let mut screen = Screen::new(false);
        screen.begin_submission(STATUS_COMPILING);
        let out = screen.paint();
        assert!(out.starts_with(&format!("{GLYPH_BUSY_PLAIN} {STATUS_COMPILING}\n")));
    }
}
