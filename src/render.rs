//! Projection of an [`AnalysisResponse`] into panel text.
//!
//! Everything here is a pure function over the decoded response; the only
//! writes go through [`Screen::set_panel`]. Rendering is total over the
//! documented optional fields: every combination of present/absent sections
//! has a defined output. Sections that are absent leave their panel's prior
//! content untouched.

use crate::panels::{Panel, Screen};
use crate::types::{AnalysisResponse, SemanticReport, ValidationReport};
use serde_json::Value;

pub const BADGE_PASS: &str = "[OK]";
pub const BADGE_FAIL: &str = "[FAIL]";
pub const ERRORS_NONE_PLACEHOLDER: &str = "  (none)";

/// Pass/fail badge for a validation stage. Carries no state beyond the bit.
pub fn badge(ok: bool) -> &'static str {
    if ok {
        BADGE_PASS
    } else {
        BADGE_FAIL
    }
}

/// Write every renderable section of `response` into the screen.
///
/// The tokens and tree panels are always rewritten (their fallbacks render
/// an empty structure). The semantic and validation panels are rewritten
/// only when their section is present.
pub fn apply(response: &AnalysisResponse, screen: &mut Screen) {
    screen.set_panel(Panel::Tokens, tokens_text(response));
    screen.set_panel(Panel::Tree, tree_text(response));
    if let Some(semantic) = &response.semantic {
        screen.set_panel(Panel::Semantic, semantic_text(semantic));
    }
    if let Some(validation) = &response.validation {
        screen.set_panel(Panel::Validation, validation_text(validation));
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Token panel text: `lex` preferred (array joined by newlines, string kept
/// verbatim, anything else pretty-printed), otherwise pretty `tokens`.
pub fn tokens_text(response: &AnalysisResponse) -> String {
    match &response.lex {
        Some(Value::Array(items)) => items
            .iter()
            .map(display_item)
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::String(text)) => text.clone(),
        Some(other) => pretty(other),
        None => match &response.tokens {
            Some(tokens) => pretty(tokens),
            None => pretty(&Value::Object(serde_json::Map::new())),
        },
    }
}

fn display_item(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parse tree
// ---------------------------------------------------------------------------

/// Resolved source for the tree panel, in strict precedence order.
///
/// Exactly one variant is chosen per response; sources are never merged.
#[derive(Debug, PartialEq, Eq)]
pub enum TreeSource<'a> {
    Centered(&'a str),
    Vertical(&'a str),
    Ast(&'a Value),
    Empty,
}

impl<'a> TreeSource<'a> {
    /// Pick the highest-precedence tree representation in the response.
    pub fn resolve(response: &'a AnalysisResponse) -> Self {
        if let Some(text) = response.parse_text_centered.as_deref() {
            return Self::Centered(text);
        }
        if let Some(text) = response.parse_text.as_deref() {
            return Self::Vertical(text);
        }
        if let Some(ast) = &response.ast {
            return Self::Ast(ast);
        }
        Self::Empty
    }

    fn render(&self) -> String {
        match self {
            Self::Centered(text) | Self::Vertical(text) => (*text).to_string(),
            Self::Ast(value) => pretty(value),
            Self::Empty => pretty(&Value::Object(serde_json::Map::new())),
        }
    }
}

/// Tree panel text, following the documented precedence order.
pub fn tree_text(response: &AnalysisResponse) -> String {
    TreeSource::resolve(response).render()
}

// ---------------------------------------------------------------------------
// Semantic report
// ---------------------------------------------------------------------------

/// Semantic panel text: verdict line, symbol keys, error list.
pub fn semantic_text(report: &SemanticReport) -> String {
    let mut out = String::new();
    let verdict = if report.ok { "OK" } else { "FAIL" };
    out.push_str(&format!("Verification: {verdict} - {}\n", report.message));

    out.push_str("\nSymbols:\n");
    for name in report.symbols.keys() {
        out.push_str(&format!("  {name}\n"));
    }

    out.push_str("\nErrors:\n");
    if report.errors.is_empty() {
        out.push_str(ERRORS_NONE_PLACEHOLDER);
        out.push('\n');
    } else {
        for error in &report.errors {
            out.push_str(&format!("  - {error}\n"));
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Validation badges
// ---------------------------------------------------------------------------

/// Validation panel text: one badge line per stage, fixed stage order.
pub fn validation_text(report: &ValidationReport) -> String {
    let stages = [
        ("Lexical", &report.lexical),
        ("Syntactic", &report.syntactic),
        ("Semantic", &report.semantic),
    ];
    stages
        .iter()
        .map(|(label, stage)| format!("{label}: {} - {}", badge(stage.ok), stage.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
