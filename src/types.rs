//! Data model for the `/compile` analysis service.
//!
//! The service returns one JSON object whose top-level sections are all
//! independently optional. Absence is meaningful: panels bound to an absent
//! section keep whatever they last showed. These types only decode; nothing
//! here mutates a response after it arrives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Request body for POST /compile.
///
/// The source text is captured verbatim at submit time. Empty or malformed
/// text is forwarded as-is; correctness is the service's concern.
#[derive(Debug, Clone, Serialize)]
pub struct CompileRequest {
    pub code: String,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Response body from POST /compile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    /// Overall pipeline outcome flag.
    #[serde(default)]
    pub ok: Option<bool>,

    /// Preferred token listing: an array of display strings, or already a
    /// display string, or any other shape (pretty-printed as a fallback).
    #[serde(default)]
    pub lex: Option<Value>,

    /// Raw token structures, used only when `lex` is absent.
    #[serde(default)]
    pub tokens: Option<Value>,

    /// Centered preformatted parse-tree text (highest precedence).
    #[serde(default)]
    pub parse_text_centered: Option<String>,

    /// Vertical preformatted parse-tree text.
    #[serde(default)]
    pub parse_text: Option<String>,

    /// Structured AST, pretty-printed when no preformatted text exists.
    #[serde(default)]
    pub ast: Option<Value>,

    /// Evaluation outcome, present when the pipeline ran to completion.
    #[serde(default)]
    pub result: Option<Value>,

    /// Semantic analysis report.
    #[serde(default)]
    pub semantic: Option<SemanticReport>,

    /// Per-stage validation verdicts.
    #[serde(default)]
    pub validation: Option<ValidationReport>,

    /// Catch-all error envelope fields from the service.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub trace: Option<String>,
}

/// Semantic analysis section: verdict, declared symbols, and error list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SemanticReport {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    /// Symbol table keyed by name. Only the keys are displayed.
    #[serde(default)]
    pub symbols: serde_json::Map<String, Value>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One pipeline stage verdict.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageReport {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
}

/// Validation verdicts for the three fixed pipeline stages.
///
/// Stages default to a failed/empty report so a partially built validation
/// object (the service's own error paths can omit later stages) still
/// renders all three lines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationReport {
    #[serde(default)]
    pub lexical: StageReport,
    #[serde(default)]
    pub syntactic: StageReport,
    #[serde(default)]
    pub semantic: StageReport,
}
