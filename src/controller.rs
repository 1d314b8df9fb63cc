//! Request lifecycle controller for one analysis cycle.
//!
//! The state machine is `Idle -> Submitting -> settle -> Idle`. A trigger
//! while `Submitting` is a no-op, so at most one request is ever in flight;
//! the locked input control is the primary guard and this check is the
//! defensive one. Cleanup (busy off, status cleared, input re-enabled) runs
//! from a drop guard wrapped around the request and render steps, so it
//! fires exactly once on every settle path, including a panic while
//! rendering.

use crate::api::CompileBackend;
use crate::panels::{Panel, Screen, STATUS_COMPILING};
use crate::render;
use crate::types::{AnalysisResponse, CompileRequest};
use tracing::{debug, warn};

/// Interaction state of the client surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    /// Accepting input; the trigger is armed.
    Idle,
    /// A request is in flight; input and trigger are locked.
    Submitting,
}

/// Owns one analysis request from trigger to rendered result.
pub struct AnalysisController<B> {
    backend: B,
    state: UiState,
}

/// Settles an in-flight cycle when dropped: the surface unlocks and the
/// state machine folds back to `Idle`, regardless of how the protected
/// scope exits.
struct SettleGuard<'a> {
    screen: &'a mut Screen,
    state: &'a mut UiState,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.screen.finish_submission();
        *self.state = UiState::Idle;
    }
}

impl<B: CompileBackend> AnalysisController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Run one full request cycle against the current source buffer.
    ///
    /// Returns the decoded response when the cycle rendered a result, so the
    /// caller can surface summary data (for example the evaluation result).
    /// A refused trigger or any failure returns `None`; failures are already
    /// surfaced in the tokens panel by the time this returns.
    pub async fn submit(&mut self, screen: &mut Screen) -> Option<AnalysisResponse> {
        if !self.begin() {
            return None;
        }

        // Verbatim capture: no trimming, no validation. Empty or malformed
        // source is the service's concern.
        let request = CompileRequest {
            code: screen.input_text().to_string(),
        };
        screen.begin_submission(STATUS_COMPILING);

        let mut guard = SettleGuard {
            screen,
            state: &mut self.state,
        };
        match self.backend.compile(&request).await {
            Ok(response) => {
                render::apply(&response, guard.screen);
                Some(response)
            }
            Err(err) => {
                warn!(error = %err, "analysis request failed");
                // Failures land in the tokens panel only; the other panels
                // keep their last rendered (possibly stale) content.
                guard.screen.set_panel(Panel::Tokens, format!("Error: {err}"));
                None
            }
        }
    }

    /// Re-entrancy guard: arm the cycle only from `Idle`.
    fn begin(&mut self) -> bool {
        if self.state != UiState::Idle {
            debug!("trigger ignored: request already in flight");
            return false;
        }
        self.state = UiState::Submitting;
        true
    }
}
