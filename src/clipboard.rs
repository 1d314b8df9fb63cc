//! Per-panel clipboard copy with transient control labels.
//!
//! Copy goes over the terminal's OSC 52 escape sequence (base64 payload), so
//! it works across SSH without talking to a display server. Each activation
//! relabels its control ("Copied" or "Error") and independently schedules a
//! revert to the resting label after a fixed delay; overlapping activations
//! are last-write-wins on the label and every timer is harmless.

use crate::panels::{Panel, Screen};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

pub const LABEL_COPY: &str = "Copy";
pub const LABEL_COPIED: &str = "Copied";
pub const LABEL_COPY_FAILED: &str = "Error";
/// How long a transient label stays before reverting.
pub const LABEL_REVERT_DELAY: Duration = Duration::from_millis(1200);

/// OSC 52 sequence that places `text` on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x1b\\", BASE64.encode(text))
}

/// Destination for copied text.
pub trait ClipboardSink {
    fn write_clipboard(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard sink that emits OSC 52 to the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl ClipboardSink for TerminalClipboard {
    fn write_clipboard(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()
    }
}

/// One copy control bound to a specific output panel.
///
/// Stateless across activations except for the displayed label; any number
/// of controls can coexist, one per panel.
#[derive(Debug, Clone)]
pub struct CopyControl {
    target: Panel,
    label: Arc<Mutex<&'static str>>,
}

impl CopyControl {
    pub fn new(target: Panel) -> Self {
        Self {
            target,
            label: Arc::new(Mutex::new(LABEL_COPY)),
        }
    }

    pub fn target(&self) -> Panel {
        self.target
    }

    /// Currently displayed control label.
    pub fn label(&self) -> &'static str {
        self.label.lock().map(|label| *label).unwrap_or(LABEL_COPY)
    }

    /// Copy the target panel's current text and flash the outcome label.
    ///
    /// The revert timer is fire-and-forget: each activation schedules its
    /// own, and all of them restore the same resting label.
    pub fn activate(&self, screen: &Screen, sink: &mut dyn ClipboardSink) {
        let text = screen.panel_text(self.target);
        let outcome = match sink.write_clipboard(text) {
            Ok(()) => LABEL_COPIED,
            Err(err) => {
                debug!(panel = self.target.id(), error = %err, "clipboard write failed");
                LABEL_COPY_FAILED
            }
        };
        self.set_label(outcome);

        let label = Arc::clone(&self.label);
        tokio::spawn(async move {
            tokio::time::sleep(LABEL_REVERT_DELAY).await;
            if let Ok(mut current) = label.lock() {
                *current = LABEL_COPY;
            }
        });
    }

    fn set_label(&self, value: &'static str) {
        if let Ok(mut current) = self.label.lock() {
            *current = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records writes, optionally failing every attempt.
    #[derive(Default)]
    struct RecordingSink {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for RecordingSink {
        fn write_clipboard(&mut self, text: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    fn screen_with_panel(panel: Panel, text: &str) -> Screen {
        let mut screen = Screen::new(false);
        screen.set_panel(panel, text);
        screen
    }

    #[test]
    fn osc52_sequence_encodes_payload() {
        assert_eq!(osc52_sequence("foo"), "\x1b]52;c;Zm9v\x1b\\");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x1b\\");
    }

    // The copied payload is the panel's exact current text.
    #[tokio::test(start_paused = true)]
    async fn activation_copies_exact_panel_text_and_reverts() {
        let screen = screen_with_panel(Panel::Tokens, "foo");
        let control = CopyControl::new(Panel::Tokens);
        let mut sink = RecordingSink::default();

        control.activate(&screen, &mut sink);
        assert_eq!(sink.written, ["foo"]);
        assert_eq!(control.label(), LABEL_COPIED);

        tokio::time::sleep(LABEL_REVERT_DELAY + Duration::from_millis(10)).await;
        assert_eq!(control.label(), LABEL_COPY);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_activation_flashes_error_label() {
        let screen = screen_with_panel(Panel::Tree, "tree text");
        let control = CopyControl::new(Panel::Tree);
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };

        control.activate(&screen, &mut sink);
        assert!(sink.written.is_empty());
        assert_eq!(control.label(), LABEL_COPY_FAILED);

        tokio::time::sleep(LABEL_REVERT_DELAY + Duration::from_millis(10)).await;
        assert_eq!(control.label(), LABEL_COPY);
    }

    // Rapid re-activation: the most recent outcome label shows, and the
    // overlapping timers all settle back to the resting label.
    #[tokio::test(start_paused = true)]
    async fn overlapping_activations_are_last_write_wins() {
        let screen = screen_with_panel(Panel::Semantic, "sem");
        let control = CopyControl::new(Panel::Semantic);

        let mut ok_sink = RecordingSink::default();
        control.activate(&screen, &mut ok_sink);
        assert_eq!(control.label(), LABEL_COPIED);

        tokio::time::sleep(Duration::from_millis(300)).await;
        let mut failing_sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        control.activate(&screen, &mut failing_sink);
        assert_eq!(control.label(), LABEL_COPY_FAILED);

        // First timer fires while the second flash is still pending; the
        // label simply rests early, which matches last-write-wins.
        tokio::time::sleep(LABEL_REVERT_DELAY + Duration::from_millis(10)).await;
        assert_eq!(control.label(), LABEL_COPY);
    }

    #[test]
    fn controls_target_their_bound_panel() {
        let control = CopyControl::new(Panel::Validation);
        assert_eq!(control.target(), Panel::Validation);
        assert_eq!(control.label(), LABEL_COPY);
    }
}
