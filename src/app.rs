//! Interactive command loop wiring the screen, controller, and copy helpers.
//!
//! The loop is strictly sequential: each line of input is handled to
//! completion before the next is read, so every UI mutation happens from
//! this one logical thread. Lines starting with `/` are commands; anything
//! else is appended to the source buffer.

use crate::api::CompileBackend;
use crate::clipboard::{ClipboardSink, CopyControl};
use crate::controller::AnalysisController;
use crate::panels::{Panel, Screen};
use crate::theme;
use crate::types::AnalysisResponse;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "> ";
const HELP_TEXT: &str = "\
commands:
  /run             submit the buffered source for analysis
  /copy <panel>    copy a panel to the clipboard (tokens, tree, semantic, validation)
  /show            repaint all panels
  /clear           discard the buffered source
  /theme           show the active palette
  /help            this text
  /quit            exit
anything else is appended to the source buffer.";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run,
    Copy(Panel),
    Show,
    Clear,
    Theme,
    Help,
    Quit,
    /// A plain source line, stored verbatim.
    Source(String),
    /// A `/` line that is not a recognized command.
    Unknown(String),
}

impl Command {
    /// Classify one raw input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if !trimmed.starts_with('/') {
            return Self::Source(trimmed.to_string());
        }
        let mut parts = trimmed.split_whitespace();
        let head = parts.next().unwrap_or("/");
        match head {
            "/run" => Self::Run,
            "/copy" => match parts.next().and_then(Panel::from_id) {
                Some(panel) => Self::Copy(panel),
                None => Self::Unknown(trimmed.to_string()),
            },
            "/show" => Self::Show,
            "/clear" => Self::Clear,
            "/theme" => Self::Theme,
            "/help" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// The assembled client application.
pub struct App<B> {
    screen: Screen,
    controller: AnalysisController<B>,
    copy_controls: Vec<CopyControl>,
}

impl<B: CompileBackend> App<B> {
    pub fn new(backend: B, color: bool) -> Self {
        Self {
            screen: Screen::new(color),
            controller: AnalysisController::new(backend),
            copy_controls: Panel::all().into_iter().map(CopyControl::new).collect(),
        }
    }

    /// Submit `source` once, paint the result, and return.
    pub async fn run_once(&mut self, source: &str) {
        for line in source.lines() {
            self.screen.push_input_line(line);
        }
        let response = self.controller.submit(&mut self.screen).await;
        print!("{}", self.screen.paint());
        if let Some(summary) = response.as_ref().and_then(summary_line) {
            println!("{summary}");
        }
    }

    /// Read commands from stdin until `/quit` or end of input.
    pub async fn run_interactive(
        &mut self,
        clipboard: &mut dyn ClipboardSink,
    ) -> std::io::Result<()> {
        println!(
            "compdeck - remote compiler workbench (palette: {})",
            theme::active_palette().id()
        );
        println!("type source lines, then /run. /help lists commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{PROMPT}");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.handle(Command::parse(&line), clipboard).await {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command; returns false when the loop should exit.
    async fn handle(&mut self, command: Command, clipboard: &mut dyn ClipboardSink) -> bool {
        match command {
            Command::Run => {
                let response = self.controller.submit(&mut self.screen).await;
                print!("{}", self.screen.paint());
                if let Some(summary) = response.as_ref().and_then(summary_line) {
                    println!("{summary}");
                }
            }
            Command::Copy(panel) => {
                if let Some(control) = self.copy_controls.iter().find(|c| c.target() == panel) {
                    control.activate(&self.screen, clipboard);
                    println!("{}: {}", panel.id(), control.label());
                }
            }
            Command::Show => print!("{}", self.screen.paint()),
            Command::Clear => {
                self.screen.clear_input();
                println!("source buffer cleared");
            }
            Command::Theme => println!("palette: {}", theme::active_palette().id()),
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => return false,
            Command::Source(line) => self.screen.push_input_line(&line),
            Command::Unknown(line) => println!("unknown command: {line} (try /help)"),
        }
        true
    }
}

/// Post-run summary derived from the service's evaluation outcome.
fn summary_line(response: &AnalysisResponse) -> Option<String> {
    let result = response.result.as_ref()?;
    if result.is_null() {
        return None;
    }
    Some(format!("result: {result}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::response_from_json;
    use serde_json::json;

    #[test]
    fn parse_classifies_commands() {
        assert_eq!(Command::parse("/run"), Command::Run);
        assert_eq!(Command::parse("/copy tokens"), Command::Copy(Panel::Tokens));
        assert_eq!(Command::parse("/copy tree"), Command::Copy(Panel::Tree));
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/theme"), Command::Theme);
    }

    #[test]
    fn parse_keeps_source_lines_verbatim() {
        assert_eq!(
            Command::parse("  x = 1;  "),
            Command::Source("  x = 1;  ".to_string())
        );
        assert_eq!(Command::parse(""), Command::Source(String::new()));
    }

    #[test]
    fn parse_rejects_bad_copy_targets() {
        assert_eq!(
            Command::parse("/copy nonsense"),
            Command::Unknown("/copy nonsense".to_string())
        );
        assert_eq!(
            Command::parse("/copy"),
            Command::Unknown("/copy".to_string())
        );
    }

    #[test]
    fn summary_line_shows_evaluation_result() {
        let resp = response_from_json(json!({"result": 3}));
        assert_eq!(summary_line(&resp), Some("result: 3".to_string()));
    }

    #[test]
    fn summary_line_absent_or_null_result() {
        assert_eq!(summary_line(&response_from_json(json!({}))), None);
        assert_eq!(summary_line(&response_from_json(json!({"result": null}))), None);
    }
}
