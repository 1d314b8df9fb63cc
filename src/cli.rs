//! CLI argument parsing via clap.

use clap::Parser;

/// Terminal workbench for a remote compiler analysis service.
#[derive(Debug, Parser)]
#[command(name = "compdeck", version)]
pub struct Args {
    /// Source file to analyze. If provided, runs one cycle and exits.
    pub file: Option<String>,

    /// Path to config file (default: ./compdeck.toml or ~/.config/compdeck/compdeck.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the analysis service base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
