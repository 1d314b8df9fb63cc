//! CLI entry point for compdeck.

mod cli;

use clap::Parser;
use compdeck::api::ApiClient;
use compdeck::app::App;
use compdeck::clipboard::TerminalClipboard;
use compdeck::config::load_config;
use compdeck::store::ThemeStore;
use compdeck::theme;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load config and apply CLI overrides.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if let Some(url) = &args.base_url {
        config.server.base_url = url.clone();
    }
    if args.no_color {
        config.display.color = false;
    }

    // Rotate the palette for this visit. An unopenable store is the same as
    // an unreadable one: default palette, no persistence, no complaint.
    match ThemeStore::open_default() {
        Ok(store) => theme::rotate_on_startup(&store),
        Err(_) => theme::apply_palette(theme::DEFAULT_PALETTE),
    }

    let client = ApiClient::new(&config.server);
    let mut app = App::new(client, config.display.color);

    if let Some(path) = &args.file {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: failed to read {path}: {e}");
                std::process::exit(1);
            }
        };
        app.run_once(&source).await;
        return;
    }

    let mut clipboard = TerminalClipboard;
    if let Err(e) = app.run_interactive(&mut clipboard).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
