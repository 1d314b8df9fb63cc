//! compdeck — a terminal workbench for a remote compiler pipeline.
//!
//! The pipeline lives behind one `POST /compile` endpoint. compdeck collects
//! source text, submits it, and renders the staged results (lexical tokens,
//! parse tree, semantic report, per-stage validation badges) in four output
//! panels, with a rotating color palette persisted across runs and per-panel
//! clipboard copy.
//!
//! # Quick start
//!
//! ```no_run
//! use compdeck::api::ApiClient;
//! use compdeck::app::App;
//! use compdeck::config::load_config;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = ApiClient::new(&config.server);
//! let mut app = App::new(client, config.display.color);
//! app.run_once("x = 1 + 2;").await;
//! # }
//! ```

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod panels;
pub mod render;
pub mod store;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod types;
