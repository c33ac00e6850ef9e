//! walletscope: a terminal wallet viewer built around a screen coordinator
//!
//! - `core`: the coordinator state machine, intents, effects and screens
//! - `domain`: wallet models and the pure view-model derivations
//! - `infrastructure`: address API client, clipboard, Tokio runtime bridge
//! - `app` / `ui`: the ratatui shell that maps keys to intents and draws
//!   the current screen

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod ui;
