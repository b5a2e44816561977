// src/lib.rs

pub mod app;
pub mod chat;
pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod key_handlers;
pub mod logging;
pub mod party_themes;
pub mod session;
pub mod status_indicator;
pub mod theme;
pub mod ui;
