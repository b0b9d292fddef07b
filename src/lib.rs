//! Ranklist - Elm-style ranked list
//!
//! This crate provides the core types and logic for an ordered list of rows
//! with renumbering, drag reordering, an add/edit form, and CSV import,
//! implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod import;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
