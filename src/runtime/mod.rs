//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management, background workers
//! - `input` - keyboard routing to the form, position editor or shortcuts
//! - `mouse` - mouse press/move/release dispatch via hit-testing

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
