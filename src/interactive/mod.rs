//! Interactive TUI front end
//!
//! Full-screen board driven by physical key presses.

pub mod app;
pub mod input;
mod rendering;

pub use app::{App, run_tui};
pub use input::{Action, decode_key};
