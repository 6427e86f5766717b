//! Terminal output formatting
//!
//! Colors, colored rows and keyboards, and end-of-game summaries.

pub mod display;
pub mod formatters;
mod palette;

pub use display::{print_game_summary, write_board, write_message};
pub use palette::{Palette, Rgb};
