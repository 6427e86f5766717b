//! Word lists for Wordle
//!
//! Embedded lists compiled into the binary: `ANSWERS` holds the common words
//! secrets are drawn from, `ALLOWED` the full guess dictionary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
