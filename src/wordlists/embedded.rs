//! Embedded word lists
//!
//! Compiled into the binary by `build.rs` from `data/`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
