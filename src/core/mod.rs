//! Core utilities shared by every module.
//!
//! Declared first in `lib.rs` so the logging macros are visible crate-wide.

#[macro_use]
pub mod utils;
