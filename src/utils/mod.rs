//! Utility functions and helpers for TransLingua.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and API-key scrubbing.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
