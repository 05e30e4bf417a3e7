//! Terminal front end for the batting order generator
//!
//! The binary lives in `main.rs`; everything it drives is here so the
//! session loop and subcommands can be tested against in-memory I/O.

pub mod commands;
pub mod config;
pub mod logging;
pub mod session;

pub use config::{OutputFormat, RunConfig};
pub use session::FormSession;
