//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about the process streams and the clipboard implementation
//! - Decides exit codes
//! - Handles argument parsing
//! - Formats failures for human consumption
//!
//! ## Dispatch
//!
//! Global flags are parsed first. The first positional argument names a
//! command (full name or alias) in the [`Registry`](devtools::registry::Registry),
//! and everything after it is handed to that command's own clap parser. A
//! malformed command flag is reported by clap itself, which exits with status
//! 2. Any other failure is printed with a usage listing and also exits with 2.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions for global flags and each command
//! - `commands.rs`: `run()`, registry construction and per-command handlers
//! - `render.rs`: failure messages and usage text

mod commands;
mod render;
mod setup;

pub use commands::run;
