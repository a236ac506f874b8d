//! # Devtools Architecture
//!
//! Devtools is a pair of small developer utilities, an unpadded base64 codec and
//! a UUID generator, packaged as a library with a thin CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Global flags, command registry, per-command flag parsing │
//! │  - The ONLY place that knows about exit codes and stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves input, runs a command, writes the output        │
//! │  - Generic over stdin, clipboard and stdout                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure transformations: bytes in, bytes out                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input and output
//!
//! [`input`] picks the first available source out of explicit text, a file,
//! redirected stdin and the clipboard. [`output`] writes results to stdout and,
//! optionally, to a file. Standard input and the clipboard are reached through
//! narrow traits so the API layer can be tested without a terminal.
//!
//! ## Errors
//!
//! Everything below the CLI returns [`error::Result`]. Nothing in the library
//! prints or exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by the CLI
//! - [`commands`]: base64 and UUID logic
//! - [`input`]: Input source resolution
//! - [`output`]: Output writing
//! - [`clipboard`]: System clipboard reader
//! - [`registry`]: Command name and alias lookup
//! - [`cancel`]: Cancellation token connected to process signals
//! - [`config`]: Settings from flags and environment
//! - [`error`]: Error types

pub mod api;
pub mod cancel;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod registry;
