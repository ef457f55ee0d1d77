//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing and installs the log subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-subcommand handlers
//! - `shell`: the numbered interactive menu, generic over its input and output
//! - `print`: rendering of `CmdResult` pieces

mod commands;
mod print;
mod setup;
mod shell;

pub use commands::run;
