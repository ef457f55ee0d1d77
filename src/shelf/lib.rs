//! # Shelf Architecture
//!
//! Shelf is a small library catalog: books, registered borrowers (students and staff)
//! and one administrator, persisted to a single JSON file. The catalog logic is a
//! library; the interactive menu in the binary is just one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Numbered menu shell, prompts, colored output             │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Re-checks admin credentials on every privileged call     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations returning `CmdResult`                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (library.rs) over Storage (store/)                 │
//! │  - In-memory collections, full re-save after each mutation  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code returns `Result<CmdResult>` and never writes to the
//! terminal. User-facing outcomes travel as leveled [`commands::CmdMessage`]s; failures
//! travel as [`error::ShelfError`], split by [`error::ShelfError::is_fatal`] into
//! per-operation problems and persistence failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`auth`]: Credentials and the pluggable `Authenticator` policy
//! - [`commands`]: Business logic for each operation
//! - [`library`]: The in-memory store and borrowing bookkeeping
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Book`, `User`, `Admin`, `Rating`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
