//! # Task Architecture
//!
//! `task` keeps a priority-ordered todo list in two plain text files: pending
//! tasks in `task.txt`, finished ones in `completed.txt`. The crate is a small
//! library with a CLI on top; everything below `main.rs` is usable without a
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints results, picks the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - TaskApi<S>: one method per operation                     │
//! │  - Returns Result<CmdResult>                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add, list, delete, done, report                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait; FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes
//!
//! Tasks have no stored id. Every load sorts pending tasks by priority (ties
//! keep file order) and numbers them from 1; `del` and `done` address tasks by
//! that number, so it is only meaningful against the listing it came from.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward code takes plain arguments, returns plain types, and
//! never writes to stdout/stderr or calls `std::process::exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`store`]: storage trait and implementations
//! - [`model`]: task records and the line format
//! - [`config`]: data directory resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
