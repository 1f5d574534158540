//! # Contacts Architecture
//!
//! A tiny contact book kept in a JSON file. Like any layered CLI, the library
//! knows nothing about terminals; the `contacts` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, renders the table     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One session: load, run a command, save if dirty          │
//! │  - Best-effort load, logged failures                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / display / select over a Vec<Contact>               │
//! │  - Returns CmdResult, no I/O                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait                                       │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: session facade over commands and storage
//! - [`commands`]: `add`, `display`, `select`
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the [`model::Contact`] record
//! - [`index`]: 1-based display numbering
//! - [`config`]: `config.json` handling and data path resolution
//! - [`logging`]: file logging setup for the binary
//! - [`error`]: error types
//! - [`triad`]: the unrelated three-field `Date` / `Time` records

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
pub mod triad;
