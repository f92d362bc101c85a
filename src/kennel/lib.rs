//! # Kennel Architecture
//!
//! Kennel is a registry of animals (pets and pack animals) with a command-line
//! client. The registry is a library; the CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, terminal rendering    │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Registry and its DataStore                      │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure logic over the Registry   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Registry (registry.rs)      │ │  Storage (store/)          │
//! │  - records + id counter      │ │  - DataStore trait         │
//! │  - model.rs, age.rs          │ │  - FileStore, InMemoryStore│
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Identity and duplicates
//!
//! Every record gets a numeric id when it is appended to a [`registry::Registry`].
//! Ids only ever grow: deleting an animal retires its id, and loading a saved
//! registry moves the counter past the largest stored id.
//!
//! Two animals are *duplicates* when they have the same kind, the same name
//! ignoring case, the same birth date and the same commands ignoring case,
//! order and surrounding whitespace. That rule lives in
//! [`model::AnimalRecord::is_duplicate_of`] and is only a warning: the caller
//! can insist and register the duplicate anyway.
//!
//! ## Testing Strategy
//!
//! - **Commands** and the **registry** carry most unit tests, against
//!   `InMemoryStore` and the fixtures in `registry::fixtures`.
//! - **Store** behavior against the real filesystem lives in `tests/`.
//! - **CLI** tests drive the binary end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`registry`]: The in-memory collection and id counter
//! - [`model`]: `AnimalKind`, `Category`, `AnimalRecord`
//! - [`age`]: Calendar-aware age in years and months
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and API construction
//! - [`error`]: Error types

pub mod age;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod registry;
pub mod store;
