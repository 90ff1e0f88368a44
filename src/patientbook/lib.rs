//! # Patientbook Architecture
//!
//! Patientbook is a **UI-agnostic patient contact library** for small clinics.
//! The terminal client in `cli/` is one client of it; nothing in the library
//! knows that a terminal exists.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, renders patient cards and feedback          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line into a Command (parser/)                   │
//! │  - Runs it, persists a snapshot after mutations             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One validated unit of work per command                   │
//! │  - Resolves display indexes against the visible list        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Storage (book.rs, store/)                           │
//! │  - PatientBook: records, filtered view, change listeners    │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Indexes Are Positions in the Visible List
//!
//! Users address patients by the 1-based number shown next to them. That number
//! is a position in the *filtered* list, so after `find Bernice` the index `1`
//! means the first match, not the first patient in the book. See `index.rs`.
//!
//! ## Change Notification
//!
//! Clients do not poll. They [`subscribe`](book::PatientBook::subscribe) to the
//! book and are handed the new visible list synchronously after every change,
//! including filter changes.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust arguments and returns `Result<CmdResult>`
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): the bulk of the unit tests.
//! 2. **Parser** (`parser/`): grammar and error mapping, one test per failure kind.
//! 3. **API** (`api.rs`): dispatch and when snapshots get saved.
//! 4. **Binary** (`tests/`): whole sessions fed through stdin.
//!
//! Shared fixtures live in `testing.rs`, also exported under the `test_utils`
//! feature.

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod parser;
pub mod predicate;
pub mod sample;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod testing;
