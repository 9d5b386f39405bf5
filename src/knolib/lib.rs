//! # Knolib Architecture
//!
//! Knolib is a **UI-agnostic knowledge-base library**: a hierarchical
//! collection of topics, each with sub-topics and attached code examples,
//! persisted as one human-diffable JSON document. The bundled CLI is just
//! one client.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, cli/, wired by main.rs)                 │
//! │  - argument parsing, terminal rendering, exit codes    │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  API facade (api.rs)                                   │
//! │  - id resolution, dispatch, structured results         │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Domain model (model.rs) + projections (views.rs)      │
//! │  - owned topic tree, recursive lookup/search           │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Store (store/fs.rs)                                   │
//! │  - canonical JSON file, .bak on save, quarantine on    │
//! │    corrupt load, import/export/backup                  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes plain arguments, returns plain
//! `Result` values, and never touches stdout/stderr or assumes a terminal.
//! The model is single-writer and synchronous: one library per process, no
//! locking, no background work. Periodic autosave, selection state, and
//! content rendering (markdown, highlighting) all belong to the caller.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`model`]: `Library`, `Topic`, `Example` and the tree operations
//! - [`views`]: read-only projections (search hits, breadcrumbs, summaries)
//! - [`store`]: persistence with backup and corruption recovery
//! - [`seed`]: the first-run document
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod views;
