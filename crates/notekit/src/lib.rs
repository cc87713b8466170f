//! # notekit Architecture
//!
//! notekit is a **library of note-reference and metadata helpers** for
//! markdown vault workflows. A host (an editor plugin, a templating engine, a
//! batch script) decides *when* to call these helpers; notekit decides *what*
//! they produce.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One explicitly constructed HelpersApi per session        │
//! │  - Wires configuration, clock and exchange into commands    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, sanitize.rs, exchange.rs)    │
//! │  - Reference and web-link formatting, identifiers, lookups  │
//! │  - Pure functions over capability traits                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Capability Layer (store/)                                  │
//! │  - LinkResolver, DocumentReader, DocumentMover, Clock       │
//! │  - FsVault (production), InMemoryVault (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Formatting Never Fails
//!
//! Formatting runs inside larger rendering pipelines. A dangling reference, a
//! malformed URL or a missing catalogue degrades to a documented fallback
//! value plus a `tracing` event; it never aborts the caller. The only
//! operation that returns an error a caller must handle is the document move,
//! because it is the only one that changes the store.
//!
//! notekit installs no `tracing` subscriber. Hosts choose where events go.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`sanitize`]: Title → filename sanitization
//! - [`exchange`]: Single-slot template value hand-off
//! - [`store`]: Capability traits and vault implementations
//! - [`model`]: Core data types (`DocumentHandle`, `ReferenceInput`, ...)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod exchange;
pub mod model;
pub mod sanitize;
pub mod store;
