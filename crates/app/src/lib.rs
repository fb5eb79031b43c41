//! # cloudtrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository` — store, fetch, update and list services
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServiceManager` — add, deactivate, record usage, list, total, report
//! - Define the **read models** handed to presentation adapters
//!   (`ServiceRow`, `UsageReport`)
//! - Orchestrate domain objects without knowing *how* storage or output works
//!
//! ## Dependency rule
//! Depends on `cloudtrack-domain` only (plus `tracing` for notices).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod report;
pub mod services;
