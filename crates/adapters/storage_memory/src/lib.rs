//! # cloudtrack-adapter-storage-memory
//!
//! Process-local storage adapter. Everything lives in memory and is lost when
//! the process exits.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `cloudtrack-app::ports::storage`
//! - Serialise access through one coarse lock per operation
//!
//! ## Dependency rule
//! Depends on `cloudtrack-app` (for port traits) and `cloudtrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod service_repo;

pub use service_repo::InMemoryServiceRepository;
