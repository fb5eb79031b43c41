//! # cloudtrack-domain
//!
//! Pure domain model for the cloudtrack resource tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (tracked cloud resources: VMs, storage, databases, …)
//!   together with their usage hours, hourly cost and lifecycle status
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod service;
