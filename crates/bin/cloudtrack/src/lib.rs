//! # cloudtrack — cloud service usage tracker
//!
//! Composition root that wires the adapters together and runs the
//! demonstration simulation.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the in-memory repository (adapter)
//! - Construct the `ServiceManager`, injecting the repository via its port trait
//! - Drive a simulated usage run and print the console reports
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod simulation;
