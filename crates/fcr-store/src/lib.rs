//! In-memory store backend for fcr.
//!
//! [`InMemoryClient`] implements the [`fcr_core::Client`] contract entirely
//! in process. It is the backend for tests, for the `fcr` CLI, and anywhere
//! a remote store is not needed. Semantics follow an object-store API
//! server: resource versions, optimistic concurrency, status sub-resources,
//! label/field selection, merge and apply patches, dry-run writes.
//!
//! # Modules
//!
//! - [`config`]: StoreConfig knobs
//! - [`memory`]: InMemoryClient and its builder
//! - [`selector`]: list option evaluation

pub mod config;
pub mod memory;
pub mod selector;

pub use config::StoreConfig;
pub use memory::{InMemoryClient, InMemoryClientBuilder};
