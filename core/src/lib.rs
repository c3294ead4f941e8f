//! loyalty-core — in-memory administration core for a loyalty program.
//!
//! One `AdminStore` per process, constructed from `AdminConfig` with the
//! built-in seed data, mutated through per-entity CRUD operations and
//! read back after every change. Nothing persists: a restart is a reset.

pub mod command;
pub mod config;
pub mod error;
pub mod latency;
pub mod names;
pub mod rng;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod table;
pub mod types;
