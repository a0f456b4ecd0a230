//! Persistence contracts and their SQLite implementation.
//!
//! # Responsibility
//! - Keep the load/save contract consumed by the board store behind a
//!   trait, storage details behind the implementation.
//!
//! # Invariants
//! - Load paths reject invalid persisted state instead of masking it;
//!   recovery policy belongs to the store.

pub mod board_repo;
