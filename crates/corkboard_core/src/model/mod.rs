//! Canonical domain model for the board.
//!
//! # Responsibility
//! - Define the data structures shared by every board operation.
//! - Enforce structural invariants through `Board::validate`.
//!
//! # Invariants
//! - Column order and per-column task order are explicit sequences, never
//!   incidental map iteration order.
//! - `Task.column_id` and `Column.task_ids` are kept consistent by every
//!   mutating command; `validate` checks both sides.

pub mod board;
