//! Core board logic for Corkboard, a single-user client-resident task
//! board.
//! This crate is the single source of truth for board invariants: columns
//! hold ordered task references, every mutation goes through the command
//! surface of [`BoardStore`], and each state change is persisted through a
//! [`BoardRepository`]. UI concerns stay outside; callers read snapshots
//! and issue commands.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod store;

pub use command::{Command, SeedEntry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    array_move, Board, BoardValidationError, Column, ColumnId, Task, TaskId, DEFAULT_COLUMN_IDS,
    DONE_COLUMN_ID, IN_PROGRESS_COLUMN_ID, TODO_COLUMN_ID,
};
pub use repo::board_repo::{
    BoardRepository, RepoError, RepoResult, SqliteBoardRepository, STATE_NAMESPACE,
};
pub use search::{filter_column_tasks, filter_tasks, matches_query};
pub use seed::{to_seed_entries, SeedRecord, SEED_TITLE_MAX_CHARS};
pub use store::{BoardStore, SubscriptionId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
