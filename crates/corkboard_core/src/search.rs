//! Read-side task filtering over a board snapshot.
//!
//! # Responsibility
//! - Match tasks against a free-text query for search-as-you-type callers.
//!
//! # Invariants
//! - Pure reads; never mutates the board.
//! - A blank query matches every task.

use crate::model::board::{Board, Column, Task};

/// Whether one task matches the query (case-insensitive substring on title
/// or description).
pub fn matches_query(task: &Task, query: &str) -> bool {
    task_matches(task, query.trim().to_lowercase().as_str())
}

/// All matching tasks in board display order (column order, then the
/// column's task order).
pub fn filter_tasks<'a>(board: &'a Board, query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();
    board
        .columns
        .iter()
        .flat_map(|column| column.task_ids.iter())
        .filter_map(|task_id| board.task(task_id))
        .filter(|task| task_matches(task, &needle))
        .collect()
}

/// Matching tasks of one column in task order — what a column view renders.
pub fn filter_column_tasks<'a>(board: &'a Board, column: &Column, query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();
    column
        .task_ids
        .iter()
        .filter_map(|task_id| board.task(task_id))
        .filter(|task| task_matches(task, &needle))
        .collect()
}

fn task_matches(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.title.to_lowercase().contains(needle) || task.description.to_lowercase().contains(needle)
}
