//! Board commands and their pure transition functions.
//!
//! # Responsibility
//! - Define the full command surface: nine named mutations, nothing else
//!   mutates a board.
//! - Apply each command as a pure `(Board, payload) -> Board` transition.
//!
//! # Invariants
//! - Application is total: a malformed command (unresolvable id, protected
//!   target) returns a board deep-equal to the input, never an error.
//! - Both sides of the task/column back-reference move inside one
//!   transition.
//! - A transition never leaves the board structurally invalid.

use crate::model::board::{
    array_move, Board, Column, ColumnId, Task, TaskId, DEFAULT_COLUMN_IDS, TODO_COLUMN_ID,
};

/// One entry of a `SeedTasks` batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub title: String,
    pub description: String,
}

/// A named, validated mutation request applied atomically to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Appends a new column with a fresh id and empty task list.
    ///
    /// The core does not reject blank titles; title validation is the
    /// caller's job.
    CreateColumn { title: String },
    /// Sets a column's title.
    RenameColumn { column_id: ColumnId, title: String },
    /// Removes a non-default column, relocating its tasks to `todo`.
    DeleteColumn { column_id: ColumnId },
    /// Appends a new task to a column. `description` defaults to empty.
    CreateTask {
        column_id: ColumnId,
        title: String,
        description: Option<String>,
    },
    /// Creates one task per entry, all appended to `todo`, in one atomic
    /// batch.
    SeedTasks { entries: Vec<SeedEntry> },
    /// Overwrites both display fields of an existing task.
    UpdateTask {
        task_id: TaskId,
        title: String,
        description: String,
    },
    /// Removes a task and its reference from the owning column.
    DeleteTask { task_id: TaskId },
    /// Relocates column `active_id` to the position of column `over_id`.
    MoveColumn {
        active_id: ColumnId,
        over_id: ColumnId,
    },
    /// Reorders or relocates a task. `over_id` may name a task (anchor) or
    /// a column (drop on the column surface).
    MoveTask { active_id: TaskId, over_id: String },
}

impl Command {
    /// Stable command name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateColumn { .. } => "create_column",
            Self::RenameColumn { .. } => "rename_column",
            Self::DeleteColumn { .. } => "delete_column",
            Self::CreateTask { .. } => "create_task",
            Self::SeedTasks { .. } => "seed_tasks",
            Self::UpdateTask { .. } => "update_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::MoveColumn { .. } => "move_column",
            Self::MoveTask { .. } => "move_task",
        }
    }
}

/// Applies one command, producing the next board.
///
/// Total over every input: well-formed commands yield the mutated board,
/// malformed ones yield an unchanged copy.
pub fn apply(board: &Board, command: &Command) -> Board {
    match command {
        Command::CreateColumn { title } => create_column(board, title),
        Command::RenameColumn { column_id, title } => rename_column(board, column_id, title),
        Command::DeleteColumn { column_id } => delete_column(board, column_id),
        Command::CreateTask {
            column_id,
            title,
            description,
        } => create_task(board, column_id, title, description.as_deref()),
        Command::SeedTasks { entries } => seed_tasks(board, entries),
        Command::UpdateTask {
            task_id,
            title,
            description,
        } => update_task(board, task_id, title, description),
        Command::DeleteTask { task_id } => delete_task(board, task_id),
        Command::MoveColumn { active_id, over_id } => move_column(board, active_id, over_id),
        Command::MoveTask { active_id, over_id } => move_task(board, active_id, over_id),
    }
}

fn create_column(board: &Board, title: &str) -> Board {
    let mut next = board.clone();
    next.columns.push(Column::new(title));
    next
}

fn rename_column(board: &Board, column_id: &str, title: &str) -> Board {
    let mut next = board.clone();
    if let Some(column) = next.column_mut(column_id) {
        column.title = title.to_string();
    }
    next
}

fn delete_column(board: &Board, column_id: &str) -> Board {
    let mut next = board.clone();
    if DEFAULT_COLUMN_IDS.contains(&column_id) {
        return next;
    }
    let Some(index) = next.column_index(column_id) else {
        return next;
    };
    // A board without `todo` violates invariants already; refuse to make it
    // worse by orphaning the column's tasks.
    if next.column(TODO_COLUMN_ID).is_none() {
        return next;
    }

    let removed = next.columns.remove(index);
    for task in &mut next.tasks {
        if task.column_id == removed.id {
            task.column_id = TODO_COLUMN_ID.to_string();
        }
    }
    if let Some(todo) = next.column_mut(TODO_COLUMN_ID) {
        todo.task_ids.extend(removed.task_ids);
    }
    next
}

fn create_task(
    board: &Board,
    column_id: &str,
    title: &str,
    description: Option<&str>,
) -> Board {
    let mut next = board.clone();
    if next.column(column_id).is_none() {
        return next;
    }

    let task = Task::new(column_id, title, description.unwrap_or_default());
    let task_id = task.id.clone();
    next.tasks.push(task);
    if let Some(column) = next.column_mut(column_id) {
        column.task_ids.push(task_id);
    }
    next
}

fn seed_tasks(board: &Board, entries: &[SeedEntry]) -> Board {
    let mut next = board.clone();
    if next.column(TODO_COLUMN_ID).is_none() {
        return next;
    }

    let mut new_ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let task = Task::new(TODO_COLUMN_ID, entry.title.as_str(), entry.description.as_str());
        new_ids.push(task.id.clone());
        next.tasks.push(task);
    }
    if let Some(todo) = next.column_mut(TODO_COLUMN_ID) {
        todo.task_ids.extend(new_ids);
    }
    next
}

fn update_task(board: &Board, task_id: &str, title: &str, description: &str) -> Board {
    let mut next = board.clone();
    if let Some(task) = next.task_mut(task_id) {
        task.title = title.to_string();
        task.description = description.to_string();
    }
    next
}

fn delete_task(board: &Board, task_id: &str) -> Board {
    let mut next = board.clone();
    let Some(index) = next.task_index(task_id) else {
        return next;
    };
    let removed = next.tasks.remove(index);
    if let Some(column) = next.column_mut(&removed.column_id) {
        column.task_ids.retain(|id| id.as_str() != task_id);
    }
    next
}

fn move_column(board: &Board, active_id: &str, over_id: &str) -> Board {
    let mut next = board.clone();
    if active_id == over_id {
        return next;
    }
    let Some(from) = next.column_index(active_id) else {
        return next;
    };
    let Some(to) = next.column_index(over_id) else {
        return next;
    };
    array_move(&mut next.columns, from, to);
    next
}

/// The drag reorder algorithm.
///
/// `over_id` resolves to a column directly (drop on the column surface) or
/// through the anchor task's back-reference. Same-column anchors reorder in
/// place; everything else detaches from the source and inserts into the
/// target — at the anchor's index, or appended when the column itself was
/// the target.
fn move_task(board: &Board, active_id: &str, over_id: &str) -> Board {
    let mut next = board.clone();
    if active_id == over_id {
        return next;
    }
    let Some(source_column_id) = next.task(active_id).map(|task| task.column_id.clone()) else {
        return next;
    };

    let over_is_column = next.column(over_id).is_some();
    let target_column_id = if over_is_column {
        over_id.to_string()
    } else if let Some(anchor) = next.task(over_id) {
        anchor.column_id.clone()
    } else {
        return next;
    };

    if over_is_column {
        // Drop on a column surface, the task's own column included: detach
        // and append to the end.
        detach_task_ref(&mut next, &source_column_id, active_id);
        if let Some(target) = next.column_mut(&target_column_id) {
            target.task_ids.push(active_id.to_string());
        }
        if let Some(task) = next.task_mut(active_id) {
            task.column_id = target_column_id;
        }
    } else if source_column_id == target_column_id {
        if let Some(column) = next.column_mut(&source_column_id) {
            let from = column.task_ids.iter().position(|id| id == active_id);
            let to = column.task_ids.iter().position(|id| id == over_id);
            if let (Some(from), Some(to)) = (from, to) {
                array_move(&mut column.task_ids, from, to);
            }
        }
    } else {
        detach_task_ref(&mut next, &source_column_id, active_id);
        if let Some(target) = next.column_mut(&target_column_id) {
            let at = target
                .task_ids
                .iter()
                .position(|id| id == over_id)
                .unwrap_or(target.task_ids.len());
            target.task_ids.insert(at, active_id.to_string());
        }
        if let Some(task) = next.task_mut(active_id) {
            task.column_id = target_column_id;
        }
    }
    next
}

fn detach_task_ref(board: &mut Board, column_id: &str, task_id: &str) {
    if let Some(column) = board.column_mut(column_id) {
        column.task_ids.retain(|id| id.as_str() != task_id);
    }
}
