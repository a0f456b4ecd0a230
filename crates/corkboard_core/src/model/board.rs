//! Board domain model.
//!
//! # Responsibility
//! - Define `Board`, `Column`, `Task` and their id aliases.
//! - Provide lookup helpers and the ordered-sequence move primitive.
//! - Validate the dual membership invariant between `Task.column_id` and
//!   `Column.task_ids`.
//!
//! # Invariants
//! - Task ids are unique board-wide; column ids are unique.
//! - Every task appears in exactly one column's `task_ids`, exactly once,
//!   and that column's id equals the task's `column_id`.
//! - The three default columns exist on every valid board.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a task. Opaque to the core; fresh ids are UUID v4.
pub type TaskId = String;

/// Stable identifier of a column. Opaque, except for the three reserved
/// default ids below.
pub type ColumnId = String;

/// Reserved id of the permanent "To Do" column. Column deletion relocates
/// orphaned tasks here.
pub const TODO_COLUMN_ID: &str = "todo";
/// Reserved id of the permanent "In Progress" column.
pub const IN_PROGRESS_COLUMN_ID: &str = "in-progress";
/// Reserved id of the permanent "Done" column.
pub const DONE_COLUMN_ID: &str = "done";

/// The column ids that exist on every board and can never be deleted.
pub const DEFAULT_COLUMN_IDS: [&str; 3] =
    [TODO_COLUMN_ID, IN_PROGRESS_COLUMN_ID, DONE_COLUMN_ID];

/// A unit of work owned by exactly one column.
///
/// `description` is an opaque blob to the core; rich-text concerns live in
/// the caller. Field names serialize in camelCase to match the persisted
/// payload contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Back-reference to the owning column. Mirrors membership in that
    /// column's `task_ids`; both sides move together.
    pub column_id: ColumnId,
    /// Creation time in epoch milliseconds. Display/ordering fallback only.
    pub created_at: i64,
}

impl Task {
    /// Creates a task with a fresh id and the current timestamp.
    pub fn new(
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id(),
            title: title.into(),
            description: description.into(),
            column_id: column_id.into(),
            created_at: now_epoch_ms(),
        }
    }
}

/// A named ordered bucket of task references.
///
/// `task_ids`, not any field on `Task`, is the authoritative order within
/// the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(fresh_id(), title)
    }

    /// Creates an empty column with a caller-provided id.
    ///
    /// Used for the reserved default columns, whose ids are fixed.
    pub fn with_id(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }
}

/// The whole task-tracking state: ordered columns plus the task collection.
///
/// Column order is display order. Tasks are held in a flat collection and
/// addressed by id; per-column order lives in `Column.task_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl Board {
    /// The initial board: the three default columns and no tasks.
    pub fn with_default_columns() -> Self {
        Self {
            columns: vec![
                Column::with_id(TODO_COLUMN_ID, "To Do"),
                Column::with_id(IN_PROGRESS_COLUMN_ID, "In Progress"),
                Column::with_id(DONE_COLUMN_ID, "Done"),
            ],
            tasks: Vec::new(),
        }
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn column_mut(&mut self, id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    pub fn task_index(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Checks every structural invariant.
    ///
    /// Load paths must reject boards that fail here instead of masking the
    /// breakage; command application preserves validity by construction.
    pub fn validate(&self) -> Result<(), BoardValidationError> {
        let mut column_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(column.id.as_str()) {
                return Err(BoardValidationError::DuplicateColumnId(column.id.clone()));
            }
        }

        for default_id in DEFAULT_COLUMN_IDS {
            if !column_ids.contains(default_id) {
                return Err(BoardValidationError::MissingDefaultColumn(
                    default_id.to_string(),
                ));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(BoardValidationError::DuplicateTaskId(task.id.clone()));
            }
            if !column_ids.contains(task.column_id.as_str()) {
                return Err(BoardValidationError::UnknownTaskColumn {
                    task_id: task.id.clone(),
                    column_id: task.column_id.clone(),
                });
            }
        }

        let mut referenced = HashSet::new();
        for column in &self.columns {
            for task_id in &column.task_ids {
                let Some(task) = self.task(task_id) else {
                    return Err(BoardValidationError::DanglingTaskRef {
                        column_id: column.id.clone(),
                        task_id: task_id.clone(),
                    });
                };
                if task.column_id != column.id {
                    return Err(BoardValidationError::MisplacedTaskRef {
                        column_id: column.id.clone(),
                        task_id: task_id.clone(),
                    });
                }
                if !referenced.insert(task_id.as_str()) {
                    return Err(BoardValidationError::DuplicateTaskRef(task_id.clone()));
                }
            }
        }

        for task in &self.tasks {
            if !referenced.contains(task.id.as_str()) {
                return Err(BoardValidationError::UnlistedTask(task.id.clone()));
            }
        }

        Ok(())
    }
}

/// Structural invariant violation found by `Board::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardValidationError {
    /// A reserved default column is absent.
    MissingDefaultColumn(ColumnId),
    /// Two columns share one id.
    DuplicateColumnId(ColumnId),
    /// Two tasks share one id.
    DuplicateTaskId(TaskId),
    /// A task's back-reference names a column that does not exist.
    UnknownTaskColumn { task_id: TaskId, column_id: ColumnId },
    /// A column references a task that does not exist.
    DanglingTaskRef { column_id: ColumnId, task_id: TaskId },
    /// A column references a task whose back-reference names another column.
    MisplacedTaskRef { column_id: ColumnId, task_id: TaskId },
    /// A task is referenced by more than one `task_ids` entry.
    DuplicateTaskRef(TaskId),
    /// A task is referenced by no column at all.
    UnlistedTask(TaskId),
}

impl Display for BoardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDefaultColumn(id) => write!(f, "default column missing: {id}"),
            Self::DuplicateColumnId(id) => write!(f, "duplicate column id: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
            Self::UnknownTaskColumn { task_id, column_id } => {
                write!(f, "task {task_id} references unknown column {column_id}")
            }
            Self::DanglingTaskRef { column_id, task_id } => {
                write!(f, "column {column_id} references unknown task {task_id}")
            }
            Self::MisplacedTaskRef { column_id, task_id } => write!(
                f,
                "column {column_id} references task {task_id} owned by another column"
            ),
            Self::DuplicateTaskRef(id) => write!(f, "task referenced more than once: {id}"),
            Self::UnlistedTask(id) => write!(f, "task referenced by no column: {id}"),
        }
    }
}

impl Error for BoardValidationError {}

/// Relocates one element of an ordered sequence to another position.
///
/// The element at `from` is removed first; `to` is then used as the insert
/// index in the post-removal sequence (clamped to its length). A
/// single-element relocation shifting the intervening elements, not a swap.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Generates a fresh opaque id in UUID v4 string form.
pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time in epoch milliseconds; 0 if the clock reports pre-epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
