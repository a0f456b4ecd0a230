//! Board repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the load/save contract the board store persists through.
//! - Keep SQL and payload encoding inside the persistence boundary.
//!
//! # Invariants
//! - `save` writes the full board as one JSON payload keyed by a stable
//!   namespace string; repeated saves upsert the same row.
//! - `load` returns a board only if the payload parses and passes
//!   `Board::validate`; anything else is an explicit error.

use crate::db::DbError;
use crate::model::board::Board;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable storage key for the single persisted board.
pub const STATE_NAMESPACE: &str = "corkboard-kanban-state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for board persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted payload exists but is not a structurally valid board.
    InvalidData(String),
    /// The in-memory board could not be encoded.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted board: {message}"),
            Self::Serialize(err) => write!(f, "failed to encode board payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract consumed by the board store.
pub trait BoardRepository {
    /// Returns the previously persisted board, or `None` when nothing is
    /// stored under the namespace.
    fn load(&self) -> RepoResult<Option<Board>>;
    /// Durably stores the full board, replacing any prior payload.
    fn save(&self, board: &Board) -> RepoResult<()>;
}

/// SQLite-backed board repository.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
    namespace: String,
}

impl<'conn> SqliteBoardRepository<'conn> {
    /// Creates a repository over the default namespace.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_namespace(conn, STATE_NAMESPACE)
    }

    /// Creates a repository over a caller-chosen namespace.
    pub fn with_namespace(conn: &'conn Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn load(&self) -> RepoResult<Option<Board>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM board_states WHERE namespace = ?1;",
                params![self.namespace],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let board: Board = serde_json::from_str(&payload)
            .map_err(|err| RepoError::InvalidData(format!("payload is not a board: {err}")))?;
        board.validate().map_err(|err| {
            RepoError::InvalidData(format!("persisted board violates invariants: {err}"))
        })?;

        Ok(Some(board))
    }

    fn save(&self, board: &Board) -> RepoResult<()> {
        let payload = serde_json::to_string(board).map_err(RepoError::Serialize)?;
        self.conn.execute(
            "INSERT INTO board_states (namespace, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![self.namespace, payload],
        )?;
        Ok(())
    }
}
