//! Board store: the single owner of the authoritative board value.
//!
//! # Responsibility
//! - Bootstrap the board from persisted state, falling back to the default
//!   board when nothing usable is stored.
//! - Apply commands one at a time and hand read-only snapshots to callers.
//! - Dispatch a fire-and-forget save and notify subscribers after every
//!   state-changing application.
//!
//! # Invariants
//! - Callers never hold a mutable handle to the board; mutation happens
//!   only through `apply`.
//! - A failed save neither rolls back the in-memory board nor fails the
//!   command.
//! - No-op applications dispatch no save and no notification.

use crate::command::{self, Command};
use crate::model::board::Board;
use crate::repo::board_repo::BoardRepository;
use log::{debug, error, info, warn};

/// Token returned by `subscribe`, used to unsubscribe.
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&Board)>;

/// State container over a persistence repository.
///
/// Single-threaded by design: `apply` takes `&mut self`, so one command is
/// fully applied before the next is accepted and no locking is needed.
pub struct BoardStore<R: BoardRepository> {
    repo: R,
    board: Board,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<R: BoardRepository> BoardStore<R> {
    /// Opens the store, loading prior state through the repository.
    ///
    /// Absent or unusable persisted state is non-fatal: it is logged and
    /// the store starts from the default board.
    pub fn open(repo: R) -> Self {
        let board = match repo.load() {
            Ok(Some(board)) => {
                info!(
                    "event=board_load module=store status=ok columns={} tasks={}",
                    board.columns.len(),
                    board.tasks.len()
                );
                board
            }
            Ok(None) => {
                info!("event=board_load module=store status=empty fallback=default_board");
                Board::with_default_columns()
            }
            Err(err) => {
                warn!(
                    "event=board_load module=store status=rejected fallback=default_board error={err}"
                );
                Board::with_default_columns()
            }
        };

        Self {
            repo,
            board,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read-only view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned snapshot of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Applies one command and returns the resulting snapshot.
    ///
    /// Synchronous and total: malformed commands return the unchanged
    /// board. A state change triggers exactly one save dispatch (batch
    /// commands included) and one notification round.
    pub fn apply(&mut self, command: &Command) -> Board {
        let next = command::apply(&self.board, command);
        if next == self.board {
            debug!(
                "event=command_noop module=store command={}",
                command.name()
            );
            return next;
        }

        self.board = next;
        if let Err(err) = self.repo.save(&self.board) {
            // Fire-and-forget: the in-memory board stays authoritative.
            error!(
                "event=board_save module=store status=error command={} error={err}",
                command.name()
            );
        }
        for (_, listener) in &self.listeners {
            listener(&self.board);
        }
        debug!(
            "event=command_applied module=store command={}",
            command.name()
        );
        self.board.clone()
    }

    /// Registers a listener invoked with the new board after each state
    /// change.
    pub fn subscribe(&mut self, listener: impl Fn(&Board) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether the token was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}
