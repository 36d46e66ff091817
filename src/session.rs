//! The single owner of the current board.
//!
//! A [`BoardSession`] restores the board from its gateway on open, routes
//! every user action through the transition engine, and persists each
//! accepted change before adopting it. Calls take `&mut self`, so two
//! transitions can never be applied to the same snapshot.

use crate::{
    domain::{add_task, create_board, move_task, validate_board, Board},
    error::Result,
    storage::StateGateway,
};
use serde_json::Value;
use std::borrow::Cow;

/// Result of a successful move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed column and the new board was saved
    Moved,
    /// The task was already in the target column; nothing was saved
    Unchanged,
}

pub struct BoardSession<G> {
    gateway: G,
    board: Board,
}

impl<G: StateGateway> BoardSession<G> {
    /// Restores the saved board, falling back to an empty one.
    ///
    /// Missing, unreadable, or invalid state is discarded; opening never fails.
    pub async fn open(gateway: G) -> Self {
        let board = match gateway.load().await {
            Ok(Some(raw)) => match validate_board(&raw) {
                Ok(board) => {
                    tracing::info!(tasks = board.task_count(), "Restored saved board");
                    board
                }
                Err(err) => {
                    tracing::warn!(reason = %err, "Discarding invalid saved board");
                    create_board()
                }
            },
            Ok(None) => {
                tracing::info!("No saved board, starting empty");
                create_board()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load saved board, starting empty");
                create_board()
            }
        };

        Self { gateway, board }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Adds a task to `stage` and persists the result
    pub async fn add_task(&mut self, stage: impl AsRef<str>, text: &str) -> Result<&Board> {
        let stage = stage.as_ref();
        let next = add_task(&self.board, stage, text).map_err(|err| {
            tracing::debug!(stage, reason = %err, "Rejected new task");
            err
        })?;

        self.commit(next).await?;
        Ok(&self.board)
    }

    /// Moves a task to `target` and persists the result if anything changed
    pub async fn move_task(&mut self, task_id: &str, target: impl AsRef<str>) -> Result<MoveOutcome> {
        let target = target.as_ref();
        let next = match move_task(&self.board, task_id, target) {
            Ok(Cow::Borrowed(_)) => return Ok(MoveOutcome::Unchanged),
            Ok(Cow::Owned(next)) => next,
            Err(err) => {
                tracing::debug!(task_id, target, reason = %err, "Rejected move");
                return Err(err.into());
            }
        };

        self.commit(next).await?;
        Ok(MoveOutcome::Moved)
    }

    /// Replaces the current board with an externally supplied one
    pub async fn import(&mut self, candidate: &Value) -> Result<()> {
        let board = validate_board(candidate)?;
        self.commit(board).await
    }

    async fn commit(&mut self, next: Board) -> Result<()> {
        self.gateway.save(&next).await?;
        self.board = next;
        Ok(())
    }
}
