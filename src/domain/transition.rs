//! Workflow rules for adding and moving tasks.
//!
//! Both operations are pure: they take the current board by reference and
//! hand back a new board on success. A rejected call never touches its input.
//! Boards reaching these functions are assumed to come from [`create_board`]
//! or [`validate_board`], so the column layout is not checked again here.
//!
//! [`create_board`]: crate::domain::board::create_board
//! [`validate_board`]: crate::domain::validation::validate_board

use crate::domain::{
    board::Board,
    stage::{Stage, WIP_LIMIT},
    task::{Task, TaskId},
};
use crate::error::TransitionError;
use std::{borrow::Cow, str::FromStr};

/// Appends a new task with trimmed `text` to the column for `stage`.
pub fn add_task(
    board: &Board,
    stage: impl AsRef<str>,
    text: &str,
) -> Result<Board, TransitionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TransitionError::EmptyText);
    }

    let column_index = Stage::from_str(stage.as_ref())
        .ok()
        .and_then(|stage| board.columns.iter().position(|col| col.stage_id == stage))
        .ok_or(TransitionError::ColumnNotFound)?;

    let mut columns = board.columns.clone();
    columns[column_index]
        .tasks
        .push(Task::new(TaskId::generate(), trimmed));

    Ok(Board { columns })
}

/// Moves a task one stage forward or backward.
///
/// Gates are evaluated in a fixed order and the first failure wins:
///
/// 1. the task must exist ([`TransitionError::TaskNotFound`])
/// 2. the target must be a known stage ([`TransitionError::InvalidTargetColumn`])
/// 3. tasks in the terminal stage stay there ([`TransitionError::TerminalColumnImmutable`])
/// 4. a move to the current stage is a no-op and borrows the input board
/// 5. only adjacent stages are reachable ([`TransitionError::NonAdjacentMove`])
/// 6. the work-in-progress stage holds at most [`WIP_LIMIT`] tasks
///    ([`TransitionError::WipLimitExceeded`])
///
/// On success the task is removed from its column and appended to the end of
/// the target column. Callers can match on [`Cow::Borrowed`] to detect the
/// no-op case and skip persisting.
pub fn move_task<'a>(
    board: &'a Board,
    task_id: &str,
    target: impl AsRef<str>,
) -> Result<Cow<'a, Board>, TransitionError> {
    let source_index = board
        .column_index_of(task_id)
        .ok_or(TransitionError::TaskNotFound)?;

    let target = Stage::from_str(target.as_ref())
        .map_err(|_| TransitionError::InvalidTargetColumn)?;

    let source = board.columns[source_index].stage_id;

    // Checked before the no-op so a same-stage request on a finished task
    // still succeeds.
    if source.is_terminal() && target != source {
        return Err(TransitionError::TerminalColumnImmutable);
    }

    if source == target {
        return Ok(Cow::Borrowed(board));
    }

    if !source.is_adjacent_to(target) {
        return Err(TransitionError::NonAdjacentMove);
    }

    let target_index = board
        .columns
        .iter()
        .position(|col| col.stage_id == target)
        .ok_or(TransitionError::InvalidTargetColumn)?;

    let target_column = &board.columns[target_index];
    if target == Stage::WORK_IN_PROGRESS
        && !target_column.contains(task_id)
        && target_column.len() >= WIP_LIMIT
    {
        return Err(TransitionError::WipLimitExceeded);
    }

    let mut columns = board.columns.clone();
    let position = columns[source_index]
        .tasks
        .iter()
        .position(|task| task.id.as_str() == task_id)
        .ok_or(TransitionError::TaskNotFound)?;
    let task = columns[source_index].tasks.remove(position);
    columns[target_index].tasks.push(task);

    Ok(Cow::Owned(Board { columns }))
}

/// Checks whether moving `task_id` to `target` would finish the task.
///
/// Reaching the terminal stage cannot be undone, so interactive callers ask
/// the user before calling [`move_task`] when this returns true.
pub fn requires_confirmation(board: &Board, task_id: &str, target: impl AsRef<str>) -> bool {
    let Ok(target) = Stage::from_str(target.as_ref()) else {
        return false;
    };

    target.is_terminal()
        && board
            .stage_of(task_id)
            .map(|source| !source.is_terminal())
            .unwrap_or(false)
}
