//! Acceptance checks for boards arriving from outside the process.
//!
//! Persisted state is untrusted. [`validate_board`] is the only way a stored
//! value becomes a [`Board`]; the transition engine relies on that and never
//! re-checks the boards it receives.

use crate::domain::{board::Board, stage::STAGE_ORDER};
use crate::error::ValidationError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Validates an untrusted value as a well-formed board.
///
/// Checks run in priority order and stop at the first violation: overall
/// shape, column count, column order, field types inside columns and tasks,
/// then task id uniqueness across the whole board.
pub fn validate_board(candidate: &Value) -> Result<Board, ValidationError> {
    let columns = candidate
        .as_object()
        .ok_or_else(|| ValidationError::new("Board must be an object"))?
        .get("columns")
        .ok_or_else(|| ValidationError::new("Board is missing columns"))?
        .as_array()
        .ok_or_else(|| ValidationError::new("Board columns must be an array"))?;

    if columns.len() != STAGE_ORDER.len() {
        return Err(ValidationError::new("Board must contain all columns"));
    }

    for (index, (column, stage)) in columns.iter().zip(STAGE_ORDER).enumerate() {
        if column.get("stageId").and_then(Value::as_str) != Some(stage.id()) {
            return Err(ValidationError::new(format!(
                "Column order mismatch at position {}",
                index
            )));
        }
    }

    let board =
        Board::deserialize(candidate).map_err(|err| ValidationError::new(err.to_string()))?;

    if has_duplicate_task_ids(&board) {
        return Err(ValidationError::new("Duplicate task id found"));
    }

    Ok(board)
}

/// Parses raw persisted text and validates the result
pub fn validate_board_json(raw: &str) -> Result<Board, ValidationError> {
    let candidate: Value =
        serde_json::from_str(raw).map_err(|_| ValidationError::new("Invalid board data"))?;
    validate_board(&candidate)
}

fn has_duplicate_task_ids(board: &Board) -> bool {
    let mut seen = HashSet::new();
    board
        .columns
        .iter()
        .flat_map(|col| col.tasks.iter())
        .any(|task| !seen.insert(task.id.as_str()))
}
