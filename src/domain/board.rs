use crate::domain::{
    stage::{Stage, STAGE_ORDER},
    task::Task,
};
use serde::{Deserialize, Serialize};

/// All tasks currently sitting in one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub stage_id: Stage,
    pub label: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column labeled from the stage catalog
    pub fn new(stage: Stage) -> Self {
        Self {
            stage_id: stage,
            label: stage.label().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.tasks.iter().any(|task| task.id.as_str() == task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Kanban board state: one column per stage, in canonical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    /// Builds an empty board conforming to the stage catalog
    pub fn new() -> Self {
        Self {
            columns: STAGE_ORDER.iter().copied().map(Column::new).collect(),
        }
    }

    /// Gets the column for a stage
    pub fn column(&self, stage: Stage) -> Option<&Column> {
        self.columns.iter().find(|col| col.stage_id == stage)
    }

    /// Position of the column currently holding `task_id`
    pub fn column_index_of(&self, task_id: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.contains(task_id))
    }

    /// Stage the task currently sits in
    pub fn stage_of(&self, task_id: &str) -> Option<Stage> {
        self.column_index_of(task_id)
            .map(|index| self.columns[index].stage_id)
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(|col| col.tasks.iter())
            .find(|task| task.id.as_str() == task_id)
    }

    /// Total number of tasks across every column
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns an empty board with one column per stage
pub fn create_board() -> Board {
    Board::new()
}
