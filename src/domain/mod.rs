pub mod board;
pub mod stage;
pub mod task;
pub mod transition;
pub mod validation;

pub use board::{create_board, Board, Column};
pub use stage::{Stage, STAGE_ORDER, WIP_LIMIT};
pub use task::{Task, TaskId};
pub use transition::{add_task, move_task, requires_confirmation};
pub use validation::{validate_board, validate_board_json};
