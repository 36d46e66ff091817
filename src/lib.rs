//! # Taskboard Core
//!
//! Workflow rules for a four-stage task board (BACKLOG → TODO → DOING → DONE).
//!
//! The crate is split into a pure core and thin I/O around it:
//!
//! - [`domain`] holds the stage catalog, the board factory, the transition
//!   engine ([`add_task`], [`move_task`]) and the validator for untrusted
//!   persisted state ([`validate_board`]). Nothing in it performs I/O.
//! - [`storage`] defines the [`StateGateway`] load/save capability with file,
//!   in-memory and (feature `sqlite-storage`) SQLite implementations.
//! - [`session`] ties the two together for callers that want one owner of the
//!   current board that persists every accepted change.

pub mod config;
pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::{Config, StorageConfig};
pub use domain::{
    add_task, create_board, move_task, requires_confirmation, validate_board,
    validate_board_json, Board, Column, Stage, Task, TaskId, STAGE_ORDER, WIP_LIMIT,
};
pub use error::{BoardError, Result, TransitionError, ValidationError};
pub use session::{BoardSession, MoveOutcome};
pub use storage::StateGateway;
