//! # Kanban Board Core
//!
//! Board mutation engine for drag-and-drop kanban widgets.
//!
//! The crate keeps an ordered hierarchy of columns and cards consistent while
//! a host feeds it drag lifecycle events. It has no dependency on any
//! rendering layer or storage backend: the host supplies the initial board
//! and receives every committed board through a [`BoardObserver`].
//!
//! - [`domain`] holds the board model and its read-only accessors.
//! - [`engine`] holds pure functions that turn one board into the next.
//! - [`session`] holds the drag state machine that decides which engine
//!   operation an event maps to.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use config::{ActivationPolicy, EngineConfig};
pub use domain::{
    board::{Board, CardLocation, Overflow},
    card::{Assignee, Card, CardStatus, Priority},
    column::Column,
    ids::{BoardId, CardId, ColumnId},
};
pub use engine::MoveOutcome;
pub use error::{BoardError, Result};
pub use session::{
    BoardObserver, DragEvent, DragItem, DragItemKind, DragSession, NoopObserver, Sensor,
    SessionPhase, Transition,
};
