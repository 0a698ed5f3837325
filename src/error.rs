use crate::domain::{CardId, ColumnId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    UnknownColumn(ColumnId),

    #[error("Card not found: {0}")]
    UnknownCard(CardId),

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("A drag is already in progress")]
    DragInProgress,

    #[error("Drags from the {0} sensor are disabled")]
    SensorDisabled(crate::session::Sensor),

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Event targets {got} but the active drag item is {expected}")]
    ActiveItemMismatch { expected: String, got: String },

    #[error("Invalid value {value:?} for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BoardError {
    /// Errors a single engine call can recover from without ending the session
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownColumn(_)
                | Self::UnknownCard(_)
                | Self::IndexOutOfRange { .. }
                | Self::DuplicateId(_)
        )
    }
}
