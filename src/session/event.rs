use crate::domain::{CardId, ColumnId, Overflow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of item an input adapter reports at drag start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragItemKind {
    Card,
    Column,
}

impl fmt::Display for DragItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Physical input that began a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensor {
    #[default]
    Pointer,
    Keyboard,
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer => write!(f, "pointer"),
            Self::Keyboard => write!(f, "keyboard"),
        }
    }
}

/// Normalized drag lifecycle event delivered by an input adapter.
///
/// `over_id` is `None` when the pointer is outside every droppable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DragEvent {
    DragStart {
        item_id: String,
        item_type: DragItemKind,
        #[serde(default)]
        sensor: Sensor,
    },
    DragOver {
        active_id: String,
        over_id: Option<String>,
    },
    DragEnd {
        active_id: String,
        over_id: Option<String>,
    },
    DragCancel,
}

/// The item captured at drag start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Card {
        card_id: CardId,
        /// Column holding the card when the gesture began
        origin_column: ColumnId,
    },
    Column {
        column_id: ColumnId,
    },
}

impl DragItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Card { card_id, .. } => card_id.as_str(),
            Self::Column { column_id } => column_id.as_str(),
        }
    }

    pub fn kind(&self) -> DragItemKind {
        match self {
            Self::Card { .. } => DragItemKind::Card,
            Self::Column { .. } => DragItemKind::Column,
        }
    }
}

/// What a single event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A gesture began
    Started(DragItem),
    /// The preview board changed; nothing was committed
    Previewed { overflow: Overflow },
    /// The event was accepted but changed nothing
    Unchanged,
    /// The drop changed the committed board
    Committed { overflow: Overflow },
    /// The drop completed without changing the board
    Dropped,
    /// The gesture was abandoned and its preview discarded
    Cancelled,
}
