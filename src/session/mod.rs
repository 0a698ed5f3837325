//! Drag session state machine.
//!
//! A [`DragSession`] owns the committed board for one widget instance and
//! turns the adapter's drag lifecycle events into engine operations.
//! While a gesture is in flight, cross-column hovers are applied to a
//! preview board only. The committed board changes on drop, and a cancel
//! simply throws the preview away.

use crate::{
    config::EngineConfig,
    domain::{Board, Card, CardId, Column, ColumnId, Overflow, SortField, SortOrder},
    engine::{self, MoveOutcome},
    error::{BoardError, Result},
};

pub mod event;
pub mod observer;

pub use event::{DragEvent, DragItem, DragItemKind, Sensor, Transition};
pub use observer::{BoardObserver, NoopObserver};

/// A gesture in progress
#[derive(Debug, Clone)]
pub struct ActiveDrag {
    pub item: DragItem,
    /// Board as it would look if the item were dropped now
    pub preview: Board,
    /// Target most recently reported by `drag_over`
    pub hover: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Coarse view of the session state for hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Dragging,
    Hovering,
}

pub struct DragSession<O = NoopObserver> {
    board: Board,
    config: EngineConfig,
    observer: O,
    state: DragState,
}

impl DragSession<NoopObserver> {
    /// Session without host callbacks
    pub fn detached(board: Board) -> Result<Self> {
        Self::new(board, NoopObserver)
    }
}

impl<O: BoardObserver> DragSession<O> {
    pub fn new(board: Board, observer: O) -> Result<Self> {
        Self::with_config(board, EngineConfig::default(), observer)
    }

    /// Starts a session over a host-supplied board after checking its
    /// invariants
    pub fn with_config(board: Board, config: EngineConfig, observer: O) -> Result<Self> {
        board.validate()?;
        Ok(Self {
            board,
            config,
            observer,
            state: DragState::Idle,
        })
    }

    /// The committed board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board to display: the preview while dragging, otherwise the
    /// committed board
    pub fn display_board(&self) -> &Board {
        match &self.state {
            DragState::Dragging(active) => &active.preview,
            DragState::Idle => &self.board,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            DragState::Idle => SessionPhase::Idle,
            DragState::Dragging(ActiveDrag { hover: None, .. }) => SessionPhase::Dragging,
            DragState::Dragging(ActiveDrag { hover: Some(_), .. }) => SessionPhase::Hovering,
        }
    }

    pub fn active_item(&self) -> Option<&DragItem> {
        match &self.state {
            DragState::Dragging(active) => Some(&active.item),
            DragState::Idle => None,
        }
    }

    /// WIP-limit flags of the committed board
    pub fn overflow(&self) -> Overflow {
        self.board.overflow()
    }

    /// Ends the session, handing the committed board back to the host
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Dispatches one adapter event
    pub fn handle(&mut self, event: DragEvent) -> Result<Transition> {
        let result = match event {
            DragEvent::DragStart {
                item_id,
                item_type,
                sensor,
            } => self.drag_start_with(&item_id, item_type, sensor),
            DragEvent::DragOver { active_id, over_id } => {
                self.drag_over(&active_id, over_id.as_deref())
            }
            DragEvent::DragEnd { active_id, over_id } => {
                self.drag_end(&active_id, over_id.as_deref())
            }
            DragEvent::DragCancel => Ok(self.drag_cancel()),
        };
        if let Err(err) = &result {
            tracing::debug!(error = %err, "drag event rejected");
        }
        result
    }

    /// Begins a pointer gesture
    pub fn drag_start(&mut self, item_id: &str, kind: DragItemKind) -> Result<Transition> {
        self.drag_start_with(item_id, kind, Sensor::Pointer)
    }

    /// Begins a gesture from the given sensor. Keyboard starts are refused
    /// when the config disables keyboard dragging.
    pub fn drag_start_with(
        &mut self,
        item_id: &str,
        kind: DragItemKind,
        sensor: Sensor,
    ) -> Result<Transition> {
        if matches!(self.state, DragState::Dragging(_)) {
            return Err(BoardError::DragInProgress);
        }
        if sensor == Sensor::Keyboard && !self.config.keyboard_enabled {
            return Err(BoardError::SensorDisabled(sensor));
        }

        let item = match kind {
            DragItemKind::Card => {
                let location = self
                    .board
                    .locate_card(item_id)
                    .ok_or_else(|| BoardError::UnknownCard(CardId::from(item_id)))?;
                DragItem::Card {
                    card_id: CardId::from(item_id),
                    origin_column: location.column_id,
                }
            }
            DragItemKind::Column => {
                let column = self
                    .board
                    .column(item_id)
                    .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(item_id)))?;
                DragItem::Column {
                    column_id: column.id.clone(),
                }
            }
        };

        tracing::debug!(item_id, kind = %kind, sensor = %sensor, "drag started");
        self.state = DragState::Dragging(ActiveDrag {
            item: item.clone(),
            preview: self.board.clone(),
            hover: None,
        });
        Ok(Transition::Started(item))
    }

    /// Handles the pointer entering a new target.
    ///
    /// A card hovering over a different column is moved there in the
    /// preview, at the hovered card's index or at the end when hovering the
    /// column itself. Column drags never change the preview before drop.
    pub fn drag_over(&mut self, active_id: &str, over_id: Option<&str>) -> Result<Transition> {
        let active = active_drag(&mut self.state, active_id)?;

        let over_id = match over_id {
            Some(id) => id,
            None => {
                active.hover = None;
                return Ok(Transition::Unchanged);
            }
        };

        let card_id = match &active.item {
            DragItem::Card { card_id, .. } if over_id != active_id => card_id.clone(),
            _ => {
                active.hover = Some(over_id.to_string());
                return Ok(Transition::Unchanged);
            }
        };

        let current = active
            .preview
            .locate_card(card_id.as_str())
            .ok_or_else(|| BoardError::UnknownCard(card_id.clone()))?;
        let Some(target) = active.preview.resolve_container(over_id) else {
            tracing::debug!(over_id, "hover target is not on the board");
            active.hover = Some(over_id.to_string());
            return Ok(Transition::Unchanged);
        };
        if target == current.column_id {
            active.hover = Some(over_id.to_string());
            return Ok(Transition::Unchanged);
        }

        let target_index = active
            .preview
            .column(target.as_str())
            .and_then(|column| column.position_of(over_id));
        let outcome = engine::move_card_across_columns(
            &active.preview,
            card_id.as_str(),
            target.as_str(),
            target_index,
        )?;

        active.preview = outcome.board;
        active.hover = Some(over_id.to_string());
        self.observer.on_preview(&active.preview, &outcome.overflow);
        Ok(Transition::Previewed {
            overflow: outcome.overflow,
        })
    }

    /// Completes the gesture.
    ///
    /// Dropping outside any known target behaves like a cancel. A failed
    /// engine call leaves the gesture active so the host can retry or cancel.
    pub fn drag_end(&mut self, active_id: &str, over_id: Option<&str>) -> Result<Transition> {
        let active = active_drag(&mut self.state, active_id)?;

        let Some(over_id) = over_id else {
            return Ok(self.drag_cancel());
        };

        // Dropping an item on itself keeps whatever the hovers produced
        let finished = if over_id == active_id {
            None
        } else {
            if active.preview.resolve_container(over_id).is_none() {
                tracing::debug!(over_id, "dropped outside the board");
                return Ok(self.drag_cancel());
            }
            match &active.item {
                DragItem::Column { column_id } => {
                    drop_column(&active.preview, column_id, over_id)?
                }
                DragItem::Card { card_id, .. } => drop_card(&active.preview, card_id, over_id)?,
            }
        };

        match std::mem::take(&mut self.state) {
            DragState::Dragging(active) => {
                let board = finished.unwrap_or(active.preview);
                Ok(self.commit_drop(active.item, board))
            }
            DragState::Idle => Err(BoardError::NoActiveDrag),
        }
    }

    /// Abandons the gesture; the committed board is left as it was before
    /// the drag started
    pub fn drag_cancel(&mut self) -> Transition {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(active) => {
                tracing::debug!(item_id = active.item.id(), "drag cancelled");
                Transition::Cancelled
            }
            DragState::Idle => Transition::Unchanged,
        }
    }

    /// Appends a new card with a generated id to a column.
    ///
    /// A blank title falls back to the configured default.
    pub fn add_card(&mut self, column_id: &str, title: &str) -> Result<CardId> {
        self.ensure_idle()?;
        let title = if title.trim().is_empty() {
            self.config.default_card_title.clone()
        } else {
            title.trim().to_string()
        };
        let card = Card::new(CardId::generate(), title);
        let id = card.id.clone();
        let outcome = engine::add_card(&self.board, column_id, card)?;
        self.commit(outcome);
        Ok(id)
    }

    /// Appends an empty column with a generated id
    pub fn add_column(&mut self, title: &str, wip_limit: Option<usize>) -> Result<ColumnId> {
        self.ensure_idle()?;
        let mut column = Column::new(ColumnId::generate(), title.trim());
        column.wip_limit = wip_limit;
        let id = column.id.clone();
        let outcome = engine::add_column(&self.board, column)?;
        self.commit(outcome);
        Ok(id)
    }

    pub fn remove_card(&mut self, card_id: &str) -> Result<Overflow> {
        self.ensure_idle()?;
        let outcome = engine::remove_card(&self.board, card_id)?;
        Ok(self.commit(outcome))
    }

    pub fn remove_column(&mut self, column_id: &str) -> Result<Overflow> {
        self.ensure_idle()?;
        let outcome = engine::remove_column(&self.board, column_id)?;
        Ok(self.commit(outcome))
    }

    pub fn sort_column(
        &mut self,
        column_id: &str,
        field: SortField,
        order: SortOrder,
    ) -> Result<Overflow> {
        self.ensure_idle()?;
        let outcome = engine::sort_column(&self.board, column_id, field, order)?;
        Ok(self.commit(outcome))
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.state {
            DragState::Idle => Ok(()),
            DragState::Dragging(_) => Err(BoardError::DragInProgress),
        }
    }

    fn commit(&mut self, outcome: MoveOutcome) -> Overflow {
        self.board = outcome.board;
        self.observer.on_board_change(&self.board);
        outcome.overflow
    }

    fn commit_drop(&mut self, item: DragItem, board: Board) -> Transition {
        if board == self.board {
            tracing::debug!(item_id = item.id(), "drop left the board unchanged");
            return Transition::Dropped;
        }

        self.board = board;
        let overflow = self.board.overflow();
        tracing::info!(item_id = item.id(), kind = %item.kind(), "drop committed");
        self.observer.on_board_change(&self.board);

        if let DragItem::Card {
            card_id,
            origin_column,
        } = &item
        {
            if let Some(location) = self.board.locate_card(card_id.as_str()) {
                if &location.column_id != origin_column {
                    self.observer.on_card_move(card_id, &location.column_id);
                }
            }
        }
        Transition::Committed { overflow }
    }
}

/// The in-flight gesture, provided the event names the item being dragged
fn active_drag<'a>(state: &'a mut DragState, active_id: &str) -> Result<&'a mut ActiveDrag> {
    match state {
        DragState::Idle => Err(BoardError::NoActiveDrag),
        DragState::Dragging(active) if active.item.id() != active_id => {
            Err(BoardError::ActiveItemMismatch {
                expected: active.item.id().to_string(),
                got: active_id.to_string(),
            })
        }
        DragState::Dragging(active) => Ok(active),
    }
}

/// Column drop: move the dragged column to the index of the column under the
/// pointer. Returns `None` when the order is unchanged.
fn drop_column(preview: &Board, column_id: &ColumnId, over_id: &str) -> Result<Option<Board>> {
    let from = preview
        .column_index(column_id.as_str())
        .ok_or_else(|| BoardError::UnknownColumn(column_id.clone()))?;
    let over_column = preview
        .resolve_container(over_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(over_id)))?;
    let to = preview
        .column_index(over_column.as_str())
        .ok_or_else(|| BoardError::UnknownColumn(over_column.clone()))?;

    if from == to {
        return Ok(None);
    }
    Ok(Some(engine::reorder_columns(preview, from, to)?.board))
}

/// Card drop: reorder within the column when dropped on a sibling card,
/// or relocate when the drop target is a column no hover reached.
/// Returns `None` when the preview already holds the final layout.
fn drop_card(preview: &Board, card_id: &CardId, over_id: &str) -> Result<Option<Board>> {
    let current = preview
        .locate_card(card_id.as_str())
        .ok_or_else(|| BoardError::UnknownCard(card_id.clone()))?;
    let target = preview
        .resolve_container(over_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(over_id)))?;

    if target != current.column_id {
        let target_index = preview
            .column(target.as_str())
            .and_then(|column| column.position_of(over_id));
        let outcome = engine::move_card_across_columns(
            preview,
            card_id.as_str(),
            target.as_str(),
            target_index,
        )?;
        return Ok(Some(outcome.board));
    }

    let over_index = preview
        .column(target.as_str())
        .and_then(|column| column.position_of(over_id));
    match over_index {
        Some(to) if to != current.card_index => {
            let outcome = engine::reorder_cards_within_column(
                preview,
                target.as_str(),
                current.card_index,
                to,
            )?;
            Ok(Some(outcome.board))
        }
        _ => Ok(None),
    }
}
