use crate::domain::{Board, CardId, ColumnId, Overflow};

/// Host-side hooks invoked synchronously by a drag session.
///
/// Persistence and display are the host's concern; a session never retries
/// or rolls back because of something the host did with a board.
pub trait BoardObserver {
    /// Called after every committed mutation with the full new board
    fn on_board_change(&mut self, board: &Board);

    /// Called when a committed mutation changed which column holds a card
    fn on_card_move(&mut self, _card_id: &CardId, _column_id: &ColumnId) {}

    /// Called when the in-flight preview changes during a drag.
    /// Preview boards must not be persisted.
    fn on_preview(&mut self, _board: &Board, _overflow: &Overflow) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BoardObserver for NoopObserver {
    fn on_board_change(&mut self, _board: &Board) {}
}

impl<F> BoardObserver for F
where
    F: FnMut(&Board),
{
    fn on_board_change(&mut self, board: &Board) {
        self(board)
    }
}
