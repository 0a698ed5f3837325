//! Pure board transformations.
//!
//! Every operation takes a board by reference and returns a new board
//! wrapped in a [`MoveOutcome`]. The input is never modified, so a failed
//! operation leaves the caller's board exactly as it was.

use crate::{
    domain::{Board, ColumnId, Overflow},
    error::{BoardError, Result},
};

pub mod edit;
pub mod reorder;
pub mod transfer;

pub use edit::{add_card, add_column, remove_card, remove_column, sort_column};
pub use reorder::{reorder_cards_within_column, reorder_columns};
pub use transfer::move_card_across_columns;

/// Result of a successful engine operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// WIP-limit flags of the new board. Advisory only: exceeding a limit
    /// never fails an operation.
    pub overflow: Overflow,
}

impl MoveOutcome {
    pub(crate) fn new(before: &Board, board: Board) -> Self {
        let overflow = board.overflow();
        for column_id in newly_overflowing(before, &overflow) {
            tracing::warn!(column_id = column_id.as_str(), "column exceeds its WIP limit");
        }
        Self { board, overflow }
    }

    /// Whether the given column is over its WIP limit
    pub fn is_overflowing(&self, column_id: &str) -> bool {
        self.overflow.get(column_id).copied().unwrap_or(false)
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Columns over their limit in `after` that were within it in `before`
pub(crate) fn newly_overflowing<'a>(
    before: &Board,
    after: &'a Overflow,
) -> impl Iterator<Item = &'a ColumnId> + 'a {
    let was_over: Vec<ColumnId> = before
        .overflow()
        .into_iter()
        .filter_map(|(id, over)| over.then_some(id))
        .collect();
    after
        .iter()
        .filter(move |(id, over)| **over && !was_over.contains(id))
        .map(|(id, _)| id)
}

/// Moves the element at `from` to `to`, shifting the elements in between by
/// one place.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}
