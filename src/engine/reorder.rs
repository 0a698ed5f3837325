use crate::{
    domain::{Board, ColumnId},
    engine::{array_move, MoveOutcome},
    error::{BoardError, Result},
};

/// Moves the column at `from` to `to` within the board's column list
pub fn reorder_columns(board: &Board, from: usize, to: usize) -> Result<MoveOutcome> {
    let mut next = board.clone();
    array_move(&mut next.columns, from, to)?;

    tracing::debug!(from, to, "reordered columns");
    Ok(MoveOutcome::new(board, next))
}

/// Moves a card from one position to another inside a single column
pub fn reorder_cards_within_column(
    board: &Board,
    column_id: &str,
    from: usize,
    to: usize,
) -> Result<MoveOutcome> {
    let column_index = board
        .column_index(column_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(column_id)))?;

    let mut next = board.clone();
    array_move(&mut next.columns[column_index].cards, from, to)?;

    tracing::debug!(column_id, from, to, "reordered cards");
    Ok(MoveOutcome::new(board, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, Column};

    fn board() -> Board {
        Board::with_columns(
            "b",
            "Board",
            vec![
                Column::new("a", "A").with_cards(vec![
                    Card::new("c1", "1"),
                    Card::new("c2", "2"),
                    Card::new("c3", "3"),
                ]),
                Column::new("b", "B"),
                Column::new("c", "C"),
            ],
        )
        .unwrap()
    }

    fn column_order(board: &Board) -> Vec<&str> {
        board.columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_columns() {
        let outcome = reorder_columns(&board(), 2, 0).unwrap();
        assert_eq!(column_order(&outcome.board), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_columns_noop() {
        let original = board();
        let outcome = reorder_columns(&original, 1, 1).unwrap();
        assert_eq!(outcome.board, original);
    }

    #[test]
    fn test_reorder_columns_out_of_range() {
        let original = board();
        let err = reorder_columns(&original, 0, 3).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_reorder_cards_within_column() {
        let outcome = reorder_cards_within_column(&board(), "a", 0, 2).unwrap();
        let ids: Vec<_> = outcome.board.columns[0]
            .cards
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn test_reorder_cards_noop() {
        let original = board();
        let outcome = reorder_cards_within_column(&original, "a", 2, 2).unwrap();
        assert_eq!(outcome.board, original);
    }

    #[test]
    fn test_reorder_cards_unknown_column() {
        let original = board();
        let snapshot = original.clone();
        let err = reorder_cards_within_column(&original, "nonexistent", 0, 1).unwrap_err();
        assert!(matches!(err, BoardError::UnknownColumn(ref id) if id.as_str() == "nonexistent"));
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_reorder_cards_in_empty_column() {
        let err = reorder_cards_within_column(&board(), "b", 0, 0).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 0, len: 0 }));
    }
}
