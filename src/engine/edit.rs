use crate::{
    domain::{
        sorting::{sort_cards, SortField, SortOrder},
        Board, Card, CardId, Column, ColumnId,
    },
    engine::MoveOutcome,
    error::{BoardError, Result},
};
use std::collections::HashSet;

/// Appends a card to the end of a column
pub fn add_card(board: &Board, column_id: &str, card: Card) -> Result<MoveOutcome> {
    if card.id.as_str().trim().is_empty() {
        return Err(BoardError::InvalidId(card.id.to_string()));
    }
    // Adapters report card and column ids in one namespace
    if board.contains_card(card.id.as_str()) || board.column(card.id.as_str()).is_some() {
        return Err(BoardError::DuplicateId(card.id.to_string()));
    }
    let column_index = board
        .column_index(column_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(column_id)))?;

    let mut next = board.clone();
    tracing::debug!(card_id = card.id.as_str(), column_id, "added card");
    next.columns[column_index].cards.push(card);
    Ok(MoveOutcome::new(board, next))
}

/// Appends a column, together with any cards it already holds
pub fn add_column(board: &Board, column: Column) -> Result<MoveOutcome> {
    if column.id.as_str().trim().is_empty() {
        return Err(BoardError::InvalidId(column.id.to_string()));
    }
    if board.column(column.id.as_str()).is_some() || board.contains_card(column.id.as_str()) {
        return Err(BoardError::DuplicateId(column.id.to_string()));
    }
    let existing: HashSet<&CardId> = board.card_ids().collect();
    let mut incoming = HashSet::new();
    for card in &column.cards {
        let id = card.id.as_str();
        if id.trim().is_empty() {
            return Err(BoardError::InvalidId(card.id.to_string()));
        }
        if existing.contains(&card.id)
            || !incoming.insert(&card.id)
            || id == column.id.as_str()
            || board.column(id).is_some()
        {
            return Err(BoardError::DuplicateId(card.id.to_string()));
        }
    }

    let mut next = board.clone();
    tracing::debug!(column_id = column.id.as_str(), "added column");
    next.columns.push(column);
    Ok(MoveOutcome::new(board, next))
}

/// Deletes a card from whichever column holds it
pub fn remove_card(board: &Board, card_id: &str) -> Result<MoveOutcome> {
    let location = board
        .locate_card(card_id)
        .ok_or_else(|| BoardError::UnknownCard(CardId::from(card_id)))?;

    let mut next = board.clone();
    next.columns[location.column_index]
        .cards
        .remove(location.card_index);

    tracing::debug!(card_id, column_id = location.column_id.as_str(), "removed card");
    Ok(MoveOutcome::new(board, next))
}

/// Deletes a column and every card in it
pub fn remove_column(board: &Board, column_id: &str) -> Result<MoveOutcome> {
    let column_index = board
        .column_index(column_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(column_id)))?;

    let mut next = board.clone();
    let removed = next.columns.remove(column_index);

    tracing::debug!(column_id, cards = removed.cards.len(), "removed column");
    Ok(MoveOutcome::new(board, next))
}

/// Re-orders one column's cards by a card field
pub fn sort_column(
    board: &Board,
    column_id: &str,
    field: SortField,
    order: SortOrder,
) -> Result<MoveOutcome> {
    let column_index = board
        .column_index(column_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(column_id)))?;

    let mut next = board.clone();
    sort_cards(&mut next.columns[column_index].cards, field, order);

    tracing::debug!(column_id, ?field, ?order, "sorted column");
    Ok(MoveOutcome::new(board, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn board() -> Board {
        Board::with_columns(
            "b",
            "Board",
            vec![
                Column::new("todo", "To Do")
                    .with_cards(vec![Card::new("c1", "1"), Card::new("c2", "2")])
                    .with_wip_limit(2),
                Column::new("done", "Done"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_add_card_appends() {
        let outcome = add_card(&board(), "done", Card::new("c3", "3")).unwrap();
        assert_eq!(outcome.board.card_count("done"), Some(1));
        assert_eq!(outcome.board.locate_card("c3").unwrap().card_index, 0);
    }

    #[test]
    fn test_add_card_duplicate_id() {
        let original = board();
        let err = add_card(&original, "done", Card::new("c1", "again")).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateId(ref id) if id == "c1"));
        assert_eq!(original.total_cards(), 2);
    }

    #[test]
    fn test_add_card_empty_id() {
        let err = add_card(&board(), "done", Card::new("", "blank")).unwrap_err();
        assert!(matches!(err, BoardError::InvalidId(_)));

        let err = add_card(&board(), "done", Card::new("  ", "blank")).unwrap_err();
        assert!(matches!(err, BoardError::InvalidId(_)));
    }

    #[test]
    fn test_add_card_id_clashing_with_column() {
        let err = add_card(&board(), "done", Card::new("todo", "clash")).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateId(ref id) if id == "todo"));
    }

    #[test]
    fn test_add_column_id_clashing_with_card() {
        assert!(matches!(
            add_column(&board(), Column::new("c1", "Clash")),
            Err(BoardError::DuplicateId(_))
        ));
        assert!(matches!(
            add_column(
                &board(),
                Column::new("x", "X").with_cards(vec![Card::new("done", "clash")])
            ),
            Err(BoardError::DuplicateId(_))
        ));
        assert!(matches!(
            add_column(
                &board(),
                Column::new("x", "X").with_cards(vec![Card::new("x", "self")])
            ),
            Err(BoardError::DuplicateId(_))
        ));
        assert!(matches!(
            add_column(&board(), Column::new("", "Blank")),
            Err(BoardError::InvalidId(_))
        ));
    }

    #[test]
    fn test_add_card_unknown_column() {
        let err = add_card(&board(), "archive", Card::new("c9", "9")).unwrap_err();
        assert!(matches!(err, BoardError::UnknownColumn(_)));
    }

    #[test]
    fn test_overflow_set_then_cleared() {
        let over = add_card(&board(), "todo", Card::new("c3", "3")).unwrap();
        assert_eq!(over.overflow.get(&ColumnId::from("todo")), Some(&true));

        let back = remove_card(&over.board, "c1").unwrap();
        assert_eq!(back.overflow.get(&ColumnId::from("todo")), Some(&false));
    }

    #[test]
    fn test_add_column() {
        let outcome = add_column(&board(), Column::new("review", "Review")).unwrap();
        assert_eq!(outcome.board.columns.last().unwrap().id.as_str(), "review");

        assert!(matches!(
            add_column(&board(), Column::new("todo", "Dup")),
            Err(BoardError::DuplicateId(_))
        ));
        assert!(matches!(
            add_column(
                &board(),
                Column::new("x", "X").with_cards(vec![Card::new("c2", "dup")])
            ),
            Err(BoardError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_remove_card_unknown() {
        assert!(matches!(
            remove_card(&board(), "ghost"),
            Err(BoardError::UnknownCard(_))
        ));
    }

    #[test]
    fn test_remove_column_takes_cards() {
        let outcome = remove_column(&board(), "todo").unwrap();
        assert_eq!(outcome.board.columns.len(), 1);
        assert_eq!(outcome.board.total_cards(), 0);
        assert!(outcome.overflow.is_empty());
    }

    #[test]
    fn test_sort_column() {
        let b = add_card(
            &board(),
            "done",
            Card::new("lo", "lo").with_priority(Priority::Low),
        )
        .unwrap()
        .board;
        let b = add_card(&b, "done", Card::new("hi", "hi").with_priority(Priority::High))
            .unwrap()
            .board;

        let outcome = sort_column(&b, "done", SortField::Priority, SortOrder::Descending).unwrap();
        let ids: Vec<_> = outcome
            .board
            .column("done")
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["hi", "lo"]);
    }
}
