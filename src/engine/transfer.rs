use crate::{
    domain::{Board, CardId, ColumnId},
    engine::{reorder::reorder_cards_within_column, MoveOutcome},
    error::{BoardError, Result},
};

/// Moves a card into another column at `target_index`, or at the end when
/// no index is given.
///
/// When the target is the card's own column this behaves like
/// [`reorder_cards_within_column`], with the default index meaning the last
/// position.
pub fn move_card_across_columns(
    board: &Board,
    card_id: &str,
    target_column_id: &str,
    target_index: Option<usize>,
) -> Result<MoveOutcome> {
    let source = board
        .locate_card(card_id)
        .ok_or_else(|| BoardError::UnknownCard(CardId::from(card_id)))?;
    let target_column_index = board
        .column_index(target_column_id)
        .ok_or_else(|| BoardError::UnknownColumn(ColumnId::from(target_column_id)))?;

    if target_column_index == source.column_index {
        let last = board.columns[target_column_index].cards.len() - 1;
        return reorder_cards_within_column(
            board,
            target_column_id,
            source.card_index,
            target_index.unwrap_or(last),
        );
    }

    let target_len = board.columns[target_column_index].cards.len();
    let insert_at = target_index.unwrap_or(target_len);
    if insert_at > target_len {
        return Err(BoardError::IndexOutOfRange {
            index: insert_at,
            len: target_len,
        });
    }

    let mut next = board.clone();
    let card = next.columns[source.column_index]
        .cards
        .remove(source.card_index);
    next.columns[target_column_index]
        .cards
        .insert(insert_at, card);

    tracing::debug!(
        card_id,
        from = source.column_id.as_str(),
        to = target_column_id,
        index = insert_at,
        "moved card across columns"
    );
    Ok(MoveOutcome::new(board, next))
}
