use kanban_board_core::{Board, BoardObserver, Card, CardId, Column, ColumnId};

/// Observer that keeps every notification for later assertions
#[derive(Default)]
pub struct RecordingObserver {
    pub changes: Vec<Board>,
    pub moves: Vec<(CardId, ColumnId)>,
}

impl BoardObserver for RecordingObserver {
    fn on_board_change(&mut self, board: &Board) {
        self.changes.push(board.clone());
    }

    fn on_card_move(&mut self, card_id: &CardId, column_id: &ColumnId) {
        self.moves.push((card_id.clone(), column_id.clone()));
    }
}

/// Builds a board from `(column id, [card ids])` pairs
#[allow(dead_code)]
pub fn board_of(columns: &[(&str, &[&str])]) -> Board {
    let columns = columns
        .iter()
        .map(|(id, cards)| {
            Column::new(*id, id.to_uppercase())
                .with_cards(cards.iter().map(|c| Card::new(*c, format!("Card {c}"))).collect())
        })
        .collect();
    Board::with_columns("board", "Test board", columns).expect("valid test board")
}

/// Card ids of one column, in order
#[allow(dead_code)]
pub fn card_ids(board: &Board, column: &str) -> Vec<String> {
    board
        .column(column)
        .map(|c| c.cards.iter().map(|card| card.id.to_string()).collect())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn column_ids(board: &Board) -> Vec<String> {
    board.columns.iter().map(|c| c.id.to_string()).collect()
}
