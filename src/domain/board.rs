use crate::{
    domain::{
        card::Card,
        column::Column,
        ids::{BoardId, CardId, ColumnId},
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// WIP-limit advisory flags, one entry per column that declares a limit
pub type Overflow = BTreeMap<ColumnId, bool>;

/// Where a card currently sits on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLocation {
    pub column_id: ColumnId,
    pub column_index: usize,
    pub card_index: usize,
}

/// Kanban board state: an ordered list of columns, each holding an ordered
/// list of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Builds a board from host-supplied columns, rejecting duplicate ids
    pub fn with_columns(
        id: impl Into<BoardId>,
        title: impl Into<String>,
        columns: Vec<Column>,
    ) -> Result<Self> {
        let board = Self {
            id: id.into(),
            title: title.into(),
            columns,
        };
        board.validate()?;
        Ok(board)
    }

    /// Board seeded with the usual four workflow columns
    pub fn default_layout(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::generate(),
            title: title.into(),
            columns: vec![
                Column::new("todo", "To Do"),
                Column::new("in-progress", "In Progress"),
                Column::new("review", "Review"),
                Column::new("done", "Done"),
            ],
        }
    }

    /// Parses a JSON board record and checks its invariants
    pub fn from_json(json: &str) -> Result<Self> {
        let board: Board = serde_json::from_str(json)?;
        board.validate()?;
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every id on the board is unique.
    ///
    /// Card and column ids share one namespace: drag events name either kind
    /// by id alone, so a card may not reuse a column's id.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for column in &self.columns {
            if column.id.as_str().is_empty() {
                return Err(BoardError::InvalidBoard("column with empty id".into()));
            }
            if !column_ids.insert(column.id.as_str()) {
                return Err(BoardError::InvalidBoard(format!(
                    "column id {} appears more than once",
                    column.id
                )));
            }
            for card in &column.cards {
                if card.id.as_str().is_empty() {
                    return Err(BoardError::InvalidBoard(format!(
                        "card with empty id in column {}",
                        column.id
                    )));
                }
                if !card_ids.insert(card.id.as_str()) {
                    return Err(BoardError::InvalidBoard(format!(
                        "card id {} appears more than once",
                        card.id
                    )));
                }
            }
        }
        if let Some(clash) = card_ids.iter().find(|id| column_ids.contains(*id)) {
            return Err(BoardError::InvalidBoard(format!(
                "id {clash} names both a card and a column"
            )));
        }
        Ok(())
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id.as_str() == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id.as_str() == id)
    }

    /// Finds a card by scanning every column's list
    pub fn locate_card(&self, id: &str) -> Option<CardLocation> {
        let mut hits = self
            .columns
            .iter()
            .enumerate()
            .filter_map(|(column_index, column)| {
                column.position_of(id).map(|card_index| CardLocation {
                    column_id: column.id.clone(),
                    column_index,
                    card_index,
                })
            });
        let found = hits.next();
        debug_assert!(hits.next().is_none(), "card {id} is held by two columns");
        found
    }

    /// Gets a card together with the column holding it and its index there
    pub fn card(&self, id: &str) -> Option<(&Card, CardLocation)> {
        let location = self.locate_card(id)?;
        let card = &self.columns[location.column_index].cards[location.card_index];
        Some((card, location))
    }

    pub fn contains_card(&self, id: &str) -> bool {
        self.locate_card(id).is_some()
    }

    pub fn card_count(&self, column_id: &str) -> Option<usize> {
        self.column(column_id).map(|c| c.cards.len())
    }

    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Resolves a drop/hover target to a column.
    ///
    /// The id may name a column directly or a card, in which case the card's
    /// column is returned.
    pub fn resolve_container(&self, id: &str) -> Option<ColumnId> {
        if let Some(column) = self.column(id) {
            return Some(column.id.clone());
        }
        self.locate_card(id).map(|loc| loc.column_id)
    }

    /// WIP-limit flags for every column that declares a limit
    pub fn overflow(&self) -> Overflow {
        self.columns
            .iter()
            .filter(|c| c.wip_limit.is_some())
            .map(|c| (c.id.clone(), c.is_over_limit()))
            .collect()
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.columns.iter().flat_map(|c| c.cards.iter().map(|card| &card.id))
    }
}
