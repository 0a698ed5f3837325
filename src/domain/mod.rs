pub mod board;
pub mod card;
pub mod column;
pub mod ids;
pub mod sorting;

pub use board::{Board, CardLocation, Overflow};
pub use card::{Assignee, Card, CardStatus, Priority};
pub use column::Column;
pub use ids::{BoardId, CardId, ColumnId};
pub use sorting::{sort_cards, SortField, SortOrder};
