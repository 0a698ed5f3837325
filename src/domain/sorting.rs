use crate::domain::card::Card;
use std::cmp::Ordering;
use std::str::FromStr;

/// Fields available for sorting the cards of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Priority,
    DueDate,
    Status,
    EstimatedTime,
    Attachments,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "priority" => Ok(SortField::Priority),
            "due" | "due-date" => Ok(SortField::DueDate),
            "status" => Ok(SortField::Status),
            "estimate" | "estimated-time" => Ok(SortField::EstimatedTime),
            "attachments" => Ok(SortField::Attachments),
            _ => Err(format!(
                "Invalid sort field '{}'. Valid fields: title, priority, due-date, status, estimated-time, attachments",
                s
            )),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order '{}'. Valid orders: asc, desc",
                s
            )),
        }
    }
}

/// Sorts cards in place by the given field and direction.
///
/// The sort is stable, so cards that compare equal keep their relative
/// order. Cards missing the sort field always end up last, in either
/// direction.
///
/// # Examples
/// ```
/// use kanban_board_core::domain::sorting::{sort_cards, SortField, SortOrder};
/// use kanban_board_core::domain::card::Card;
///
/// let mut cards = vec![
///     Card::new("c3", "Charlie"),
///     Card::new("c1", "alpha"),
///     Card::new("c2", "Bravo"),
/// ];
///
/// sort_cards(&mut cards, SortField::Title, SortOrder::Ascending);
/// assert_eq!(cards[0].id.as_str(), "c1");
/// ```
pub fn sort_cards(cards: &mut [Card], field: SortField, order: SortOrder) {
    cards.sort_by(|a, b| match field {
        SortField::Title => directed(
            a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            order,
        ),
        SortField::Priority => compare_present(
            a.priority.map(|p| p.rank()),
            b.priority.map(|p| p.rank()),
            order,
        ),
        SortField::DueDate => compare_present(a.due_date, b.due_date, order),
        SortField::Status => compare_present(
            a.status.map(|s| s.rank()),
            b.status.map(|s| s.rank()),
            order,
        ),
        SortField::EstimatedTime => compare_present(
            a.estimated_time.as_deref().map(estimate_minutes),
            b.estimated_time.as_deref().map(estimate_minutes),
            order,
        ),
        SortField::Attachments => compare_present(a.attachments, b.attachments, order),
    });
}

fn directed(cmp: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => cmp,
        SortOrder::Descending => cmp.reverse(),
    }
}

/// Compares optional keys with `None` always sorting to the end
fn compare_present<T: Ord>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.cmp(&b), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Converts free-form estimates such as "1d 2h", "90m" or "3" (hours) into
/// minutes. Unrecognised parts count as zero.
fn estimate_minutes(estimate: &str) -> u64 {
    estimate
        .split_whitespace()
        .map(|part| {
            let part = part.to_lowercase();
            let (digits, unit) = part.split_at(
                part.find(|c: char| !c.is_ascii_digit() && c != '.')
                    .unwrap_or(part.len()),
            );
            let value: f64 = digits.parse().unwrap_or(0.0);
            let per_unit = match unit {
                "m" | "min" | "mins" => 1.0,
                "" | "h" | "hr" | "hrs" | "hour" | "hours" => 60.0,
                "d" | "day" | "days" => 8.0 * 60.0,
                "w" | "wk" | "week" | "weeks" => 5.0 * 8.0 * 60.0,
                _ => 0.0,
            };
            (value * per_unit) as u64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{CardStatus, Priority};
    use chrono::NaiveDate;

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_sort_cards_by_title_case_insensitive() {
        let mut cards = vec![
            Card::new("1", "zebra"),
            Card::new("2", "Apple"),
            Card::new("3", "BANANA"),
        ];

        sort_cards(&mut cards, SortField::Title, SortOrder::Ascending);
        assert_eq!(ids(&cards), vec!["2", "3", "1"]);

        sort_cards(&mut cards, SortField::Title, SortOrder::Descending);
        assert_eq!(ids(&cards), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_sort_by_priority_descending_keeps_missing_last() {
        let mut cards = vec![
            Card::new("none", "No priority"),
            Card::new("low", "Low").with_priority(Priority::Low),
            Card::new("urgent", "Urgent").with_priority(Priority::Urgent),
            Card::new("medium", "Medium").with_priority(Priority::Medium),
        ];

        sort_cards(&mut cards, SortField::Priority, SortOrder::Descending);
        assert_eq!(ids(&cards), vec!["urgent", "medium", "low", "none"]);

        sort_cards(&mut cards, SortField::Priority, SortOrder::Ascending);
        assert_eq!(ids(&cards), vec!["low", "medium", "urgent", "none"]);
    }

    #[test]
    fn test_sort_by_due_date() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let mut cards = vec![
            Card::new("a", "A").with_due_date(day(20)),
            Card::new("b", "B"),
            Card::new("c", "C").with_due_date(day(5)),
        ];

        sort_cards(&mut cards, SortField::DueDate, SortOrder::Ascending);
        assert_eq!(ids(&cards), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_status_is_stable() {
        let mut cards = vec![
            Card::new("d1", "x").with_status(CardStatus::Done),
            Card::new("t1", "x").with_status(CardStatus::Todo),
            Card::new("d2", "x").with_status(CardStatus::Done),
            Card::new("t2", "x").with_status(CardStatus::Todo),
        ];

        sort_cards(&mut cards, SortField::Status, SortOrder::Ascending);
        assert_eq!(ids(&cards), vec!["t1", "t2", "d1", "d2"]);
    }

    #[test]
    fn test_estimate_minutes() {
        assert_eq!(estimate_minutes("90m"), 90);
        assert_eq!(estimate_minutes("2h"), 120);
        assert_eq!(estimate_minutes("3"), 180);
        assert_eq!(estimate_minutes("1d 2h"), 600);
        assert_eq!(estimate_minutes("1.5h"), 90);
        assert_eq!(estimate_minutes("soon"), 0);
    }

    #[test]
    fn test_sort_by_estimated_time() {
        let mut cards = vec![
            Card::new("day", "x").with_estimated_time("1d"),
            Card::new("half", "x").with_estimated_time("30m"),
            Card::new("two", "x").with_estimated_time("2h"),
        ];

        sort_cards(&mut cards, SortField::EstimatedTime, SortOrder::Ascending);
        assert_eq!(ids(&cards), vec!["half", "two", "day"]);
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!(SortField::from_str("Due-Date").unwrap(), SortField::DueDate);
        assert_eq!(SortOrder::from_str("desc").unwrap(), SortOrder::Descending);
        assert!(SortField::from_str("color").is_err());
    }
}
