use crate::domain::ids::CardId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Urgency of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Rank used for ordering, lowest urgency first
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(crate::error::BoardError::InvalidValue {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Work status of a card, independent of the column holding it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    Todo,
    InProgress,
    Done,
    Blocked,
}

impl CardStatus {
    pub fn rank(self) -> u8 {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Blocked => 2,
            Self::Done => 3,
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

impl FromStr for CardStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "blocked" => Ok(Self::Blocked),
            _ => Err(crate::error::BoardError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// Person a card is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }
}

/// A card on the board.
///
/// A card carries no reference to its column: membership is decided only by
/// which column's list contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<u32>,
}

impl Card {
    /// Creates a card with only an id and a title
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            assignee: None,
            due_date: None,
            priority: None,
            status: None,
            tags: BTreeSet::new(),
            estimated_time: None,
            attachments: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds a tag; tags are a set so duplicates collapse
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_estimated_time(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_time = Some(estimate.into());
        self
    }

    pub fn with_attachments(mut self, count: u32) -> Self {
        self.attachments = Some(count);
        self
    }

    /// Checks whether the card is past its due date on the given day
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match (self.due_date, self.status) {
            (_, Some(CardStatus::Done)) => false,
            (Some(due), _) => due < today,
            (None, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = Card::new("c1", "Write invoice template")
            .with_priority(Priority::High)
            .with_status(CardStatus::InProgress)
            .with_tag("billing")
            .with_tag("billing")
            .with_attachments(2);

        assert_eq!(card.id.as_str(), "c1");
        assert_eq!(card.priority, Some(Priority::High));
        assert_eq!(card.tags.len(), 1);
        assert_eq!(card.attachments, Some(2));
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(Priority::from_str("URGENT").unwrap(), Priority::Urgent);
        assert!(Priority::from_str("critical").is_err());
        assert!(Priority::Low.rank() < Priority::Urgent.rank());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&CardStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(
            CardStatus::from_str("in-progress").unwrap(),
            CardStatus::InProgress
        );
        assert_eq!(CardStatus::Blocked.to_string(), "blocked");
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let card = Card::new("c1", "Late").with_due_date(yesterday);
        assert!(card.is_overdue(today));

        let done = card.clone().with_status(CardStatus::Done);
        assert!(!done.is_overdue(today));

        assert!(!Card::new("c2", "No date").is_overdue(today));
    }

    #[test]
    fn test_card_serialization_uses_camel_case() {
        let card = Card::new("c1", "Quote follow-up")
            .with_due_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .with_estimated_time("2h");
        let json = serde_json::to_string(&card).unwrap();

        assert!(json.contains("\"dueDate\":\"2024-05-01\""));
        assert!(json.contains("\"estimatedTime\":\"2h\""));
        assert!(!json.contains("assignee"));
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_card_deserializes_minimal_record() {
        let json = r#"{ "id": "c9", "title": "Onboard new hire" }"#;
        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id.as_str(), "c9");
        assert!(card.description.is_none());
        assert!(card.tags.is_empty());
    }
}
