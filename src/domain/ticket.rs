use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A work item as delivered by the ticket source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: String,
    pub title: String,
    pub status: String,
    /// `None` when the feed sent something that is not an integer.
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: Option<i64>,
    #[serde(rename = "userId", deserialize_with = "deserialize_identifier")]
    pub user_id: String,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tag: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

// Some feeds send numeric ids; they are kept as their decimal text.
fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Identifier::deserialize(deserializer)? {
        Identifier::Text(text) => text,
        Identifier::Number(number) => number.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityField {
    Number(serde_json::Number),
    Text(String),
    Other(serde::de::IgnoredAny),
}

// A malformed priority on one ticket must not reject the whole feed.
fn deserialize_priority<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<PriorityField>::deserialize(deserializer)? {
        Some(PriorityField::Number(number)) => number.as_i64(),
        Some(PriorityField::Text(text)) => text.trim().parse().ok(),
        Some(PriorityField::Other(_)) | None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagField {
    One(String),
    Many(Vec<String>),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Option::<TagField>::deserialize(deserializer)? {
        Some(TagField::One(tag)) => vec![tag],
        Some(TagField::Many(tags)) => tags,
        None => Vec::new(),
    };
    Ok(tags)
}

/// Display name derived from a ticket's numeric priority.
///
/// Values outside `0..=4` resolve to [`PriorityLabel::Unknown`] so that a bad
/// record still renders instead of carrying an undefined label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityLabel {
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
    Unknown,
}

impl PriorityLabel {
    pub fn from_priority(priority: Option<i64>) -> Self {
        match priority {
            Some(0) => PriorityLabel::NoPriority,
            Some(1) => PriorityLabel::Low,
            Some(2) => PriorityLabel::Medium,
            Some(3) => PriorityLabel::High,
            Some(4) => PriorityLabel::Urgent,
            _ => PriorityLabel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::NoPriority => "No priority",
            PriorityLabel::Low => "Low",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::High => "High",
            PriorityLabel::Urgent => "Urgent",
            PriorityLabel::Unknown => "Unknown",
        }
    }
}

impl Serialize for PriorityLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Icon category for a ticket's workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Todo,
    InProgress,
    Done,
    Backlog,
    Cancelled,
    Other,
}

impl StatusCategory {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "todo" => StatusCategory::Todo,
            "in progress" => StatusCategory::InProgress,
            "done" => StatusCategory::Done,
            "backlog" => StatusCategory::Backlog,
            "cancel" | "canceled" | "cancelled" => StatusCategory::Cancelled,
            _ => StatusCategory::Other,
        }
    }
}

/// A ticket together with the bucket it was classified into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedTicket {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub group: String,
    #[serde(rename = "priorityLabel")]
    pub priority_label: PriorityLabel,
}

impl AnnotatedTicket {
    pub fn status_category(&self) -> StatusCategory {
        StatusCategory::from_status(&self.ticket.status)
    }
}
