use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Field a board is partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingOption {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupingOption {
    pub const ALL: [GroupingOption; 3] = [
        GroupingOption::Status,
        GroupingOption::User,
        GroupingOption::Priority,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingOption::Status => "status",
            GroupingOption::User => "user",
            GroupingOption::Priority => "priority",
        }
    }
}

impl FromStr for GroupingOption {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "status" => Ok(GroupingOption::Status),
            "user" => Ok(GroupingOption::User),
            "priority" => Ok(GroupingOption::Priority),
            _ => Err(AppError::InvalidGroupingOption(value.to_string())),
        }
    }
}

impl fmt::Display for GroupingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied inside each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Priority,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Priority, SortKey::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Priority => "priority",
            SortKey::Title => "title",
        }
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(AppError::InvalidSortOption(value.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's board configuration, persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(rename = "groupingOption")]
    pub grouping: GroupingOption,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(grouping: GroupingOption, sort: SortKey) -> Self {
        Self { grouping, sort }
    }

    /// Parses both keys, rejecting anything outside the closed option sets.
    pub fn parse(grouping: &str, sort: &str) -> Result<Self, AppError> {
        Ok(Self::new(grouping.parse()?, sort.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouping_options() {
        assert_eq!("status".parse::<GroupingOption>().unwrap(), GroupingOption::Status);
        assert_eq!("USER".parse::<GroupingOption>().unwrap(), GroupingOption::User);
        assert_eq!(
            " priority ".parse::<GroupingOption>().unwrap(),
            GroupingOption::Priority
        );
    }

    #[test]
    fn rejects_unknown_grouping() {
        let err = "team".parse::<GroupingOption>().unwrap_err();
        assert!(matches!(err, AppError::InvalidGroupingOption(value) if value == "team"));
    }

    #[test]
    fn rejects_unknown_sort() {
        let err = ViewState::parse("status", "created").unwrap_err();
        assert!(matches!(err, AppError::InvalidSortOption(value) if value == "created"));
    }

    #[test]
    fn defaults_to_status_by_priority() {
        let state = ViewState::default();
        assert_eq!(state.grouping, GroupingOption::Status);
        assert_eq!(state.sort, SortKey::Priority);
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let state = ViewState::new(GroupingOption::User, SortKey::Title);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json, serde_json::json!({"groupingOption": "user", "sort": "title"}));
    }
}
