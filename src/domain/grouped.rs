use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::ticket::AnnotatedTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub tickets: Vec<AnnotatedTicket>,
}

/// Ordered mapping from group label to its annotated tickets.
///
/// Groups keep the order in which the classifier first saw their label;
/// renderers iterate them in that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedResult {
    groups: Vec<Group>,
}

impl GroupedResult {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn ticket_count(&self) -> usize {
        self.groups.iter().map(|group| group.tickets.len()).sum()
    }
}

#[cfg(test)]
impl GroupedResult {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&[AnnotatedTicket]> {
        self.groups
            .iter()
            .find(|group| group.label == label)
            .map(|group| group.tickets.as_slice())
    }
}

impl Serialize for GroupedResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.label, &group.tickets)?;
        }
        map.end()
    }
}
