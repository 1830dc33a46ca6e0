use std::collections::HashMap;

use crate::domain::ticket::Ticket;
use crate::domain::view::GroupingOption;

/// Tickets sharing one value of the grouping field, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

/// Group label for tickets whose priority is not an integer.
pub const UNKNOWN_PRIORITY_LABEL: &str = "unknown";

pub fn group_label(ticket: &Ticket, grouping: GroupingOption) -> String {
    match grouping {
        GroupingOption::Status => ticket.status.clone(),
        GroupingOption::User => ticket.user_id.clone(),
        GroupingOption::Priority => match ticket.priority {
            Some(priority) => priority.to_string(),
            None => UNKNOWN_PRIORITY_LABEL.to_string(),
        },
    }
}

/// Partitions `tickets` by the chosen field.
///
/// Buckets appear in the order their label is first seen, and each bucket
/// keeps the relative input order of its members.
pub fn classify(tickets: &[Ticket], grouping: GroupingOption) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let label = group_label(ticket, grouping);
        match index.get(&label) {
            Some(&position) => buckets[position].tickets.push(ticket.clone()),
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(Bucket {
                    label,
                    tickets: vec![ticket.clone()],
                });
            }
        }
    }

    buckets
}
