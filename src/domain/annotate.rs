use crate::domain::ticket::{AnnotatedTicket, PriorityLabel, Ticket};

pub fn annotate(tickets: &[Ticket], group: &str) -> Vec<AnnotatedTicket> {
    tickets
        .iter()
        .map(|ticket| AnnotatedTicket {
            ticket: ticket.clone(),
            group: group.to_string(),
            priority_label: PriorityLabel::from_priority(ticket.priority),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, priority: i64) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {id}"),
            status: "Todo".to_string(),
            priority: Some(priority),
            user_id: "usr-1".to_string(),
            tag: Vec::new(),
        }
    }

    #[test]
    fn attaches_group_and_priority_label() {
        let annotated = annotate(&[ticket("1", 4), ticket("2", 0)], "Todo");
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].ticket.id, "1");
        assert_eq!(annotated[0].group, "Todo");
        assert_eq!(annotated[0].priority_label, PriorityLabel::Urgent);
        assert_eq!(annotated[1].priority_label, PriorityLabel::NoPriority);
    }

    #[test]
    fn unknown_priority_gets_sentinel() {
        let annotated = annotate(&[ticket("9", 7)], "Todo");
        assert_eq!(annotated[0].priority_label, PriorityLabel::Unknown);
        assert_eq!(annotated[0].ticket.priority, Some(7));
    }

    #[test]
    fn repeated_annotation_is_identical() {
        let tickets = vec![ticket("1", 3), ticket("2", 1)];
        assert_eq!(annotate(&tickets, "usr-1"), annotate(&tickets, "usr-1"));
    }
}
