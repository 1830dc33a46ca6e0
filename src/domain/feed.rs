use serde::{Deserialize, Deserializer};

use crate::domain::ticket::{Ticket, User};

/// Top-level document returned by a ticket source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketFeed {
    #[serde(default, deserialize_with = "nullable_list")]
    pub tickets: Vec<Ticket>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub users: Vec<User>,
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tickets_and_users() {
        let feed: TicketFeed = serde_json::from_str(
            r#"{
                "tickets": [
                    {"id":"CAM-1","title":"Update UI","tag":["Feature request"],"userId":"usr-1","status":"Todo","priority":4}
                ],
                "users": [{"id":"usr-1","name":"Anoop Sharma","available":false}]
            }"#,
        )
        .unwrap();
        assert_eq!(feed.tickets.len(), 1);
        assert_eq!(feed.users[0].id, "usr-1");
        assert_eq!(feed.users[0].name, "Anoop Sharma");
    }

    #[test]
    fn bad_priority_keeps_the_rest_of_the_feed() {
        let feed: TicketFeed = serde_json::from_str(
            r#"{
                "tickets": [
                    {"id":"CAM-1","title":"Update UI","userId":"usr-1","status":"Todo","priority":4},
                    {"id":"CAM-2","title":"Add auth","userId":"usr-2","status":"Todo","priority":2.5}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(feed.tickets.len(), 2);
        assert_eq!(feed.tickets[0].priority, Some(4));
        assert_eq!(feed.tickets[1].priority, None);
    }

    #[test]
    fn missing_or_null_tickets_decode_as_empty() {
        let missing: TicketFeed = serde_json::from_str("{}").unwrap();
        assert!(missing.tickets.is_empty());
        let null: TicketFeed = serde_json::from_str(r#"{"tickets": null}"#).unwrap();
        assert!(null.tickets.is_empty());
    }
}
