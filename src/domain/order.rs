use crate::domain::ticket::Ticket;
use crate::domain::view::SortKey;

/// Stable sort of one bucket: priority descending, or title ascending.
///
/// Tickets without an integer priority sort after every known priority.
/// Titles compare by UTF-16 code units.
pub fn order(mut tickets: Vec<Ticket>, sort: SortKey) -> Vec<Ticket> {
    match sort {
        SortKey::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Title => {
            tickets.sort_by(|a, b| a.title.encode_utf16().cmp(b.title.encode_utf16()))
        }
    }
    tickets
}
