pub mod ticket_source;
pub mod view_state;

pub use ticket_source::TicketSource;
pub use view_state::ViewStateStore;
