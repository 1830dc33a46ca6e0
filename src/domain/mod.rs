pub mod annotate;
pub mod classify;
pub mod feed;
pub mod grouped;
pub mod order;
pub mod ticket;
pub mod view;
