use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{TicketSource, ViewStateStore};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub ticket_source: Arc<dyn TicketSource>,
    pub view_store: Arc<dyn ViewStateStore>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        ticket_source: Arc<dyn TicketSource>,
        view_store: Arc<dyn ViewStateStore>,
    ) -> Self {
        Self {
            config,
            ticket_source,
            view_store,
        }
    }
}
