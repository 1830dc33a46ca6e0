use async_trait::async_trait;

use crate::domain::feed::TicketFeed;
use crate::error::AppResult;

#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Performs one fetch of the full ticket collection.
    async fn fetch(&self) -> AppResult<TicketFeed>;
}
