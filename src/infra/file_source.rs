use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::domain::feed::TicketFeed;
use crate::error::{AppError, AppResult};
use crate::services::TicketSource;

/// Reads a saved ticket feed document from disk.
pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TicketSource for FileTicketSource {
    async fn fetch(&self) -> AppResult<TicketFeed> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            AppError::FetchFailure(format!("failed to read {}: {err}", self.path.display()))
        })?;
        let feed: TicketFeed = serde_json::from_str(&contents).map_err(|err| {
            AppError::FetchFailure(format!("malformed ticket file {}: {err}", self.path.display()))
        })?;
        info!("loaded {} tickets from {}", feed.tickets.len(), self.path.display());
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_feed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        std::fs::write(
            &path,
            r#"{"tickets":[{"id":"CAM-3","title":"Optimize DB","userId":"usr-2","status":"Backlog","priority":1}]}"#,
        )
        .unwrap();

        let feed = FileTicketSource::new(path).fetch().await.expect("read ok");
        assert_eq!(feed.tickets.len(), 1);
        assert_eq!(feed.tickets[0].status, "Backlog");
    }

    #[tokio::test]
    async fn missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileTicketSource::new(dir.path().join("absent.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::FetchFailure(_)));
    }
}
