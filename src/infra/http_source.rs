use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, header::ACCEPT};

use crate::domain::feed::TicketFeed;
use crate::error::{AppError, AppResult};
use crate::services::TicketSource;

pub struct HttpTicketSource {
    http: Client,
    endpoint: String,
}

impl HttpTicketSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch(&self) -> AppResult<TicketFeed> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AppError::Configuration(
                "ticket API URL not configured".to_string(),
            ));
        }

        let response = self
            .http
            .get(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::FetchFailure(format!("failed to call {endpoint}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::FetchFailure(format!(
                "{endpoint} responded with {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AppError::FetchFailure(format!("failed to read response: {err}")))?;
        debug!("received {} bytes from {endpoint}", body.len());

        let feed: TicketFeed = serde_json::from_str(&body)
            .map_err(|err| AppError::FetchFailure(format!("malformed ticket response: {err}")))?;
        info!(
            "fetched {} tickets and {} users from {endpoint}",
            feed.tickets.len(),
            feed.users.len()
        );
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(body: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickets"))
            .respond_with(body)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn fetches_ticket_feed() {
        let server = serve(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tickets": [
                {"id": "CAM-1", "title": "Update UI", "tag": ["Feature request"],
                 "userId": "usr-1", "status": "Todo", "priority": 4},
                {"id": "CAM-2", "title": "Add auth", "tag": ["Feature request"],
                 "userId": "usr-2", "status": "In progress", "priority": 3}
            ],
            "users": [{"id": "usr-1", "name": "Anoop Sharma", "available": false}]
        })))
        .await;

        let source = HttpTicketSource::new(format!("{}/tickets", server.uri()));
        let feed = source.fetch().await.expect("fetch ok");
        assert_eq!(feed.tickets.len(), 2);
        assert_eq!(feed.tickets[1].status, "In progress");
        assert_eq!(feed.users[0].name, "Anoop Sharma");
    }

    #[tokio::test]
    async fn http_error_is_fetch_failure() {
        let server = serve(ResponseTemplate::new(503).set_body_string("down")).await;
        let source = HttpTicketSource::new(format!("{}/tickets", server.uri()));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, AppError::FetchFailure(message) if message.contains("503")));
    }

    #[tokio::test]
    async fn malformed_body_is_fetch_failure() {
        let server = serve(ResponseTemplate::new(200).set_body_string("<html>nope</html>")).await;
        let source = HttpTicketSource::new(format!("{}/tickets", server.uri()));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, AppError::FetchFailure(_)));
    }

    #[tokio::test]
    async fn missing_tickets_field_yields_empty_feed() {
        let server = serve(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "users": []
        })))
        .await;
        let source = HttpTicketSource::new(format!("{}/tickets", server.uri()));
        let feed = source.fetch().await.expect("fetch ok");
        assert!(feed.tickets.is_empty());
    }

    #[tokio::test]
    async fn blank_endpoint_is_configuration_error() {
        let source = HttpTicketSource::new("  ");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
