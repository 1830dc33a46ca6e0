use std::sync::Arc;

use log::{info, warn};

use crate::context::AppContext;
use crate::domain::grouped::GroupedResult;
use crate::domain::ticket::User;
use crate::domain::view::ViewState;
use crate::error::AppResult;
use crate::services::{TicketSource, ViewStateStore};
use crate::workflow::pipeline::Pipeline;

/// What is currently on screen. Replaced as a whole after each successful run.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub view: ViewState,
    pub result: Arc<GroupedResult>,
    pub users: Vec<User>,
}

impl Rendered {
    pub fn user_name(&self, user_id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.as_str())
    }
}

/// One board session: fetches tickets, runs them through the pipeline and
/// persists the configuration that produced the rendered result.
pub struct Board {
    source: Arc<dyn TicketSource>,
    store: Arc<dyn ViewStateStore>,
    pipeline: Pipeline,
    view: ViewState,
    rendered: Option<Rendered>,
}

impl Board {
    pub fn restore(ctx: &AppContext) -> Self {
        let view = match ctx.view_store.load() {
            Some(view) => {
                info!("restored view: group by {}, order by {}", view.grouping, view.sort);
                view
            }
            None => ViewState::default(),
        };

        Self {
            source: Arc::clone(&ctx.ticket_source),
            store: Arc::clone(&ctx.view_store),
            pipeline: Pipeline::new(),
            view,
            rendered: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    #[cfg(test)]
    pub fn rendered(&self) -> Option<&Rendered> {
        self.rendered.as_ref()
    }

    /// Fetches fresh tickets and renders them with the current view.
    pub async fn refresh(&mut self) -> AppResult<&Rendered> {
        self.run(self.view).await
    }

    /// Switches grouping and/or ordering, validating both keys before fetching.
    pub async fn apply(&mut self, grouping: Option<&str>, sort: Option<&str>) -> AppResult<&Rendered> {
        let view = ViewState::parse(
            grouping.unwrap_or(self.view.grouping.as_str()),
            sort.unwrap_or(self.view.sort.as_str()),
        )?;
        self.run(view).await
    }

    async fn run(&mut self, view: ViewState) -> AppResult<&Rendered> {
        let feed = match self.source.fetch().await {
            Ok(feed) => feed,
            Err(err) => {
                warn!("keeping previous board: {err}");
                return Err(err);
            }
        };

        let result = match self.pipeline.process(&feed.tickets, view) {
            Ok(result) => result,
            Err(err) => {
                warn!("keeping previous board: {err}");
                return Err(err);
            }
        };

        info!(
            "rendered {} tickets in {} groups",
            result.ticket_count(),
            result.groups().len()
        );
        self.view = view;
        self.store.save(&view);
        Ok(&*self.rendered.insert(Rendered {
            view,
            result,
            users: feed.users,
        }))
    }
}
