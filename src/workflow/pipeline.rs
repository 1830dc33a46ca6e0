use std::sync::Arc;

use blake3::Hasher;
use log::debug;

use crate::domain::annotate::annotate;
use crate::domain::classify::classify;
use crate::domain::grouped::{Group, GroupedResult};
use crate::domain::order::order;
use crate::domain::ticket::Ticket;
use crate::domain::view::ViewState;
use crate::error::{AppError, AppResult};

/// Classifies, orders and annotates tickets, remembering the most recent
/// result so an identical request can be answered without recomputing.
#[derive(Default)]
pub struct Pipeline {
    last: Option<LastRun>,
}

struct LastRun {
    view: ViewState,
    fingerprint: String,
    result: Arc<GroupedResult>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, tickets: &[Ticket], view: ViewState) -> AppResult<Arc<GroupedResult>> {
        if tickets.is_empty() {
            return Err(AppError::EmptySourceData);
        }

        let fingerprint = fingerprint(tickets);
        if let Some(last) = &self.last {
            if last.view == view && last.fingerprint == fingerprint {
                debug!(
                    "view {}/{} and ticket data unchanged; reusing previous result",
                    view.grouping, view.sort
                );
                return Ok(Arc::clone(&last.result));
            }
        }

        debug!(
            "grouping {} tickets by {} ordered by {}",
            tickets.len(),
            view.grouping,
            view.sort
        );
        let result = Arc::new(build(tickets, view));
        self.last = Some(LastRun {
            view,
            fingerprint,
            result: Arc::clone(&result),
        });
        Ok(result)
    }
}

pub fn build(tickets: &[Ticket], view: ViewState) -> GroupedResult {
    let groups = classify(tickets, view.grouping)
        .into_iter()
        .map(|bucket| {
            let ordered = order(bucket.tickets, view.sort);
            Group {
                tickets: annotate(&ordered, &bucket.label),
                label: bucket.label,
            }
        })
        .collect();
    GroupedResult::new(groups)
}

pub fn fingerprint(tickets: &[Ticket]) -> String {
    let mut hasher = Hasher::new();
    for ticket in tickets {
        for field in [&ticket.id, &ticket.title, &ticket.status, &ticket.user_id] {
            hasher.update(field.as_bytes());
            hasher.update(&[0x1f]);
        }
        match ticket.priority {
            Some(priority) => {
                hasher.update(&[1]);
                hasher.update(&priority.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
        for tag in &ticket.tag {
            hasher.update(tag.as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&[0x1e]);
    }
    hasher.finalize().to_hex().to_string()
}
