use std::fmt::Write;

use crate::domain::ticket::{AnnotatedTicket, PriorityLabel, StatusCategory};
use crate::domain::view::GroupingOption;
use crate::error::{AppError, AppResult};
use crate::workflow::board::Rendered;

fn status_icon(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Todo => "○",
        StatusCategory::InProgress => "◑",
        StatusCategory::Done => "●",
        StatusCategory::Backlog => "◌",
        StatusCategory::Cancelled => "⊘",
        StatusCategory::Other => "·",
    }
}

fn priority_icon(label: PriorityLabel) -> &'static str {
    match label {
        PriorityLabel::Urgent => "[!]",
        PriorityLabel::High => "▂▄▆",
        PriorityLabel::Medium => "▂▄ ",
        PriorityLabel::Low => "▂  ",
        PriorityLabel::NoPriority => "...",
        PriorityLabel::Unknown => " ? ",
    }
}

fn group_heading(rendered: &Rendered, label: &str) -> String {
    match rendered.view.grouping {
        GroupingOption::User => match rendered.user_name(label) {
            Some(name) => format!("{name} ({label})"),
            None => label.to_string(),
        },
        GroupingOption::Priority => match label.parse::<i64>() {
            Ok(priority) => format!(
                "{} ({label})",
                PriorityLabel::from_priority(Some(priority)).as_str()
            ),
            Err(_) => PriorityLabel::Unknown.as_str().to_string(),
        },
        GroupingOption::Status => label.to_string(),
    }
}

fn ticket_line(ticket: &AnnotatedTicket) -> String {
    let mut line = format!(
        "  {:<8} {} {}  {} {}",
        ticket.ticket.id,
        status_icon(ticket.status_category()),
        ticket.ticket.title,
        priority_icon(ticket.priority_label),
        ticket.priority_label.as_str(),
    );
    if !ticket.ticket.tag.is_empty() {
        line.push_str("  #");
        line.push_str(&ticket.ticket.tag.join(" #"));
    }
    line
}

/// Plain-text board: one heading per group followed by its tickets.
pub fn render_text(rendered: &Rendered) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Grouping: {}  Ordering: {}",
        rendered.view.grouping, rendered.view.sort
    );
    for group in rendered.result.groups() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} [{}]",
            group_heading(rendered, &group.label),
            group.tickets.len()
        );
        for ticket in &group.tickets {
            let _ = writeln!(out, "{}", ticket_line(ticket));
        }
    }
    out
}

pub fn render_json(rendered: &Rendered) -> AppResult<String> {
    serde_json::to_string_pretty(rendered.result.as_ref())
        .map_err(|err| AppError::Configuration(format!("failed to encode board: {err}")))
}
