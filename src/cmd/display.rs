use log::debug;

use crate::cmd::render::{render_json, render_text};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::board::Board;

#[derive(Debug, Clone, Default)]
pub struct DisplayCommandArgs {
    pub group: Option<String>,
    pub sort: Option<String>,
    pub json: bool,
}

/// Fetches tickets, applies any requested view change and prints the board.
pub async fn run(ctx: &AppContext, args: DisplayCommandArgs) -> AppResult<String> {
    let mut board = Board::restore(ctx);
    debug!(
        "starting from view {}/{}",
        board.view().grouping,
        board.view().sort
    );
    let rendered = match (args.group.as_deref(), args.sort.as_deref()) {
        (None, None) => board.refresh().await?,
        (group, sort) => board.apply(group, sort).await?,
    };

    if args.json {
        render_json(rendered)
    } else {
        Ok(render_text(rendered))
    }
}
