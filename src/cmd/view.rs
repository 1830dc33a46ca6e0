use clap::{Args, Subcommand};

use crate::context::AppContext;
use crate::domain::view::{GroupingOption, SortKey, ViewState};

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(subcommand)]
    pub command: ViewCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ViewCommand {
    /// Show the saved grouping and ordering.
    Show,
    /// Forget the saved view so defaults apply next time.
    Reset,
}

pub fn run(ctx: &AppContext, command: ViewCommand) -> String {
    match command {
        ViewCommand::Show => run_show(ctx),
        ViewCommand::Reset => run_reset(ctx),
    }
}

fn run_show(ctx: &AppContext) -> String {
    let (state, origin) = match ctx.view_store.load() {
        Some(state) => (state, "saved"),
        None => (ViewState::default(), "default"),
    };
    format!(
        "{}\nState directory: {}",
        describe(&state, origin),
        ctx.config.state_dir.display()
    )
}

fn run_reset(ctx: &AppContext) -> String {
    ctx.view_store.clear();
    describe(&ViewState::default(), "reset to default")
}

fn describe(state: &ViewState, origin: &str) -> String {
    let groupings = GroupingOption::ALL.map(|option| option.as_str()).join("|");
    let sorts = SortKey::ALL.map(|key| key.as_str()).join("|");
    format!(
        "Grouping: {} ({groupings})\nOrdering: {} ({sorts})\n[{origin}]",
        state.grouping, state.sort
    )
}
