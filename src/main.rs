use clap::{Parser, Subcommand};

mod cmd;
mod core;
mod source;

use cmd::{
    agencies::AgenciesCommand, contribution::ContributionCommand, schema::SchemaCommand,
    session::SessionCommand,
};

#[derive(Parser, Debug)]
#[command(name = "budgetc", version, about = "City budget by agency, and your share of it")]
struct Opts {
    #[command(subcommand)]
    command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    /// Total budget and its breakdown by agency
    Agencies(AgenciesCommand),
    /// Your tax contribution and how it splits across agencies
    Contribution(ContributionCommand),
    /// Interactive session: recalculate and switch views from stdin
    Session(SessionCommand),
    /// Print the expected dataset format
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        BudgetCommand::Agencies(cmd) => cmd.exec(),
        BudgetCommand::Contribution(cmd) => cmd.exec(),
        BudgetCommand::Session(cmd) => cmd.exec(),
        BudgetCommand::Schema(cmd) => cmd.exec(),
    }
}
