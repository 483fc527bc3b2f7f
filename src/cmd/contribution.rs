//! Contribution command - the taxpayer's share of the budget, by agency

use super::{DataArgs, GrantBaseArg, ViewArg, NO_DATA};
use crate::core::{
    format_dollars, format_number, format_percent, format_plain, AgencyContribution, Command,
    Session, TaxpayerInputs, View,
};
use clap::Args;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ContributionCommand {
    #[command(flatten)]
    data: DataArgs,

    /// Federal income tax paid, in whole dollars
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    federal: String,

    /// State income tax paid, in whole dollars
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    state: String,

    /// Local income tax paid, in whole dollars
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    local: String,

    /// Which agencies to list
    #[arg(short, long, value_enum, default_value_t = ViewArg::All)]
    view: ViewArg,

    /// Budget total the federal and state grants are derived from
    #[arg(long, value_enum, default_value_t = GrantBaseArg::Fetched)]
    grant_base: GrantBaseArg,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,
}

impl ContributionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = TaxpayerInputs::parse(&self.federal, &self.state, &self.local);
        if !inputs.is_complete() {
            log::debug!("incomplete tax inputs: {:?}", inputs);
        }

        let mut session = Session::new(self.data.load_snapshot(), self.grant_base.into());
        session.handle(Command::SwitchView(self.view.into()));
        let view = session.handle(Command::Recalculate(inputs));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }
        match view {
            Some(view) if self.csv => write_csv(&view),
            Some(view) => {
                print_view(&view);
                Ok(())
            }
            None => {
                println!("{}", NO_DATA);
                Ok(())
            }
        }
    }
}

/// Row for the contribution table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub(crate) struct ContributionRow {
    #[tabled(rename = "Agency Name")]
    pub agency: String,
    #[tabled(rename = "Agency Amount")]
    pub amount: String,
    #[tabled(rename = "Percent of Budget")]
    pub percent: String,
    #[tabled(rename = "Your Contribution")]
    pub contribution: String,
}

impl From<&AgencyContribution> for ContributionRow {
    fn from(row: &AgencyContribution) -> Self {
        ContributionRow {
            agency: row.name.clone(),
            amount: format!("${}", format_number(row.amount)),
            percent: format_percent(row.share),
            contribution: format_dollars(row.contribution),
        }
    }
}

pub(crate) fn contribution_rows(view: &View) -> Vec<ContributionRow> {
    view.contribution.rows.iter().map(ContributionRow::from).collect()
}

/// Contribution label followed by the per-agency table
pub(crate) fn print_view(view: &View) {
    println!();
    println!("TOTAL BUDGET: ${}", format_number(view.total_budget));
    // NaN is shown as-is when a tax field did not parse
    println!(
        "YOUR CONTRIBUTION: {}",
        format_plain(view.contribution.your_contribution)
    );
    println!();

    let rows = contribution_rows(view);
    if rows.is_empty() {
        println!("No agencies found");
        return;
    }

    println!(
        "Your Contribution (of {})",
        format_dollars(view.contribution.your_contribution)
    );
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv(view: &View) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in contribution_rows(view) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
