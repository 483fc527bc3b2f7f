//! Agencies command - budget breakdown by agency

use super::{DataArgs, ViewArg, NO_DATA};
use crate::core::{format_number, format_percent, AgencyTotal, BudgetSnapshot, Selection};
use clap::Args;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct AgenciesCommand {
    #[command(flatten)]
    data: DataArgs,

    /// Which agencies to list
    #[arg(short, long, value_enum, default_value_t = ViewArg::All)]
    view: ViewArg,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,
}

/// Row for the agencies table output
#[derive(Debug, Clone, Tabled, Serialize)]
struct AgencyRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Agency Name")]
    agency: String,
    #[tabled(rename = "Agency Amount")]
    amount: String,
    #[tabled(rename = "Percent of Budget")]
    percent: String,
}

#[derive(Debug, Serialize)]
struct AgenciesOutput<'a> {
    total_budget: f64,
    agency_count: usize,
    agencies: &'a [AgencyTotal],
}

impl AgenciesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let snapshot = self.data.load_snapshot();
        let selection: Selection = self.view.into();

        if self.json {
            return print_json(snapshot.as_ref(), selection);
        }
        let Some(snapshot) = snapshot else {
            println!("{}", NO_DATA);
            return Ok(());
        };

        let rows = agency_rows(selection.select(&snapshot), snapshot.total_budget);
        if self.csv {
            write_csv(&rows)
        } else {
            print_table(&snapshot, &rows);
            Ok(())
        }
    }
}

fn agency_rows(agencies: &[AgencyTotal], total_budget: f64) -> Vec<AgencyRow> {
    agencies
        .iter()
        .enumerate()
        .map(|(i, agency)| AgencyRow {
            rank: i + 1,
            agency: agency.display_name().to_string(),
            amount: format!("${}", format_number(agency.amount)),
            percent: format_percent(agency.share_of(total_budget)),
        })
        .collect()
}

fn print_table(snapshot: &BudgetSnapshot, rows: &[AgencyRow]) {
    println!();
    println!("TOTAL BUDGET: ${}", format_number(snapshot.total_budget));
    println!();

    if rows.is_empty() {
        println!("No agencies found");
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn print_json(snapshot: Option<&BudgetSnapshot>, selection: Selection) -> anyhow::Result<()> {
    let output = snapshot.map(|s| {
        let agencies = selection.select(s);
        AgenciesOutput {
            total_budget: s.total_budget,
            agency_count: agencies.len(),
            agencies,
        }
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn write_csv(rows: &[AgencyRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
