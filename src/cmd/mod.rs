pub mod agencies;
pub mod contribution;
pub mod schema;
pub mod session;

use crate::core::{aggregate, BudgetSnapshot, GrantBase, Selection};
use crate::source::{DataSource, DEFAULT_DATA_URL};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Where to load the budget dataset from
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// URL of the budget summary JSON
    #[arg(long, env = "BUDGETC_URL", default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of the URL (or stdin with "-")
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl DataArgs {
    pub fn source(&self) -> DataSource {
        match &self.file {
            Some(path) => DataSource::from_path(path.clone()),
            None => DataSource::Url(self.url.clone()),
        }
    }

    /// Load and aggregate the dataset. A failed load is logged and leaves
    /// the caller in the pre-data state.
    pub fn load_snapshot(&self) -> Option<BudgetSnapshot> {
        let source = self.source();
        match source.load() {
            Ok(items) => {
                let snapshot = aggregate(&items);
                log::info!(
                    "{} agencies loaded from {}, total {}",
                    snapshot.agencies.len(),
                    source,
                    snapshot.total_budget
                );
                Some(snapshot)
            }
            Err(err) => {
                log::warn!("could not load budget data from {}: {}", source, err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ViewArg {
    /// Every agency
    #[default]
    All,
    /// The ten largest agencies
    TopTen,
}

impl From<ViewArg> for Selection {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::All => Selection::All,
            ViewArg::TopTen => Selection::TopTen,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum GrantBaseArg {
    /// Derive grants from the loaded dataset's total
    #[default]
    Fetched,
    /// Derive grants from the published city budget figure
    Reference,
}

impl From<GrantBaseArg> for GrantBase {
    fn from(arg: GrantBaseArg) -> Self {
        match arg {
            GrantBaseArg::Fetched => GrantBase::Fetched,
            GrantBaseArg::Reference => GrantBase::Reference,
        }
    }
}

pub(crate) const NO_DATA: &str = "No budget data loaded";
