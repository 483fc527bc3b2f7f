use super::budget::{AgencyTotal, BudgetSnapshot};
use super::contribution::{compute_contribution, ContributionResult, TaxpayerInputs};
use super::rates::{GrantBase, GrantTotals};
use serde::Serialize;

/// Which agencies feed the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    #[default]
    All,
    TopTen,
}

impl Selection {
    pub fn select(self, snapshot: &BudgetSnapshot) -> &[AgencyTotal] {
        match self {
            Selection::All => &snapshot.agencies,
            Selection::TopTen => &snapshot.top_ten,
        }
    }
}

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Recalculate(TaxpayerInputs),
    SwitchView(Selection),
}

/// Everything the user controls. Starts with the full agency list and empty
/// tax fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub selection: Selection,
    pub inputs: TaxpayerInputs,
}

impl ViewState {
    pub fn apply(self, command: Command) -> ViewState {
        match command {
            Command::Recalculate(inputs) => ViewState { inputs, ..self },
            Command::SwitchView(selection) => ViewState { selection, ..self },
        }
    }
}

/// Derived state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub selection: Selection,
    pub total_budget: f64,
    pub agency_count: usize,
    pub contribution: ContributionResult,
}

/// Derive what to show for `state` over `snapshot`.
pub fn derive_view(snapshot: &BudgetSnapshot, state: &ViewState, grant_base: GrantBase) -> View {
    let grants = GrantTotals::from_budget(grant_base.total(snapshot.total_budget));
    let your_contribution = compute_contribution(&state.inputs, &grants);
    let agencies = state.selection.select(snapshot);
    View {
        selection: state.selection,
        total_budget: snapshot.total_budget,
        agency_count: agencies.len(),
        contribution: ContributionResult::new(your_contribution, agencies, snapshot.total_budget),
    }
}

/// Single-owner widget state: the loaded snapshot (if the load succeeded) and
/// the user's current view.
#[derive(Debug, Clone)]
pub struct Session {
    snapshot: Option<BudgetSnapshot>,
    grant_base: GrantBase,
    state: ViewState,
}

impl Session {
    pub fn new(snapshot: Option<BudgetSnapshot>, grant_base: GrantBase) -> Self {
        Session {
            snapshot,
            grant_base,
            state: ViewState::default(),
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Option<&BudgetSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Apply `command` and return the refreshed view, or `None` while no data
    /// has been loaded.
    pub fn handle(&mut self, command: Command) -> Option<View> {
        self.state = self.state.apply(command);
        self.render()
    }

    pub fn render(&self) -> Option<View> {
        self.snapshot
            .as_ref()
            .map(|snapshot| derive_view(snapshot, &self.state, self.grant_base))
    }
}
