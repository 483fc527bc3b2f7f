//! Fixed reference figures behind the contribution formula

/// Total federal budget, in dollars
pub const TOTAL_FEDERAL_BUDGET: f64 = 4_790_000_000_000.0;

/// Total state budget, in dollars
pub const TOTAL_STATE_BUDGET: f64 = 177_000_000_000.0;

/// Published city budget total the grant percentages were quoted against
pub const TOTAL_NYC_BUDGET: f64 = 95_298_823_318.0;

/// Fraction (0.0 - 1.0) of the city budget funded by federal grants
pub const FEDERAL_GRANT_PERCENT: f64 = 0.10;

/// Fraction (0.0 - 1.0) of the city budget funded by state grants
pub const STATE_GRANT_PERCENT: f64 = 0.17;

/// Which budget total the grant amounts are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrantBase {
    /// Total of the loaded dataset
    #[default]
    Fetched,
    /// The fixed `TOTAL_NYC_BUDGET` figure
    Reference,
}

impl GrantBase {
    pub fn total(self, fetched_total: f64) -> f64 {
        match self {
            GrantBase::Fetched => fetched_total,
            GrantBase::Reference => TOTAL_NYC_BUDGET,
        }
    }
}

/// Money given to the city budget from grants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrantTotals {
    pub total_federal_grant: f64,
    pub total_state_grant: f64,
}

impl GrantTotals {
    pub fn from_budget(total_budget: f64) -> Self {
        GrantTotals {
            total_federal_grant: FEDERAL_GRANT_PERCENT * total_budget,
            total_state_grant: STATE_GRANT_PERCENT * total_budget,
        }
    }

    /// Share of the federal budget that comes back to the city as grants
    pub fn federal_ratio(&self) -> f64 {
        self.total_federal_grant / TOTAL_FEDERAL_BUDGET
    }

    /// Share of the state budget that comes back to the city as grants
    pub fn state_ratio(&self) -> f64 {
        self.total_state_grant / TOTAL_STATE_BUDGET
    }
}
