use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of agencies in the "top ten" view.
pub const TOP_TEN: usize = 10;

/// A single record of the published budget dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetLineItem {
    /// Spending agency. `null` or a missing field is kept as an unnamed agency.
    #[serde(default)]
    pub agency: Option<String>,
    /// Amount in dollars
    pub amount: f64,
}

impl BudgetLineItem {
    #[cfg(test)]
    pub fn new(agency: &str, amount: f64) -> Self {
        BudgetLineItem {
            agency: Some(agency.to_string()),
            amount,
        }
    }
}

/// Sum of all line items sharing one agency name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyTotal {
    pub name: Option<String>,
    pub amount: f64,
}

impl AgencyTotal {
    /// Display name, with unnamed agencies rendered as `null`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("null")
    }

    /// Fraction of `total_budget` this agency accounts for.
    pub fn share_of(&self, total_budget: f64) -> f64 {
        self.amount / total_budget
    }
}

/// Aggregated, ranked view of the dataset. Built once per load.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BudgetSnapshot {
    pub total_budget: f64,
    /// Agencies sorted by amount, largest first
    pub agencies: Vec<AgencyTotal>,
    pub top_ten: Vec<AgencyTotal>,
}

/// Group line items into per-agency totals and rank them.
pub fn aggregate<'a, I>(items: I) -> BudgetSnapshot
where
    I: IntoIterator<Item = &'a BudgetLineItem>,
{
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    let mut agencies: Vec<AgencyTotal> = Vec::new();
    let mut total_budget = 0.0;
    let mut item_count = 0usize;

    for item in items {
        let key = item.agency.as_deref();
        match index.get(&key) {
            Some(&i) => agencies[i].amount += item.amount,
            None => {
                index.insert(key, agencies.len());
                agencies.push(AgencyTotal {
                    name: item.agency.clone(),
                    amount: item.amount,
                });
            }
        }
        total_budget += item.amount;
        item_count += 1;
    }

    log::debug!(
        "aggregated {} line items into {} agencies",
        item_count,
        agencies.len()
    );

    let agencies = rank(agencies);
    let top_ten = top_ten(&agencies);
    BudgetSnapshot {
        total_budget,
        agencies,
        top_ten,
    }
}

/// Sort agencies by amount, largest first. Equal amounts keep no guaranteed
/// relative order.
pub fn rank(mut agencies: Vec<AgencyTotal>) -> Vec<AgencyTotal> {
    agencies.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    agencies
}

/// The first ten ranked agencies, or all of them if there are fewer.
pub fn top_ten(ranked: &[AgencyTotal]) -> Vec<AgencyTotal> {
    ranked.iter().take(TOP_TEN).cloned().collect()
}
