use super::budget::AgencyTotal;
use super::format::round_cents;
use super::rates::GrantTotals;
use serde::Serialize;

/// The three tax figures a taxpayer enters, in whole dollars.
///
/// Parsed integers are held as `f64` so that any digit string is a number.
/// A field that did not parse is `None` and behaves as NaN in the
/// calculation. It is deliberately not replaced with zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TaxpayerInputs {
    pub federal_income_tax: Option<f64>,
    pub state_income_tax: Option<f64>,
    pub local_income_tax: Option<f64>,
}

impl TaxpayerInputs {
    #[cfg(test)]
    pub fn new(federal: i64, state: i64, local: i64) -> Self {
        TaxpayerInputs {
            federal_income_tax: Some(federal as f64),
            state_income_tax: Some(state as f64),
            local_income_tax: Some(local as f64),
        }
    }

    /// Parse raw field text with [`parse_int`].
    pub fn parse(federal: &str, state: &str, local: &str) -> Self {
        TaxpayerInputs {
            federal_income_tax: parse_int(federal),
            state_income_tax: parse_int(state),
            local_income_tax: parse_int(local),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.federal_income_tax.is_some()
            && self.state_income_tax.is_some()
            && self.local_income_tax.is_some()
    }
}

/// Parse the leading integer of `input`.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit, so `"12.9"` is 12 and `"42abc"` is 42. A `0x` prefix switches
/// to hexadecimal. Returns `None` when no digits lead the input. Digit runs
/// of any length are accepted and lose precision past 2^53.
pub fn parse_int(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(s.len(), |(i, _)| i);
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    let value = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
    };
    Some(if negative { -value } else { value })
}

fn dollars(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::NAN)
}

/// The taxpayer's imputed contribution to the city budget, rounded to cents.
///
/// Federal and state income tax count in proportion to the share of those
/// budgets granted to the city. Local income tax counts in full.
pub fn compute_contribution(inputs: &TaxpayerInputs, grants: &GrantTotals) -> f64 {
    let contribution = grants.federal_ratio() * dollars(inputs.federal_income_tax)
        + grants.state_ratio() * dollars(inputs.state_income_tax)
        + dollars(inputs.local_income_tax);
    round_cents(contribution)
}

/// One agency's slice of the taxpayer's contribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyContribution {
    pub name: String,
    pub amount: f64,
    /// Fraction of the total budget
    pub share: f64,
    /// Rounded to cents on its own, so rows may not add up to the total
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionResult {
    pub your_contribution: f64,
    pub rows: Vec<AgencyContribution>,
}

impl ContributionResult {
    pub fn new(your_contribution: f64, agencies: &[AgencyTotal], total_budget: f64) -> Self {
        ContributionResult {
            your_contribution,
            rows: allocate(your_contribution, agencies, total_budget),
        }
    }
}

/// Split `your_contribution` across agencies by their share of `total_budget`.
pub fn allocate(
    your_contribution: f64,
    agencies: &[AgencyTotal],
    total_budget: f64,
) -> Vec<AgencyContribution> {
    agencies
        .iter()
        .map(|agency| {
            let share = agency.share_of(total_budget);
            AgencyContribution {
                name: agency.display_name().to_string(),
                amount: agency.amount,
                share,
                contribution: round_cents(your_contribution * share),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::TOTAL_NYC_BUDGET;

    #[test]
    fn contribution_against_published_budget() {
        let grants = GrantTotals::from_budget(TOTAL_NYC_BUDGET);
        let inputs = TaxpayerInputs::new(1000, 1000, 500);
        // 1.9895... + 91.5299... + 500
        assert_eq!(compute_contribution(&inputs, &grants), 593.52);
    }

    #[test]
    fn local_tax_counts_in_full() {
        let grants = GrantTotals::from_budget(TOTAL_NYC_BUDGET);
        let inputs = TaxpayerInputs::new(0, 0, 1234);
        assert_eq!(compute_contribution(&inputs, &grants), 1234.0);
    }

    #[test]
    fn zero_budget_leaves_only_local_tax() {
        let grants = GrantTotals::from_budget(0.0);
        let inputs = TaxpayerInputs::new(5000, 2000, 300);
        assert_eq!(compute_contribution(&inputs, &grants), 300.0);
    }

    #[test]
    fn unparsed_input_propagates_nan() {
        let grants = GrantTotals::from_budget(TOTAL_NYC_BUDGET);
        let inputs = TaxpayerInputs::parse("1000", "", "500");
        assert!(!inputs.is_complete());
        assert!(compute_contribution(&inputs, &grants).is_nan());
    }

    #[test]
    fn allocation_is_proportional() {
        let agencies = vec![
            AgencyTotal {
                name: Some("Education".to_string()),
                amount: 750.0,
            },
            AgencyTotal {
                name: Some("Parks".to_string()),
                amount: 250.0,
            },
        ];
        let result = ContributionResult::new(40.0, &agencies, 1000.0);
        assert_eq!(result.rows[0].contribution, 30.0);
        assert_eq!(result.rows[1].contribution, 10.0);
        assert_eq!(result.rows[1].share, 0.25);
    }

    #[test]
    fn allocation_rows_rounded_independently() {
        let agencies: Vec<_> = ["a", "b", "c"]
            .iter()
            .map(|name| AgencyTotal {
                name: Some(name.to_string()),
                amount: 1.0,
            })
            .collect();
        let rows = allocate(10.0, &agencies, 3.0);
        assert!(rows.iter().all(|r| r.contribution == 3.33));
        let sum: f64 = rows.iter().map(|r| r.contribution).sum();
        assert_ne!(sum, 10.0);
    }

    #[test]
    fn allocation_of_nan_contribution_is_nan() {
        let agencies = vec![AgencyTotal {
            name: None,
            amount: 1.0,
        }];
        let rows = allocate(f64::NAN, &agencies, 1.0);
        assert!(rows[0].contribution.is_nan());
        assert_eq!(rows[0].name, "null");
    }

    #[test]
    fn parse_int_reads_leading_integer() {
        assert_eq!(parse_int("1000"), Some(1000.0));
        assert_eq!(parse_int("12.9"), Some(12.0));
        assert_eq!(parse_int("  42abc"), Some(42.0));
        assert_eq!(parse_int("-7"), Some(-7.0));
        assert_eq!(parse_int("+8"), Some(8.0));
        assert_eq!(parse_int("0x1A"), Some(26.0));
        assert_eq!(parse_int("1e3"), Some(1.0));
    }

    #[test]
    fn parse_int_accepts_integers_beyond_i64() {
        assert_eq!(parse_int("10000000000000000000"), Some(1e19));
        assert_eq!(
            parse_int("-9223372036854775808"),
            Some(-9_223_372_036_854_775_808.0)
        );
        assert_eq!(parse_int("0x10000000000000000"), Some(18_446_744_073_709_551_616.0));

        let grants = GrantTotals::from_budget(TOTAL_NYC_BUDGET);
        let inputs = TaxpayerInputs::parse("0", "0", "10000000000000000000");
        assert_eq!(compute_contribution(&inputs, &grants), 1e19);
    }

    #[test]
    fn parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(".5"), None);
        assert_eq!(parse_int("0x"), None);
    }
}
