pub mod budget;
pub mod contribution;
pub mod format;
pub mod rates;
pub mod view;

// Flat public surface for domain types and functions.
pub use budget::{aggregate, AgencyTotal, BudgetLineItem, BudgetSnapshot};
pub use contribution::{AgencyContribution, TaxpayerInputs};
pub use format::{format_dollars, format_number, format_percent, format_plain};
pub use rates::GrantBase;
pub use view::{Command, Selection, Session, View};
