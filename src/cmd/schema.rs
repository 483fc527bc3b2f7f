//! Schema command - print the expected dataset format

use crate::core::BudgetLineItem;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the dataset
    JsonSchema,
    /// Field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Vec<BudgetLineItem>);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Budget Dataset Format");
        println!("=====================");
        println!();
        println!("A JSON array of line items:");
        println!();
        for (name, required, description) in FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:10} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Any other fields are ignored.");
        Ok(())
    }
}

const FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    (
        "agency",
        false,
        "Spending agency; null or missing groups as an unnamed agency",
    ),
    ("amount", true, "Line item amount in dollars"),
];
