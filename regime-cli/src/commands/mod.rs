//! One module per subcommand. Each returns the text to print so the
//! handlers can be driven directly from tests.

pub mod ask;
pub mod batch;
pub mod compare;
pub mod history;

use anyhow::bail;

use regime_core::TaxInputs;

use crate::form::IncomeForm;

/// Parses the income form, reporting every invalid field at once.
pub fn parse_income(form: &IncomeForm) -> anyhow::Result<TaxInputs> {
    match form.parse() {
        Ok(inputs) => Ok(inputs),
        Err(errors) => {
            let details: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
            bail!("invalid input:\n{}", details.join("\n"))
        }
    }
}
