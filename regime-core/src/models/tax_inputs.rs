use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest 80C investment that reduces legacy-regime taxable income.
pub const SECTION_80C_CAP: Decimal = dec!(150000);

/// Input rejected at the boundary before it reaches the calculators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} cannot be negative (got {value})")]
    Negative {
        field: &'static str,
        value: Decimal,
    },
}

/// Monetary inputs for a single comparison.
///
/// Every field is a plain amount; the calculators accept any value,
/// including negatives. Use [`TaxInputs::validate`] at the edge of the
/// system to reject economically meaningless input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    pub annual_salary: Decimal,
    pub section_80c_investment: Decimal,
    pub hra_exemption: Decimal,
    pub standard_deduction: Decimal,
    pub other_deductions: Decimal,
}

impl TaxInputs {
    /// Returns one error per negative field, in declaration order.
    pub fn validate(&self) -> Result<(), Vec<InputError>> {
        let errors: Vec<InputError> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| *value < Decimal::ZERO)
            .map(|(field, value)| InputError::Negative { field, value })
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("annual salary", self.annual_salary),
            ("section 80C investment", self.section_80c_investment),
            ("HRA exemption", self.hra_exemption),
            ("standard deduction", self.standard_deduction),
            ("other deductions", self.other_deductions),
        ]
    }
}
