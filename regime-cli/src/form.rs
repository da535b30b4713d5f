//! Turns raw command-line amounts into validated [`TaxInputs`].

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use regime_core::{InputError, SECTION_80C_CAP, TaxInputs};

use crate::utils::{ParseDecimalError, parse_decimal};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{field}: {source}")]
    Unparseable {
        field: &'static str,
        #[source]
        source: ParseDecimalError,
    },

    #[error(transparent)]
    Invalid(#[from] InputError),
}

/// Amounts exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeForm {
    pub annual_salary: String,
    pub section_80c_investment: String,
    pub hra_exemption: String,
    pub standard_deduction: String,
    pub other_deductions: String,
}

impl IncomeForm {
    /// Parses every field and validates the result.
    ///
    /// All problems are reported together. An 80C amount above
    /// [`SECTION_80C_CAP`] is accepted but clamped, with a warning.
    pub fn parse(&self) -> Result<TaxInputs, Vec<FormError>> {
        let mut errors = Vec::new();
        let mut amount = |field: &'static str, raw: &str| -> Decimal {
            parse_decimal(raw).unwrap_or_else(|source| {
                errors.push(FormError::Unparseable { field, source });
                Decimal::ZERO
            })
        };

        let mut inputs = TaxInputs {
            annual_salary: amount("annual salary", &self.annual_salary),
            section_80c_investment: amount("section 80C investment", &self.section_80c_investment),
            hra_exemption: amount("HRA exemption", &self.hra_exemption),
            standard_deduction: amount("standard deduction", &self.standard_deduction),
            other_deductions: amount("other deductions", &self.other_deductions),
        };

        if let Err(invalid) = inputs.validate() {
            errors.extend(invalid.into_iter().map(FormError::from));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        clamp_80c(&mut inputs);
        Ok(inputs)
    }
}

/// Caps the 80C investment the way the input form does.
pub fn clamp_80c(inputs: &mut TaxInputs) {
    if inputs.section_80c_investment > SECTION_80C_CAP {
        warn!(
            entered = %inputs.section_80c_investment,
            cap = %SECTION_80C_CAP,
            "section 80C investment above the limit, using the limit"
        );
        inputs.section_80c_investment = SECTION_80C_CAP;
    }
}
