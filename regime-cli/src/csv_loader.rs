//! CSV loader for batch comparisons.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column                   | Required | Notes                         |
//! |--------------------------|----------|-------------------------------|
//! | `annual_salary`          | yes      | e.g. `800000`                 |
//! | `section_80c_investment` | no       | clamped to 150,000 on load    |
//! | `hra_exemption`          | no       |                               |
//! | `standard_deduction`     | no       |                               |
//! | `other_deductions`       | no       |                               |
//!
//! Missing optional columns and empty cells count as 0.
//!
//! ```csv
//! annual_salary,section_80c_investment,hra_exemption,standard_deduction,other_deductions
//! 800000,150000,50000,50000,0
//! 1500000,,,,
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use regime_core::{InputError, TaxInputs};

use crate::form::clamp_80c;

#[derive(Debug, Deserialize)]
struct CsvRow {
    annual_salary: Decimal,
    #[serde(default)]
    section_80c_investment: Option<Decimal>,
    #[serde(default)]
    hra_exemption: Option<Decimal>,
    #[serde(default)]
    standard_deduction: Option<Decimal>,
    #[serde(default)]
    other_deductions: Option<Decimal>,
}

#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing `annual_salary`, or a non-numeric cell.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based; the header is row 0.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InputError,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxInputs, CsvLoadError> {
    let mut inputs = TaxInputs {
        annual_salary: row.annual_salary,
        section_80c_investment: row.section_80c_investment.unwrap_or_default(),
        hra_exemption: row.hra_exemption.unwrap_or_default(),
        standard_deduction: row.standard_deduction.unwrap_or_default(),
        other_deductions: row.other_deductions.unwrap_or_default(),
    };

    if let Err(mut errors) = inputs.validate() {
        return Err(CsvLoadError::InvalidRow {
            row: row_number,
            source: errors.remove(0),
        });
    }

    clamp_80c(&mut inputs);
    Ok(inputs)
}

/// Parses CSV text into one [`TaxInputs`] per data row, in file order.
pub fn load_from_str(input: &str) -> Result<Vec<TaxInputs>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let rows = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "loaded batch inputs");
    Ok(rows)
}

/// Reads `path` and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxInputs>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
