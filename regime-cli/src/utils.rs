use rust_decimal::Decimal;
use thiserror::Error;

/// A string that is not a decimal amount.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid amount '{input}': {reason}")]
pub struct ParseDecimalError {
    pub input: String,
    pub reason: String,
}

/// Trims whitespace, a leading rupee sign and thousands separators.
fn normalize_amount(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('₹').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a user-entered amount such as `"8,00,000"` or `"₹1,234.50"`.
///
/// Empty input is treated as 0, matching an untouched form field.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })
}
